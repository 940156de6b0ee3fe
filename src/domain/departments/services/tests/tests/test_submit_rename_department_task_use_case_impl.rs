// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use phonebook_departments::*;
use phonebook_departments_services::SubmitRenameDepartmentTaskUseCaseImpl;
use phonebook_task_system::{CreateJobError, JobStatus, MockJobQueue, TakeJobFilter};
use pretty_assertions::assert_eq;
use time_source::SystemTimeSourceStub;

use crate::tests::departments_harness::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_submit_queues_job_without_touching_employees() {
    let harness = DepartmentsHarness::new();
    harness.add_employees("Sales", &["cn=alice"], false);

    let job = harness
        .submit_use_case
        .execute(admin_rename("Sales", "Marketing").with_ldap(true))
        .await
        .unwrap();

    assert_eq!(job.task_type, TASK_TYPE_RENAME_DEPARTMENT);
    assert_eq!(job.group.as_deref(), Some("change"));
    assert_eq!(job.status, JobStatus::Queued);
    assert_eq!(job.scheduled_at, None);
    assert_eq!(job.created_at, DepartmentsHarness::t0());
    assert_eq!(
        job.payload,
        serde_json::json!({
            "oldName": "Sales",
            "newName": "Marketing",
            "userRole": 8,
            "userId": 7,
            "useLdap": true,
        })
    );

    assert_eq!(harness.job_queue.get_job(job.job_id).await.unwrap(), job);
    assert_eq!(harness.department_of("cn=alice"), "Sales");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_invalid_request_queues_nothing() {
    let harness = DepartmentsHarness::new();

    let res = harness
        .submit_use_case
        .execute(admin_rename("", "Marketing"))
        .await;
    assert!(
        matches!(res, Err(SubmitRenameDepartmentTaskError::InvalidRequest(_))),
        "{res:?}"
    );

    let res = harness
        .submit_use_case
        .execute(admin_rename("Sales", &"x".repeat(100)))
        .await;
    assert!(
        matches!(res, Err(SubmitRenameDepartmentTaskError::Validation(_))),
        "{res:?}"
    );

    assert_eq!(
        harness
            .job_queue
            .count_queued_jobs(&TakeJobFilter::default())
            .await
            .unwrap(),
        0
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_queue_rejection() {
    let mut job_queue = MockJobQueue::new();
    job_queue.expect_create_job().times(1).returning(|_, _| {
        Err(CreateJobError::Rejected {
            reason: "queue is full".to_string(),
        })
    });

    let use_case = SubmitRenameDepartmentTaskUseCaseImpl::new(
        Arc::new(job_queue),
        Arc::new(SystemTimeSourceStub::new_set(DepartmentsHarness::t0())),
        Arc::new(DepartmentsConfig::default()),
    );

    let err = use_case
        .execute(admin_rename("Sales", "Marketing"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SubmitRenameDepartmentTaskError::QueueSubmissionFailed(QueueSubmissionFailedError { ref reason })
            if reason == "queue is full"
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_custom_task_group() {
    let harness = DepartmentsHarness::with_config(DepartmentsConfig {
        rename_task_group: "renames".to_string(),
        ..Default::default()
    });

    let job = harness
        .submit_use_case
        .execute(admin_rename("Sales", "Marketing"))
        .await
        .unwrap();

    assert_eq!(job.group.as_deref(), Some("renames"));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
