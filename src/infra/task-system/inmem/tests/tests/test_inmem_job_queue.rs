// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Duration, TimeZone, Utc};
use phonebook_task_system_inmem::InMemoryJobQueue;
use phonebook_task_system_inmem::domain::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2050, 1, 1, 12, 0, 0).unwrap()
}

fn new_job(group: &str, scheduled_at: Option<DateTime<Utc>>) -> NewJob {
    NewJob {
        task_type: "RenameDepartment".to_string(),
        payload: serde_json::json!({"oldName": "Sales", "newName": "Marketing"}),
        scheduled_at,
        group: Some(group.to_string()),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_and_get_job() {
    let queue = InMemoryJobQueue::new();

    let job = queue.create_job(new_job("change", None), t0()).await.unwrap();
    assert_eq!(job.job_id, JobID::new(1));
    assert_eq!(job.status, JobStatus::Queued);
    assert_eq!(job.created_at, t0());

    let loaded = queue.get_job(job.job_id).await.unwrap();
    assert_eq!(loaded, job);

    assert!(matches!(
        queue.get_job(JobID::new(100)).await,
        Err(GetJobError::NotFound(JobNotFoundError { job_id })) if job_id == JobID::new(100)
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_job_rejects_empty_task_type() {
    let queue = InMemoryJobQueue::new();

    let mut job = new_job("change", None);
    job.task_type = "  ".to_string();

    assert!(matches!(
        queue.create_job(job, t0()).await,
        Err(CreateJobError::Rejected { .. })
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_take_respects_order_group_and_schedule() {
    let queue = InMemoryJobQueue::new();

    let delayed = queue
        .create_job(new_job("change", Some(t0() + Duration::minutes(10))), t0())
        .await
        .unwrap();
    let other_group = queue.create_job(new_job("sync", None), t0()).await.unwrap();
    let ready = queue.create_job(new_job("change", None), t0()).await.unwrap();

    let change = TakeJobFilter::group("change");
    assert_eq!(queue.count_queued_jobs(&change).await.unwrap(), 2);

    // Delayed job is skipped, other group is ignored
    let taken = queue.try_take(&change, t0()).await.unwrap().unwrap();
    assert_eq!(taken.job_id, ready.job_id);
    assert_eq!(taken.status, JobStatus::Running);
    assert_eq!(taken.started_at, Some(t0()));

    assert_eq!(queue.try_take(&change, t0()).await.unwrap(), None);

    // Delayed job becomes ready later
    let later = t0() + Duration::minutes(10);
    let taken = queue.try_take(&change, later).await.unwrap().unwrap();
    assert_eq!(taken.job_id, delayed.job_id);

    // No filter takes any group
    let taken = queue
        .try_take(&TakeJobFilter::default(), later)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(taken.job_id, other_group.job_id);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_finish_job() {
    let queue = InMemoryJobQueue::new();
    let job = queue.create_job(new_job("change", None), t0()).await.unwrap();

    // Can't finish before running
    assert!(matches!(
        queue.finish_job(job.job_id, JobOutcome::Success, t0()).await,
        Err(FinishJobError::IllegalTransition(_))
    ));

    queue
        .try_take(&TakeJobFilter::group("change"), t0())
        .await
        .unwrap();

    let finished = queue
        .finish_job(
            job.job_id,
            JobOutcome::failed("directory unavailable"),
            t0() + Duration::seconds(3),
        )
        .await
        .unwrap();

    assert_eq!(finished.status, JobStatus::Failed);
    assert_eq!(
        finished.failure_reason.as_deref(),
        Some("directory unavailable")
    );
    assert_eq!(queue.get_job(job.job_id).await.unwrap(), finished);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
