// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::*;
use internal_error::ResultIntoInternal;
use phonebook_departments::*;
use phonebook_task_system::{CreateJobError, Job, JobQueue, NewJob};
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SubmitRenameDepartmentTaskUseCaseImpl {
    job_queue: Arc<dyn JobQueue>,
    time_source: Arc<dyn SystemTimeSource>,
    config: Arc<DepartmentsConfig>,
}

#[component(pub)]
#[interface(dyn SubmitRenameDepartmentTaskUseCase)]
impl SubmitRenameDepartmentTaskUseCaseImpl {
    pub fn new(
        job_queue: Arc<dyn JobQueue>,
        time_source: Arc<dyn SystemTimeSource>,
        config: Arc<DepartmentsConfig>,
    ) -> Self {
        Self {
            job_queue,
            time_source,
            config,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SubmitRenameDepartmentTaskUseCase for SubmitRenameDepartmentTaskUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(old_name = %request.old_name, new_name = %request.new_name)
    )]
    async fn execute(
        &self,
        request: RenameDepartmentRequest,
    ) -> Result<Job, SubmitRenameDepartmentTaskError> {
        RenameRequestValidator::new(self.config.value_rules())
            .validate(&request.old_name, &request.new_name)?;

        let payload = serde_json::to_value(RenameDepartmentTaskPayload::from(request)).int_err()?;

        let job = self
            .job_queue
            .create_job(
                NewJob {
                    task_type: TASK_TYPE_RENAME_DEPARTMENT.to_string(),
                    payload,
                    scheduled_at: None,
                    group: Some(self.config.rename_task_group.clone()),
                },
                self.time_source.now(),
            )
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, error_msg = %e, "Rename task submission failed");
                let reason = match e {
                    CreateJobError::Rejected { reason } => reason,
                    CreateJobError::Internal(e) => e.reason(),
                };
                QueueSubmissionFailedError { reason }
            })?;

        tracing::info!(job_id = %job.job_id, "Rename task submitted");

        Ok(job)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
