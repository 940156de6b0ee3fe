// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;
use std::time::Duration;

use dill::*;
use internal_error::InternalError;
use phonebook_departments::*;
use phonebook_task_system::{Job, JobOutcome, JobRunner};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs queued department renames under the extended time budget
pub struct RenameDepartmentJobRunner {
    rename_use_case: Arc<dyn RenameDepartmentUseCase>,
    config: Arc<DepartmentsConfig>,
}

#[component(pub)]
#[interface(dyn JobRunner)]
impl RenameDepartmentJobRunner {
    pub fn new(
        rename_use_case: Arc<dyn RenameDepartmentUseCase>,
        config: Arc<DepartmentsConfig>,
    ) -> Self {
        Self {
            rename_use_case,
            config,
        }
    }
}

#[async_trait::async_trait]
impl JobRunner for RenameDepartmentJobRunner {
    fn supported_task_type(&self) -> &'static str {
        TASK_TYPE_RENAME_DEPARTMENT
    }

    fn time_limit(&self) -> Option<Duration> {
        Some(self.config.rename_time_limit)
    }

    #[tracing::instrument(level = "info", skip_all, fields(job_id = %job.job_id))]
    async fn run_job(&self, job: &Job) -> Result<JobOutcome, InternalError> {
        let payload: RenameDepartmentTaskPayload = match serde_json::from_value(job.payload.clone())
        {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "Malformed rename task payload");
                return Ok(JobOutcome::failed(format!("Malformed payload: {e}")));
            }
        };

        match self.rename_use_case.execute(&payload.into()).await {
            Ok(report) => {
                tracing::info!(renamed = report.renamed.len(), "Rename task completed");
                Ok(JobOutcome::Success)
            }
            Err(e) if e.is_nothing_to_do() => {
                tracing::info!(reason = %e, "Rename task had nothing to do");
                Ok(JobOutcome::Success)
            }
            Err(RenameDepartmentError::Internal(e)) => Err(e),
            Err(e) => Ok(JobOutcome::failed(e.to_string())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
