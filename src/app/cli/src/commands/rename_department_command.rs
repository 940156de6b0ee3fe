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
use phonebook_task_system::{GetJobError, JobAgent, JobID, JobQueue, JobStatus, TakeJobFilter};
use thiserror::Error;

use super::{CLIError, Command};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct RenameDepartmentCommand {
    submit_use_case: Arc<dyn SubmitRenameDepartmentTaskUseCase>,
    rename_use_case: Arc<dyn RenameDepartmentUseCase>,
    job_queue: Arc<dyn JobQueue>,
    job_agent: Arc<dyn JobAgent>,
    config: Arc<DepartmentsConfig>,
    request: RenameDepartmentRequest,
    sync: bool,
}

impl RenameDepartmentCommand {
    pub fn new(
        submit_use_case: Arc<dyn SubmitRenameDepartmentTaskUseCase>,
        rename_use_case: Arc<dyn RenameDepartmentUseCase>,
        job_queue: Arc<dyn JobQueue>,
        job_agent: Arc<dyn JobAgent>,
        config: Arc<DepartmentsConfig>,
        request: RenameDepartmentRequest,
        sync: bool,
    ) -> Self {
        Self {
            submit_use_case,
            rename_use_case,
            job_queue,
            job_agent,
            config,
            request,
            sync,
        }
    }

    async fn rename_now(&self) -> Result<(), CLIError> {
        match self.rename_use_case.execute(&self.request).await {
            Ok(report) => {
                eprintln!(
                    "{}",
                    console::style(format!(
                        "Moved {} employee(s) from '{}' to '{}'",
                        report.renamed.len(),
                        report.old_name,
                        report.new_name
                    ))
                    .green()
                    .bold()
                );
                Ok(())
            }
            Err(e) if e.is_nothing_to_do() => {
                eprintln!("{}", console::style(e.to_string()).yellow());
                Ok(())
            }
            Err(RenameDepartmentError::PerEmployeeUpdateFailed(e)) => {
                for failure in &e.report.failed {
                    eprintln!(
                        "  {} {}: {}",
                        console::style("failed").red(),
                        failure.employee_dn,
                        failure.reason
                    );
                }
                Err(CLIError::failure(e))
            }
            Err(e @ RenameDepartmentError::Internal(_)) => Err(CLIError::critical(e)),
            Err(e) => Err(CLIError::usage_error_from(e)),
        }
    }

    async fn rename_via_queue(&self) -> Result<(), CLIError> {
        let job = match self.submit_use_case.execute(self.request.clone()).await {
            Ok(job) => job,
            Err(
                e @ (SubmitRenameDepartmentTaskError::InvalidRequest(_)
                | SubmitRenameDepartmentTaskError::Validation(_)),
            ) => return Err(CLIError::usage_error_from(e)),
            Err(e) => return Err(CLIError::critical(e)),
        };

        eprintln!(
            "{}",
            console::style(format!("Rename job {} queued", job.job_id)).dim()
        );

        self.job_agent
            .run_until_idle(&TakeJobFilter::group(&self.config.rename_task_group))
            .await?;

        let job = match self.job_queue.get_job(job.job_id).await {
            Ok(job) => job,
            Err(GetJobError::NotFound(e)) => return Err(CLIError::critical(e)),
            Err(GetJobError::Internal(e)) => return Err(e.into()),
        };

        match job.status {
            JobStatus::Done => {
                eprintln!(
                    "{}",
                    console::style(format!(
                        "Department '{}' renamed to '{}'",
                        self.request.old_name, self.request.new_name
                    ))
                    .green()
                    .bold()
                );
                Ok(())
            }
            JobStatus::Failed => Err(CLIError::failure(RenameJobFailedError {
                job_id: job.job_id,
                reason: job.failure_reason.unwrap_or_default(),
            })),
            JobStatus::Queued | JobStatus::Running => {
                eprintln!(
                    "{}",
                    console::style(format!("Rename job {} is still {}", job.job_id, job.status))
                        .yellow()
                );
                Ok(())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for RenameDepartmentCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        if self.sync {
            self.rename_now().await
        } else {
            self.rename_via_queue().await
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Rename job {job_id} failed: {reason}")]
pub struct RenameJobFailedError {
    pub job_id: JobID,
    pub reason: String,
}
