// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::Arc;

use dill::*;
use internal_error::{InternalError, ResultIntoInternal};
use phonebook_task_system::*;
use time_source::{SystemTimeSource, run_with_time_limit};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct JobAgentImpl {
    job_queue: Arc<dyn JobQueue>,
    job_runners_by_type: HashMap<String, Arc<dyn JobRunner>>,
    time_source: Arc<dyn SystemTimeSource>,
    agent_config: Arc<JobAgentConfig>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn JobAgent)]
#[scope(Singleton)]
impl JobAgentImpl {
    pub fn new(
        job_queue: Arc<dyn JobQueue>,
        job_runners: Vec<Arc<dyn JobRunner>>,
        time_source: Arc<dyn SystemTimeSource>,
        agent_config: Arc<JobAgentConfig>,
    ) -> Self {
        let job_runners_by_type = job_runners.into_iter().fold(
            HashMap::new(),
            |mut acc: HashMap<String, Arc<dyn JobRunner>>, runner| {
                let task_type = runner.supported_task_type().to_string();
                assert!(
                    !acc.contains_key(&task_type),
                    "Job runner for type '{task_type}' already exists",
                );
                acc.insert(task_type, runner);
                acc
            },
        );

        Self {
            job_queue,
            job_runners_by_type,
            time_source,
            agent_config,
        }
    }

    async fn run_job(&self, job: &Job) -> JobOutcome {
        let Some(runner) = self.job_runners_by_type.get(&job.task_type) else {
            tracing::error!(
                job_id = %job.job_id,
                task_type = %job.task_type,
                "No runner registered for task type"
            );
            return JobOutcome::failed(format!("Unsupported task type '{}'", job.task_type));
        };

        let time_limit = runner
            .time_limit()
            .unwrap_or(self.agent_config.default_time_limit);

        tracing::debug!(
            job_id = %job.job_id,
            task_type = %job.task_type,
            ?time_limit,
            "Running job"
        );

        match run_with_time_limit(self.time_source.as_ref(), time_limit, runner.run_job(job))
            .await
        {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                tracing::error!(
                    job_id = %job.job_id,
                    error = ?e,
                    error_msg = %e,
                    "Job runner failed"
                );
                JobOutcome::failed(e.reason())
            }
            Err(e) => {
                tracing::error!(
                    job_id = %job.job_id,
                    ?time_limit,
                    "Job exceeded its time limit"
                );
                JobOutcome::failed(e.to_string())
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl JobAgent for JobAgentImpl {
    async fn run(&self, filter: &TakeJobFilter) -> Result<(), InternalError> {
        loop {
            if self.run_single_job(filter).await?.is_none() {
                self.time_source
                    .sleep(self.agent_config.job_checking_interval)
                    .await;
            }
        }
    }

    #[tracing::instrument(level = "info", skip_all, fields(group = ?filter.group))]
    async fn run_single_job(&self, filter: &TakeJobFilter) -> Result<Option<Job>, InternalError> {
        let Some(job) = self
            .job_queue
            .try_take(filter, self.time_source.now())
            .await
            .int_err()?
        else {
            return Ok(None);
        };

        tracing::info!(job_id = %job.job_id, task_type = %job.task_type, "Job taken");

        let outcome = self.run_job(&job).await;

        let job = self
            .job_queue
            .finish_job(job.job_id, outcome, self.time_source.now())
            .await
            .int_err()?;

        tracing::info!(
            job_id = %job.job_id,
            status = %job.status,
            failure_reason = ?job.failure_reason,
            "Job finished"
        );

        Ok(Some(job))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
