// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dill::*;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryJobQueue {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    last_job_id: u64,
    // Ordered by id, which is also the creation order
    jobs: BTreeMap<JobID, Job>,
}

impl State {
    fn matching<'a>(&'a self, filter: &'a TakeJobFilter) -> impl Iterator<Item = &'a Job> + 'a {
        self.jobs
            .values()
            .filter(move |job| job.belongs_to(filter.group.as_deref()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn JobQueue)]
#[scope(Singleton)]
impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn create_job(
        &self,
        new_job: NewJob,
        now: DateTime<Utc>,
    ) -> Result<Job, CreateJobError> {
        if new_job.task_type.trim().is_empty() {
            return Err(CreateJobError::Rejected {
                reason: "task type must not be empty".to_string(),
            });
        }

        let mut state = self.state.lock().unwrap();

        state.last_job_id += 1;
        let job = Job::new(JobID::new(state.last_job_id), new_job, now);
        state.jobs.insert(job.job_id, job.clone());

        tracing::debug!(
            job_id = %job.job_id,
            task_type = %job.task_type,
            group = ?job.group,
            "Job queued"
        );

        Ok(job)
    }

    async fn get_job(&self, job_id: JobID) -> Result<Job, GetJobError> {
        let state = self.state.lock().unwrap();
        state
            .jobs
            .get(&job_id)
            .cloned()
            .ok_or(GetJobError::NotFound(JobNotFoundError { job_id }))
    }

    async fn try_take(
        &self,
        filter: &TakeJobFilter,
        now: DateTime<Utc>,
    ) -> Result<Option<Job>, TakeJobError> {
        let mut state = self.state.lock().unwrap();

        let Some(job) = state
            .jobs
            .values_mut()
            .find(|job| job.belongs_to(filter.group.as_deref()) && job.is_ready(now))
        else {
            return Ok(None);
        };

        job.start(now).int_err()?;

        Ok(Some(job.clone()))
    }

    async fn finish_job(
        &self,
        job_id: JobID,
        outcome: JobOutcome,
        now: DateTime<Utc>,
    ) -> Result<Job, FinishJobError> {
        let mut state = self.state.lock().unwrap();

        let job = state
            .jobs
            .get_mut(&job_id)
            .ok_or(FinishJobError::NotFound(JobNotFoundError { job_id }))?;
        job.finish(outcome, now)?;

        Ok(job.clone())
    }

    async fn count_queued_jobs(&self, filter: &TakeJobFilter) -> Result<usize, InternalError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .matching(filter)
            .filter(|job| job.status == JobStatus::Queued)
            .count())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
