// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use internal_error::InternalError;
use thiserror::Error;

use crate::{IllegalJobTransitionError, Job, JobID, JobOutcome, NewJob};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Selects which queued jobs an agent is willing to take
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TakeJobFilter {
    pub group: Option<String>,
}

impl TakeJobFilter {
    pub fn group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait JobQueue: Send + Sync {
    /// Places a new job into the queue in `Queued` state
    async fn create_job(
        &self,
        new_job: NewJob,
        now: DateTime<Utc>,
    ) -> Result<Job, CreateJobError>;

    async fn get_job(&self, job_id: JobID) -> Result<Job, GetJobError>;

    /// Atomically picks the oldest ready job matching the filter and marks it
    /// `Running`
    async fn try_take(
        &self,
        filter: &TakeJobFilter,
        now: DateTime<Utc>,
    ) -> Result<Option<Job>, TakeJobError>;

    async fn finish_job(
        &self,
        job_id: JobID,
        outcome: JobOutcome,
        now: DateTime<Utc>,
    ) -> Result<Job, FinishJobError>;

    /// Number of jobs matching the filter that are still waiting
    async fn count_queued_jobs(&self, filter: &TakeJobFilter) -> Result<usize, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CreateJobError {
    #[error("Job rejected by the queue: {reason}")]
    Rejected { reason: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum GetJobError {
    #[error(transparent)]
    NotFound(#[from] JobNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum TakeJobError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum FinishJobError {
    #[error(transparent)]
    NotFound(#[from] JobNotFoundError),

    #[error(transparent)]
    IllegalTransition(#[from] IllegalJobTransitionError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Job {job_id} not found")]
pub struct JobNotFoundError {
    pub job_id: JobID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
