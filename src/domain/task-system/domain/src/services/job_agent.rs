// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use internal_error::InternalError;

use crate::{Job, TakeJobFilter};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait JobAgent: Send + Sync {
    /// Runs the agent main loop
    async fn run(&self, filter: &TakeJobFilter) -> Result<(), InternalError>;

    /// Takes and runs at most one ready job, returning its final state
    async fn run_single_job(&self, filter: &TakeJobFilter) -> Result<Option<Job>, InternalError>;

    /// Runs jobs until none are ready, returning them in execution order
    async fn run_until_idle(&self, filter: &TakeJobFilter) -> Result<Vec<Job>, InternalError> {
        let mut finished = Vec::new();
        while let Some(job) = self.run_single_job(filter).await? {
            finished.push(job);
        }
        Ok(finished)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct JobAgentConfig {
    /// Pause between polls of an empty queue
    pub job_checking_interval: Duration,
    /// Time limit for runners that do not declare their own
    pub default_time_limit: Duration,
}

impl JobAgentConfig {
    pub fn new(job_checking_interval: Duration, default_time_limit: Duration) -> Self {
        Self {
            job_checking_interval,
            default_time_limit,
        }
    }
}

impl Default for JobAgentConfig {
    fn default() -> Self {
        Self {
            job_checking_interval: Duration::from_secs(1),
            default_time_limit: Duration::from_secs(30),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
