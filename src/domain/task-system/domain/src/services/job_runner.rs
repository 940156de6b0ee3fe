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

use crate::{Job, JobOutcome};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Executes jobs of a single task type
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait JobRunner: Send + Sync {
    fn supported_task_type(&self) -> &'static str;

    /// Overrides the agent's default time limit for this task type
    fn time_limit(&self) -> Option<Duration> {
        None
    }

    /// Business failures are reported as [`JobOutcome::Failed`], an `Err`
    /// means the runner itself could not do its work
    async fn run_job(&self, job: &Job) -> Result<JobOutcome, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
