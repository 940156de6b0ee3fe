// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Time limit of {limit:?} exceeded")]
pub struct TimeLimitExceededError {
    pub limit: Duration,
}

/// Runs `fut` until it completes or `limit` passes on the given clock,
/// whichever comes first. A future that finishes exactly at the limit wins.
pub async fn run_with_time_limit<F: Future>(
    time_source: &dyn SystemTimeSource,
    limit: Duration,
    fut: F,
) -> Result<F::Output, TimeLimitExceededError> {
    tokio::select! {
        biased;

        output = fut => Ok(output),
        () = time_source.sleep(limit) => Err(TimeLimitExceededError { limit }),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
