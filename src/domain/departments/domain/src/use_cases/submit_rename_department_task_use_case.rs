// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use phonebook_task_system::Job;
use thiserror::Error;

use crate::{
    DepartmentValidationError,
    RenameDepartmentRequest,
    RenameRequestInvalidError,
    RenameValidationError,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Validates a rename and defers its propagation to the job queue
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SubmitRenameDepartmentTaskUseCase: Send + Sync {
    /// Returns the queued job, no employee data is touched
    async fn execute(
        &self,
        request: RenameDepartmentRequest,
    ) -> Result<Job, SubmitRenameDepartmentTaskError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SubmitRenameDepartmentTaskError {
    #[error(transparent)]
    InvalidRequest(#[from] RenameRequestInvalidError),

    #[error(transparent)]
    Validation(#[from] DepartmentValidationError),

    #[error(transparent)]
    QueueSubmissionFailed(#[from] QueueSubmissionFailedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<RenameValidationError> for SubmitRenameDepartmentTaskError {
    fn from(value: RenameValidationError) -> Self {
        match value {
            RenameValidationError::InvalidRequest(e) => Self::InvalidRequest(e),
            RenameValidationError::Validation(e) => Self::Validation(e),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Job queue rejected the rename task: {reason}")]
pub struct QueueSubmissionFailedError {
    pub reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
