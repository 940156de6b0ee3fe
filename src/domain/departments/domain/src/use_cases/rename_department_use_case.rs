// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{
    DepartmentValidationError,
    RenameDepartmentReport,
    RenameDepartmentRequest,
    RenameRequestInvalidError,
    RenameValidationError,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Applies a department rename to every employee attributed to the old name.
///
/// Employees are updated one by one without a surrounding transaction: a
/// failed update does not stop the remaining ones, and updates that succeeded
/// stay in place when others fail. Repeating a rename is safe.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait RenameDepartmentUseCase: Send + Sync {
    async fn execute(
        &self,
        request: &RenameDepartmentRequest,
    ) -> Result<RenameDepartmentReport, RenameDepartmentError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum RenameDepartmentError {
    #[error(transparent)]
    InvalidRequest(#[from] RenameRequestInvalidError),

    #[error(transparent)]
    Validation(#[from] DepartmentValidationError),

    #[error(transparent)]
    NoEmployeesAffected(#[from] NoEmployeesAffectedError),

    #[error(transparent)]
    PerEmployeeUpdateFailed(#[from] EmployeeUpdatesFailedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl RenameDepartmentError {
    /// Whether the error only signals that there was nothing to rename
    pub fn is_nothing_to_do(&self) -> bool {
        matches!(self, Self::NoEmployeesAffected(_))
    }
}

impl From<RenameValidationError> for RenameDepartmentError {
    fn from(value: RenameValidationError) -> Self {
        match value {
            RenameValidationError::InvalidRequest(e) => Self::InvalidRequest(e),
            RenameValidationError::Validation(e) => Self::Validation(e),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No employees belong to department '{old_name}'")]
pub struct NoEmployeesAffectedError {
    pub old_name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Renaming '{}' to '{}' failed for {} of {} employees",
    report.old_name,
    report.new_name,
    report.failed.len(),
    report.affected()
)]
pub struct EmployeeUpdatesFailedError {
    pub report: RenameDepartmentReport,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
