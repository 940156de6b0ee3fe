// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::{DepartmentValidationError, DepartmentValueRules};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Checks a proposed rename before any side effect takes place
#[derive(Debug, Clone, Copy)]
pub struct RenameRequestValidator {
    rules: DepartmentValueRules,
}

impl RenameRequestValidator {
    pub fn new(rules: DepartmentValueRules) -> Self {
        Self { rules }
    }

    pub fn validate(&self, old_name: &str, new_name: &str) -> Result<(), RenameValidationError> {
        if old_name.trim().is_empty() {
            return Err(RenameRequestInvalidError::new("old department name is empty").into());
        }
        if new_name.trim().is_empty() {
            return Err(RenameRequestInvalidError::new("new department name is empty").into());
        }

        self.rules.validate_value(new_name)?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameValidationError {
    #[error(transparent)]
    InvalidRequest(#[from] RenameRequestInvalidError),

    #[error(transparent)]
    Validation(#[from] DepartmentValidationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid rename request: {reason}")]
pub struct RenameRequestInvalidError {
    pub reason: String,
}

impl RenameRequestInvalidError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
