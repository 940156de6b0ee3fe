// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Field rules applied to department values on every save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentValueRules {
    pub max_length: usize,
}

impl DepartmentValueRules {
    pub const FIELD_VALUE: &'static str = "value";

    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn validate_value(&self, value: &str) -> Result<(), DepartmentValidationError> {
        let mut errors = Vec::new();
        let mut violation = |message: String| {
            errors.push(FieldValidationError {
                field: Self::FIELD_VALUE,
                message,
            });
        };

        if value.trim().is_empty() {
            violation("must not be empty".to_string());
        } else if value.trim() != value {
            violation("must not start or end with whitespace".to_string());
        }

        let length = value.chars().count();
        if length > self.max_length {
            violation(format!(
                "must be at most {} characters long, got {length}",
                self.max_length
            ));
        }

        if value.chars().any(char::is_control) {
            violation("must not contain control characters".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DepartmentValidationError { errors })
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct DepartmentValidationError {
    pub errors: Vec<FieldValidationError>,
}

impl fmt::Display for DepartmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Department validation failed: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i != 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
