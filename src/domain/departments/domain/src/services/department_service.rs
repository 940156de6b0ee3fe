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
    DeleteNotPermittedError,
    Department,
    DepartmentExtensionID,
    DepartmentID,
    DepartmentNotFoundError,
    DepartmentUpdate,
    DepartmentValidationError,
    DuplicateDepartmentValueError,
    GetDepartmentError,
    NewDepartment,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Administrative operations on departments.
///
/// Every successful mutation runs the registered [`DepartmentLifecycleHook`]s.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait DepartmentService: Send + Sync {
    async fn get_department(&self, department_id: DepartmentID)
    -> Result<Department, GetDepartmentError>;

    async fn create_department(
        &self,
        new_department: NewDepartment,
    ) -> Result<Department, SaveDepartmentError>;

    async fn update_department(
        &self,
        department_id: DepartmentID,
        update: DepartmentUpdate,
    ) -> Result<Department, SaveDepartmentError>;

    /// Deletes the department and its extension, subject to the block guard
    async fn delete_department(
        &self,
        department_id: DepartmentID,
    ) -> Result<Department, DeleteDepartmentError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Explicit reactions to department mutations, invoked by [`DepartmentService`]
/// in registration order
#[async_trait::async_trait]
pub trait DepartmentLifecycleHook: Send + Sync {
    /// Called after a department row was created or updated
    async fn on_department_persisted(
        &self,
        department: &Department,
        created: bool,
    ) -> Result<(), InternalError> {
        let _ = (department, created);
        Ok(())
    }

    async fn on_department_deleted(&self, department: &Department) -> Result<(), InternalError> {
        let _ = department;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SaveDepartmentError {
    #[error(transparent)]
    Validation(#[from] DepartmentValidationError),

    #[error(transparent)]
    NotFound(#[from] DepartmentNotFoundError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateDepartmentValueError),

    #[error("Parent extension {parent_id} not found")]
    ParentNotFound { parent_id: DepartmentExtensionID },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum DeleteDepartmentError {
    #[error(transparent)]
    NotFound(#[from] DepartmentNotFoundError),

    #[error(transparent)]
    DeleteNotPermitted(#[from] DeleteNotPermittedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
