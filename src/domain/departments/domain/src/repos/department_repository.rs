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
    Department,
    DepartmentExtension,
    DepartmentExtensionID,
    DepartmentID,
    DepartmentUpdate,
    NewDepartment,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Storage of departments and their extensions.
///
/// Implementations keep the nested set bounds of extensions consistent after
/// every structural change and enforce uniqueness of department values.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Stores the department row. When the new department names an extension
    /// or a parent, the extension is stored in the same step, so a failure
    /// leaves nothing behind.
    async fn create_department(
        &self,
        new_department: &NewDepartment,
        has_block_guard: bool,
    ) -> Result<Department, CreateDepartmentError>;

    async fn create_extension(
        &self,
        department_id: DepartmentID,
        name: &str,
        parent_id: Option<DepartmentExtensionID>,
    ) -> Result<DepartmentExtension, CreateDepartmentExtensionError>;

    async fn get_department(&self, department_id: DepartmentID)
    -> Result<Department, GetDepartmentError>;

    async fn update_department(
        &self,
        department_id: DepartmentID,
        update: &DepartmentUpdate,
    ) -> Result<Department, UpdateDepartmentError>;

    /// Removes the department together with its extension. Departments with a
    /// block guard are only removed while blocked, checked atomically with
    /// the removal.
    async fn delete_department(
        &self,
        department_id: DepartmentID,
    ) -> Result<Department, DeleteDepartmentRecordError>;

    /// All departments with their extensions, in id order
    async fn list_departments(&self) -> Result<Vec<Department>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CreateDepartmentError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateDepartmentValueError),

    #[error("Parent extension {parent_id} not found")]
    ParentNotFound { parent_id: DepartmentExtensionID },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum CreateDepartmentExtensionError {
    #[error(transparent)]
    NotFound(#[from] DepartmentNotFoundError),

    #[error("Department {department_id} already has an extension")]
    AlreadyExists { department_id: DepartmentID },

    #[error("Parent extension {parent_id} not found")]
    ParentNotFound { parent_id: DepartmentExtensionID },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum GetDepartmentError {
    #[error(transparent)]
    NotFound(#[from] DepartmentNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum UpdateDepartmentError {
    #[error(transparent)]
    NotFound(#[from] DepartmentNotFoundError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateDepartmentValueError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum DeleteDepartmentRecordError {
    #[error(transparent)]
    NotFound(#[from] DepartmentNotFoundError),

    #[error(transparent)]
    NotPermitted(#[from] DeleteNotPermittedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Department {department_id} not found")]
pub struct DepartmentNotFoundError {
    pub department_id: DepartmentID,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Department {department_id} must be blocked before it can be deleted")]
pub struct DeleteNotPermittedError {
    pub department_id: DepartmentID,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Department '{value}' already exists")]
pub struct DuplicateDepartmentValueError {
    pub value: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
