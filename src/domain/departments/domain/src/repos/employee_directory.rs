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

use crate::{EmployeeChangeContext, EmployeeDn, UserRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Employee records held in the local database and, optionally, in the
/// directory
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// DNs of employees whose department attribute equals `department_name`.
    /// With `use_ldap` the directory is consulted instead of the local store.
    async fn list_employees_by_department_name(
        &self,
        department_name: &str,
        use_ldap: bool,
    ) -> Result<Vec<EmployeeDn>, InternalError>;

    /// Sets the department attribute of one employee
    async fn change_department(
        &self,
        employee_dn: &EmployeeDn,
        new_department_name: &str,
        context: &EmployeeChangeContext,
    ) -> Result<(), ChangeEmployeeDepartmentError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ChangeEmployeeDepartmentError {
    #[error("Role '{user_role}' is not allowed to change departments")]
    PermissionDenied { user_role: UserRole },

    #[error("Employee '{employee_dn}' not found")]
    NotFound { employee_dn: EmployeeDn },

    #[error("Change of employee '{employee_dn}' rejected: {reason}")]
    Rejected {
        employee_dn: EmployeeDn,
        reason: String,
    },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
