// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{EmployeeChangeContext, EmployeeDn, UserID, UserRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDepartmentRequest {
    pub old_name: String,
    pub new_name: String,
    pub user_role: UserRole,
    pub user_id: Option<UserID>,
    pub use_ldap: bool,
}

impl RenameDepartmentRequest {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
            user_role: UserRole::default(),
            user_id: None,
            use_ldap: false,
        }
    }

    pub fn acting_as(mut self, user_role: UserRole, user_id: Option<UserID>) -> Self {
        self.user_role = user_role;
        self.user_id = user_id;
        self
    }

    pub fn with_ldap(mut self, use_ldap: bool) -> Self {
        self.use_ldap = use_ldap;
        self
    }

    pub fn change_context(&self) -> EmployeeChangeContext {
        EmployeeChangeContext {
            user_role: self.user_role,
            acting_user_id: self.user_id,
            use_ldap: self.use_ldap,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Aggregated outcome of propagating a rename to employees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameDepartmentReport {
    pub old_name: String,
    pub new_name: String,
    /// Employees updated successfully, in processing order
    pub renamed: Vec<EmployeeDn>,
    /// Failed updates, in processing order
    pub failed: Vec<EmployeeUpdateFailure>,
}

impl RenameDepartmentReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn affected(&self) -> usize {
        self.renamed.len() + self.failed.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdateFailure {
    pub employee_dn: EmployeeDn,
    pub reason: String,
}
