// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{UserID, UserRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Directory identifier (DN) of an employee record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeDn(String);

impl EmployeeDn {
    pub fn new(dn: impl Into<String>) -> Self {
        Self(dn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeDn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Employee attributes this subsystem reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub dn: EmployeeDn,
    pub name: String,
    pub department: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identity on whose behalf an employee record is changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeChangeContext {
    pub user_role: UserRole,
    /// Change author for audit, absent for system-initiated changes
    pub acting_user_id: Option<UserID>,
    /// Whether the change must also be written to the directory
    pub use_ldap: bool,
}
