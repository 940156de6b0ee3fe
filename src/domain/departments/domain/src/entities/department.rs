// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{DepartmentExtension, DepartmentID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentID,
    /// Canonical short name, matches the `department` attribute of employees
    pub value: String,
    /// Deactivation marker, meaningful only when `has_block_guard` is set
    pub block: bool,
    /// Whether deletion requires the department to be blocked first
    pub has_block_guard: bool,
    pub extension: Option<DepartmentExtension>,
}

impl Department {
    pub fn state(&self) -> DepartmentState {
        if self.has_block_guard && self.block {
            DepartmentState::Blocked
        } else {
            DepartmentState::Active
        }
    }

    pub fn can_be_deleted(&self) -> bool {
        !self.has_block_guard || self.state() == DepartmentState::Blocked
    }

    pub fn extension_name(&self) -> Option<&str> {
        self.extension.as_ref().map(|e| e.name.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DepartmentState {
    Active,
    Blocked,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDepartment {
    pub value: String,
    pub block: bool,
    /// Display name, defaults to `value` when empty
    pub extension_name: Option<String>,
    pub parent_id: Option<crate::DepartmentExtensionID>,
}

impl NewDepartment {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_extension_name(mut self, name: impl Into<String>) -> Self {
        self.extension_name = Some(name.into());
        self
    }
}

/// Partial update, `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentUpdate {
    pub value: Option<String>,
    pub block: Option<bool>,
    pub extension_name: Option<String>,
}

impl DepartmentUpdate {
    pub fn block() -> Self {
        Self {
            block: Some(true),
            ..Default::default()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
