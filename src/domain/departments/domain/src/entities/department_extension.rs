// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{DepartmentExtensionID, DepartmentID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Display data and tree position of a department, owned exclusively by it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentExtension {
    pub id: DepartmentExtensionID,
    pub department_id: DepartmentID,
    pub parent_id: Option<DepartmentExtensionID>,
    /// Nested set bounds
    pub lft: u64,
    pub rght: u64,
    /// Full display name
    pub name: String,
}
