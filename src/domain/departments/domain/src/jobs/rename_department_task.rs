// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{RenameDepartmentRequest, UserID, UserRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const TASK_TYPE_RENAME_DEPARTMENT: &str = "RenameDepartment";

/// Stored payload of a deferred department rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameDepartmentTaskPayload {
    pub old_name: String,
    pub new_name: String,
    pub user_role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserID>,
    #[serde(default)]
    pub use_ldap: bool,
}

impl From<RenameDepartmentRequest> for RenameDepartmentTaskPayload {
    fn from(value: RenameDepartmentRequest) -> Self {
        Self {
            old_name: value.old_name,
            new_name: value.new_name,
            user_role: value.user_role,
            user_id: value.user_id,
            use_ldap: value.use_ldap,
        }
    }
}

impl From<RenameDepartmentTaskPayload> for RenameDepartmentRequest {
    fn from(value: RenameDepartmentTaskPayload) -> Self {
        Self {
            old_name: value.old_name,
            new_name: value.new_name,
            user_role: value.user_role,
            user_id: value.user_id,
            use_ldap: value.use_ldap,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
