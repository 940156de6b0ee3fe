// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use crate::DepartmentValueRules;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct DepartmentsConfig {
    /// Upper bound of the directory `department` attribute
    pub value_max_length: usize,
    /// Listing size used when the caller does not specify one
    pub default_list_limit: usize,
    /// Whether departments must be blocked before they can be deleted
    pub block_guard: bool,
    pub list_cache_partition: String,
    /// Queue group rename jobs are submitted to
    pub rename_task_group: String,
    /// Time budget of a single rename job
    pub rename_time_limit: Duration,
}

impl DepartmentsConfig {
    pub const DEFAULT_LIST_CACHE_PARTITION: &'static str = "departments_local_info";
    pub const DEFAULT_RENAME_TASK_GROUP: &'static str = "change";

    pub fn value_rules(&self) -> DepartmentValueRules {
        DepartmentValueRules::new(self.value_max_length)
    }
}

impl Default for DepartmentsConfig {
    fn default() -> Self {
        Self {
            value_max_length: 64,
            default_list_limit: 1000,
            block_guard: true,
            list_cache_partition: Self::DEFAULT_LIST_CACHE_PARTITION.to_string(),
            rename_task_group: Self::DEFAULT_RENAME_TASK_GROUP.to_string(),
            rename_time_limit: Duration::from_secs(60 * 60),
        }
    }
}
