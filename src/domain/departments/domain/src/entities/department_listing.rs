// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::Department;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ordered mapping from department value to its display label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentListing {
    pub entries: Vec<DepartmentListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentListEntry {
    pub value: String,
    pub label: String,
}

impl DepartmentListing {
    /// Builds the listing of active departments ordered by extension name,
    /// then by value, truncated to `limit` entries
    pub fn build(mut departments: Vec<Department>, limit: usize) -> Self {
        departments.retain(|d| !d.block);
        departments.sort_by(|a, b| {
            sort_name(a)
                .cmp(sort_name(b))
                .then_with(|| a.value.cmp(&b.value))
        });

        let entries = departments
            .into_iter()
            .take(limit)
            .map(|d| DepartmentListEntry {
                label: department_label(&d.value, d.extension_name()),
                value: d.value,
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.label.as_str())
    }
}

fn sort_name(department: &Department) -> &str {
    department.extension_name().unwrap_or(&department.value)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// `"<extension name> (<value>)"` when the names differ, otherwise `value`
pub fn department_label(value: &str, extension_name: Option<&str>) -> String {
    match extension_name {
        Some(name) if !name.is_empty() && name != value => format!("{name} ({value})"),
        _ => value.to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
