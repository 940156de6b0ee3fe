// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use phonebook_departments::DepartmentListCache;

use super::{CLIError, Command};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ListDepartmentsCommand {
    list_cache: Arc<dyn DepartmentListCache>,
    limit: Option<usize>,
}

impl ListDepartmentsCommand {
    pub fn new(list_cache: Arc<dyn DepartmentListCache>, limit: Option<usize>) -> Self {
        Self { list_cache, limit }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for ListDepartmentsCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let listing = self
            .list_cache
            .get_list_departments_with_extension(self.limit)
            .await?;

        if listing.is_empty() {
            eprintln!("{}", console::style("There are no departments yet").yellow());
            return Ok(());
        }

        let width = listing
            .entries
            .iter()
            .map(|e| e.value.chars().count())
            .max()
            .unwrap_or_default();

        for entry in &listing.entries {
            println!("{:width$}  {}", entry.value, entry.label);
        }

        Ok(())
    }
}
