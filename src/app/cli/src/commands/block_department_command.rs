// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use phonebook_departments::*;

use super::{CLIError, Command};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct BlockDepartmentCommand {
    department_service: Arc<dyn DepartmentService>,
    department_id: DepartmentID,
}

impl BlockDepartmentCommand {
    pub fn new(department_service: Arc<dyn DepartmentService>, department_id: DepartmentID) -> Self {
        Self {
            department_service,
            department_id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for BlockDepartmentCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let department = match self
            .department_service
            .update_department(self.department_id, DepartmentUpdate::block())
            .await
        {
            Ok(department) => department,
            Err(e @ SaveDepartmentError::Internal(_)) => return Err(CLIError::critical(e)),
            Err(e) => return Err(CLIError::failure(e)),
        };

        if !department.has_block_guard {
            eprintln!(
                "{}",
                console::style(format!(
                    "Department '{}' has no block guard, blocking has no effect",
                    department.value
                ))
                .yellow()
            );
            return Ok(());
        }

        eprintln!(
            "{}",
            console::style(format!("Department '{}' blocked", department.value))
                .green()
                .bold()
        );

        Ok(())
    }
}
