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

pub struct ShowDepartmentCommand {
    department_service: Arc<dyn DepartmentService>,
    department_id: DepartmentID,
}

impl ShowDepartmentCommand {
    pub fn new(department_service: Arc<dyn DepartmentService>, department_id: DepartmentID) -> Self {
        Self {
            department_service,
            department_id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for ShowDepartmentCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let department = match self
            .department_service
            .get_department(self.department_id)
            .await
        {
            Ok(department) => department,
            Err(GetDepartmentError::NotFound(e)) => return Err(CLIError::failure(e)),
            Err(e) => return Err(CLIError::critical(e)),
        };

        let state = match department.state() {
            DepartmentState::Active => console::style("active").green(),
            DepartmentState::Blocked => console::style("blocked").red(),
        };

        println!("{}: {}", console::style("ID").dim(), department.id);
        println!("{}: {}", console::style("Value").dim(), department.value);
        println!(
            "{}: {}",
            console::style("Label").dim(),
            department_label(&department.value, department.extension_name())
        );
        println!("{}: {state}", console::style("State").dim());
        println!(
            "{}: {}",
            console::style("Block guard").dim(),
            if department.has_block_guard { "yes" } else { "no" }
        );

        if let Some(extension) = &department.extension {
            println!(
                "{}: {} [{}..{}]",
                console::style("Extension").dim(),
                extension.name,
                extension.lft,
                extension.rght
            );
        }

        Ok(())
    }
}
