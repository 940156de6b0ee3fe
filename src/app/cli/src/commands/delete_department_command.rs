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

pub struct DeleteDepartmentCommand {
    department_service: Arc<dyn DepartmentService>,
    department_id: DepartmentID,
}

impl DeleteDepartmentCommand {
    pub fn new(department_service: Arc<dyn DepartmentService>, department_id: DepartmentID) -> Self {
        Self {
            department_service,
            department_id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for DeleteDepartmentCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let department = match self
            .department_service
            .delete_department(self.department_id)
            .await
        {
            Ok(department) => department,
            Err(DeleteDepartmentError::NotFound(e)) => return Err(CLIError::failure(e)),
            Err(DeleteDepartmentError::DeleteNotPermitted(e)) => {
                return Err(CLIError::failure(e));
            }
            Err(e) => return Err(CLIError::critical(e)),
        };

        eprintln!(
            "{}",
            console::style(format!("Department '{}' deleted", department.value))
                .green()
                .bold()
        );

        Ok(())
    }
}
