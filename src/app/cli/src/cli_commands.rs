// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::Catalog;
use phonebook_departments::RenameDepartmentRequest;

use crate::cli;
use crate::commands::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn get_command(catalog: &Catalog, command: cli::Command) -> Result<Box<dyn Command>, CLIError> {
    let command: Box<dyn Command> = match command {
        cli::Command::ListDepartments(c) => {
            Box::new(ListDepartmentsCommand::new(catalog.get_one()?, c.limit))
        }
        cli::Command::ShowDepartment(c) => {
            Box::new(ShowDepartmentCommand::new(catalog.get_one()?, c.id))
        }
        cli::Command::RenameDepartment(c) => Box::new(RenameDepartmentCommand::new(
            catalog.get_one()?,
            catalog.get_one()?,
            catalog.get_one()?,
            catalog.get_one()?,
            catalog.get_one()?,
            RenameDepartmentRequest::new(c.old_name, c.new_name)
                .acting_as(c.role, c.user_id)
                .with_ldap(c.ldap),
            c.sync,
        )),
        cli::Command::BlockDepartment(c) => {
            Box::new(BlockDepartmentCommand::new(catalog.get_one()?, c.id))
        }
        cli::Command::DeleteDepartment(c) => {
            Box::new(DeleteDepartmentCommand::new(catalog.get_one()?, c.id))
        }
    };

    Ok(command)
}
