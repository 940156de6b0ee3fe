// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod block_department_command;
mod delete_department_command;
mod list_departments_command;
mod rename_department_command;
mod show_department_command;

pub use block_department_command::*;
pub use delete_department_command::*;
pub use list_departments_command::*;
pub use rename_department_command::*;
pub use show_department_command::*;

pub use crate::error::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait(?Send)]
pub trait Command {
    async fn run(&mut self) -> Result<(), CLIError>;
}
