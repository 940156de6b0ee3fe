// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use phonebook_departments::{DepartmentID, UserID, UserRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Parser)]
#[command(name = crate::BINARY_NAME)]
#[command(version = crate::VERSION)]
#[command(about = "Administration of phonebook departments", long_about = None)]
pub struct Cli {
    /// Sets the level of verbosity (repeat for more)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the YAML configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs into the specified file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    ListDepartments(ListDepartments),
    ShowDepartment(ShowDepartment),
    RenameDepartment(RenameDepartment),
    BlockDepartment(BlockDepartment),
    DeleteDepartment(DeleteDepartment),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Lists active departments with their display labels
#[derive(Debug, clap::Args)]
pub struct ListDepartments {
    /// Maximum number of entries to show
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Shows a single department
#[derive(Debug, clap::Args)]
pub struct ShowDepartment {
    pub id: DepartmentID,
}

/// Moves all employees of a department to a new department name
#[derive(Debug, clap::Args)]
pub struct RenameDepartment {
    /// Current department name
    pub old_name: String,

    /// New department name
    pub new_name: String,

    /// Write changes to the directory as well
    #[arg(long)]
    pub ldap: bool,

    /// Identity of the user performing the change
    #[arg(long, value_name = "ID")]
    pub user_id: Option<UserID>,

    /// Role of the user performing the change (user, secretary, hr, admin or
    /// a numeric mask)
    #[arg(long, default_value_t = UserRole::ADMIN)]
    pub role: UserRole,

    /// Rename immediately instead of going through the job queue
    #[arg(long)]
    pub sync: bool,
}

/// Deactivates a department so it can be deleted
#[derive(Debug, clap::Args)]
pub struct BlockDepartment {
    pub id: DepartmentID,
}

/// Deletes a blocked department
#[derive(Debug, clap::Args)]
pub struct DeleteDepartment {
    pub id: DepartmentID,
}
