// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;

use dill::{Catalog, CatalogBuilder};
use observability::init::{Guards, LoggingConfig};
use phonebook_departments::*;
use phonebook_departments_inmem::{
    InMemoryCacheStore,
    InMemoryDepartmentRepository,
    InMemoryEmployeeDirectory,
};
use phonebook_task_system_inmem::InMemoryJobQueue;
use phonebook_task_system_services::JobAgentImpl;
use time_source::SystemTimeSourceDefault;

use crate::config::{CLIConfig, SeedConfig};
use crate::error::*;
use crate::{cli, cli_commands};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "phonebook";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(args: cli::Cli) -> Result<(), CLIError> {
    let guards = configure_logging(&args);
    observability::panic_handler::trace_panics(true);

    tracing::info!(
        version = VERSION,
        args = ?std::env::args().collect::<Vec<_>>(),
        config = ?args.config,
        "Initializing {BINARY_NAME}"
    );

    let verbosity_level = args.verbose;
    let result = run_command(args).await;

    match &result {
        Ok(()) => {
            tracing::info!("Command successful");
        }
        Err(err) => {
            tracing::error!(
                error_dbg = ?err,
                error = %err.pretty(true),
                "Command failed",
            );

            if verbosity_level == 0 {
                eprintln!("{}", err.pretty(false));
            }
        }
    }

    // Flush all logging sinks
    drop(guards);

    result
}

async fn run_command(args: cli::Cli) -> Result<(), CLIError> {
    let config = load_config(args.config.as_deref())?;

    let catalog = configure_catalog(&config).build();

    if let Some(seed) = &config.seed {
        seed_stores(&catalog, seed).await?;
    }

    let mut command = cli_commands::get_command(&catalog, args.command)?;
    command.run().await
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Catalog
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn configure_catalog(config: &CLIConfig) -> CatalogBuilder {
    let mut b = CatalogBuilder::new();

    b.add::<SystemTimeSourceDefault>();

    b.add::<InMemoryDepartmentRepository>();
    b.add::<InMemoryEmployeeDirectory>();
    b.add::<InMemoryCacheStore>();

    b.add::<InMemoryJobQueue>();
    b.add::<JobAgentImpl>();

    phonebook_departments_services::register_dependencies(&mut b);

    b.add_value(config.departments_config());
    b.add_value(config.job_agent_config());

    b
}

/// Loads configured departments and employees into the in-memory stores
pub async fn seed_stores(catalog: &Catalog, seed: &SeedConfig) -> Result<(), CLIError> {
    let department_service = catalog.get_one::<dyn DepartmentService>()?;
    let employee_directory = catalog.get_one::<InMemoryEmployeeDirectory>()?;

    for department in &seed.departments {
        let new_department = NewDepartment {
            value: department.value.clone(),
            block: department.block,
            extension_name: department.extension_name.clone(),
            parent_id: None,
        };

        department_service
            .create_department(new_department)
            .await
            .map_err(CLIError::usage_error_from)?;
    }

    for employee in &seed.employees {
        let employee_record = Employee {
            dn: EmployeeDn::new(&employee.dn),
            name: employee.name.clone(),
            department: employee.department.clone(),
        };

        if employee.in_directory {
            employee_directory.add_directory_employee(employee_record);
        } else {
            employee_directory.add_local_employee(employee_record);
        }
    }

    tracing::debug!(
        departments = seed.departments.len(),
        employees = seed.employees.len(),
        "Seeded in-memory stores"
    );

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Config
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn load_config(path: Option<&Path>) -> Result<CLIConfig, CLIError> {
    let config = match path {
        Some(path) => CLIConfig::load(path)?,
        None => CLIConfig::sample(),
    };

    tracing::debug!(?config, "Loaded configuration");

    Ok(config)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Logging
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn configure_logging(args: &cli::Cli) -> Guards {
    observability::init::init(&LoggingConfig {
        verbosity_level: args.verbose,
        log_file: args.log_file.clone(),
    })
}

