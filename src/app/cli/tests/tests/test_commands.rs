// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::sync::Arc;

use clap::Parser;
use dill::Catalog;
use phonebook_cli::cli::Cli;
use phonebook_cli::config::*;
use phonebook_cli::{CLIError, get_command};
use phonebook_departments::*;
use phonebook_departments_inmem::InMemoryEmployeeDirectory;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_rename_via_queue_moves_employees() {
    let harness = CommandHarness::new().await;

    harness
        .run(&["phonebook", "rename-department", "Sales", "Marketing"])
        .await
        .unwrap();

    assert_eq!(harness.department_of("uid=alice,ou=people"), "Marketing");
    assert_eq!(harness.department_of("uid=bob,ou=people"), "Marketing");
    assert_eq!(harness.department_of("uid=carol,ou=people"), "Support");
}

#[test_log::test(tokio::test)]
async fn test_rename_sync_writes_directory_with_acting_identity() {
    let harness = CommandHarness::new().await;

    harness
        .run(&[
            "phonebook",
            "rename-department",
            "Sales",
            "Marketing",
            "--sync",
            "--ldap",
            "--user-id",
            "7",
            "--role",
            "hr",
        ])
        .await
        .unwrap();

    let alice = EmployeeDn::new("uid=alice,ou=people");
    assert_eq!(
        harness
            .employee_directory
            .directory_employee(&alice)
            .unwrap()
            .department,
        "Marketing"
    );

    let change_log = harness.employee_directory.change_log();
    assert_eq!(change_log.len(), 2);
    assert!(
        change_log
            .iter()
            .all(|r| r.acting_user_id == Some(UserID::new(7)) && r.use_ldap)
    );
}

#[test_log::test(tokio::test)]
async fn test_rename_of_unknown_department_is_not_an_error() {
    let harness = CommandHarness::new().await;

    harness
        .run(&["phonebook", "rename-department", "Nowhere", "Marketing", "--sync"])
        .await
        .unwrap();

    harness
        .run(&["phonebook", "rename-department", "Nowhere", "Marketing"])
        .await
        .unwrap();

    assert!(harness.employee_directory.change_log().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_rename_with_blank_new_name_is_usage_error() {
    let harness = CommandHarness::new().await;

    let err = harness
        .run(&["phonebook", "rename-department", "Sales", " "])
        .await
        .unwrap_err();

    assert!(matches!(err, CLIError::UsageError { .. }), "{err:?}");
    assert_eq!(harness.department_of("uid=alice,ou=people"), "Sales");
}

#[test_log::test(tokio::test)]
async fn test_rename_without_permission_fails_job() {
    let harness = CommandHarness::new().await;

    let err = harness
        .run(&[
            "phonebook",
            "rename-department",
            "Sales",
            "Marketing",
            "--role",
            "user",
        ])
        .await
        .unwrap_err();

    assert!(matches!(err, CLIError::Failure { .. }), "{err:?}");
    assert!(err.to_string().contains("failed for 2 of 2 employees"), "{err}");
    assert_eq!(harness.department_of("uid=alice,ou=people"), "Sales");
}

#[test_log::test(tokio::test)]
async fn test_block_then_delete_department() {
    let harness = CommandHarness::new().await;
    let sales = harness.department_id("Sales").await.to_string();

    let err = harness
        .run(&["phonebook", "delete-department", sales.as_str()])
        .await
        .unwrap_err();
    assert!(matches!(err, CLIError::Failure { .. }), "{err:?}");

    harness
        .run(&["phonebook", "block-department", sales.as_str()])
        .await
        .unwrap();
    harness
        .run(&["phonebook", "delete-department", sales.as_str()])
        .await
        .unwrap();

    let err = harness
        .run(&["phonebook", "show-department", sales.as_str()])
        .await
        .unwrap_err();
    assert!(matches!(err, CLIError::Failure { .. }), "{err:?}");
}

#[test_log::test(tokio::test)]
async fn test_list_and_show_departments() {
    let harness = CommandHarness::new().await;
    let sales = harness.department_id("Sales").await.to_string();

    harness
        .run(&["phonebook", "list-departments", "--limit", "1"])
        .await
        .unwrap();
    harness
        .run(&["phonebook", "show-department", sales.as_str()])
        .await
        .unwrap();
}

#[test]
fn test_cli_rejects_unknown_role() {
    let res = Cli::try_parse_from([
        "phonebook",
        "rename-department",
        "Sales",
        "Marketing",
        "--role",
        "janitor",
    ]);

    assert!(res.is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct CommandHarness {
    catalog: Catalog,
    employee_directory: Arc<InMemoryEmployeeDirectory>,
}

impl CommandHarness {
    async fn new() -> Self {
        let config = CLIConfig::from_yaml(indoc::indoc!(
            r#"
            seed:
              departments:
                - value: Sales
                  extensionName: Sales & Marketing
                - value: Support
              employees:
                - dn: uid=alice,ou=people
                  name: Alice
                  department: Sales
                - dn: uid=bob,ou=people
                  name: Bob
                  department: Sales
                - dn: uid=carol,ou=people
                  name: Carol
                  department: Support
            "#
        ))
        .unwrap();

        let catalog = phonebook_cli::configure_catalog(&config).build();
        phonebook_cli::seed_stores(&catalog, config.seed.as_ref().unwrap())
            .await
            .unwrap();

        Self {
            employee_directory: catalog.get_one().unwrap(),
            catalog,
        }
    }

    async fn run(&self, args: &[&str]) -> Result<(), CLIError> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut command = get_command(&self.catalog, cli.command)?;
        command.run().await
    }

    fn department_of(&self, dn: &str) -> String {
        self.employee_directory
            .local_employee(&EmployeeDn::new(dn))
            .unwrap()
            .department
    }

    async fn department_id(&self, value: &str) -> DepartmentID {
        let department_service = self.catalog.get_one::<dyn DepartmentService>().unwrap();
        for id in 1..=100 {
            if let Ok(department) = department_service
                .get_department(DepartmentID::new(id))
                .await
                && department.value == value
            {
                return department.id;
            }
        }
        panic!("Department '{value}' not found");
    }
}
