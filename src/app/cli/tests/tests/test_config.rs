// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::time::Duration;

use indoc::indoc;
use merge::Merge;
use phonebook_cli::config::*;
use phonebook_departments::DepartmentsConfig;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_config_empty_yaml_yields_defaults() {
    let config = CLIConfig::from_yaml("{}").unwrap();

    let departments = config.departments_config();
    let defaults = DepartmentsConfig::default();
    assert_eq!(departments.value_max_length, defaults.value_max_length);
    assert_eq!(departments.default_list_limit, 1000);
    assert!(departments.block_guard);
    assert_eq!(departments.list_cache_partition, "departments_local_info");
    assert_eq!(departments.rename_task_group, "change");
    assert_eq!(departments.rename_time_limit, Duration::from_secs(3600));

    let jobs = config.job_agent_config();
    assert_eq!(jobs.job_checking_interval, Duration::from_secs(1));
    assert_eq!(jobs.default_time_limit, Duration::from_secs(30));

    assert!(config.seed.is_none());
}

#[test]
fn test_config_partial_yaml_keeps_remaining_defaults() {
    let config = CLIConfig::from_yaml(indoc!(
        r#"
        departments:
          blockGuard: false
          renameTimeLimit: 5m
        jobs:
          defaultTimeLimit: 10s
        "#
    ))
    .unwrap();

    let departments = config.departments_config();
    assert!(!departments.block_guard);
    assert_eq!(departments.rename_time_limit, Duration::from_secs(300));
    assert_eq!(departments.value_max_length, 64);
    assert_eq!(departments.rename_task_group, "change");

    let jobs = config.job_agent_config();
    assert_eq!(jobs.default_time_limit, Duration::from_secs(10));
    assert_eq!(jobs.job_checking_interval, Duration::from_secs(1));
}

#[test]
fn test_config_merge_prefers_left_values() {
    let mut user = CLIConfig {
        departments: Some(DepartmentsSettings {
            default_list_limit: Some(10),
            ..Default::default()
        }),
        ..Default::default()
    };

    user.merge(CLIConfig::sample());

    let departments = user.departments.unwrap();
    assert_eq!(departments.default_list_limit, Some(10));
    assert_eq!(departments.value_max_length, Some(64));
    assert_eq!(departments.block_guard, Some(true));
    assert!(user.jobs.is_some());
}

#[test]
fn test_config_seed_section() {
    let config = CLIConfig::from_yaml(indoc!(
        r#"
        seed:
          departments:
            - value: Sales
              extensionName: Sales & Marketing
            - value: Legacy
              block: true
          employees:
            - dn: uid=alice,ou=people
              name: Alice
              department: Sales
            - dn: uid=bob,ou=people
              name: Bob
              department: Sales
              inDirectory: false
        "#
    ))
    .unwrap();

    let seed = config.seed.unwrap();
    assert_eq!(seed.departments.len(), 2);
    assert_eq!(
        seed.departments[0].extension_name.as_deref(),
        Some("Sales & Marketing")
    );
    assert!(!seed.departments[0].block);
    assert!(seed.departments[1].block);

    assert_eq!(seed.employees.len(), 2);
    assert!(seed.employees[0].in_directory);
    assert!(!seed.employees[1].in_directory);
}

#[test]
fn test_config_rejects_unknown_keys() {
    let err = CLIConfig::from_yaml("departments:\n  valueMaxLen: 10\n").unwrap_err();

    assert!(matches!(err, phonebook_cli::CLIError::UsageError { .. }));
}

#[test]
fn test_config_load_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "departments:\n  defaultListLimit: 5\n").unwrap();

    let config = CLIConfig::load(&path).unwrap();

    assert_eq!(config.departments_config().default_list_limit, 5);
}

#[test]
fn test_config_load_missing_file_is_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let err = CLIConfig::load(&temp_dir.path().join("absent.yaml")).unwrap_err();

    assert!(matches!(err, phonebook_cli::CLIError::UsageError { .. }));
}
