// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;
use std::time::Duration;

use duration_string::DurationString;
use merge::Merge;
use phonebook_departments::DepartmentsConfig;
use phonebook_task_system::JobAgentConfig;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CLIConfig {
    /// Departments subsystem settings
    #[merge(strategy = merge_recursive)]
    pub departments: Option<DepartmentsSettings>,

    /// Background job processing settings
    #[merge(strategy = merge_recursive)]
    pub jobs: Option<JobsSettings>,

    /// Records loaded into the in-memory stores on startup
    pub seed: Option<SeedConfig>,
}

impl CLIConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every option explicitly set to its default value
    pub fn sample() -> Self {
        Self {
            departments: Some(DepartmentsSettings::sample()),
            jobs: Some(JobsSettings::sample()),
            seed: None,
        }
    }

    /// Reads the YAML file and fills the options it omits with defaults
    pub fn load(path: &Path) -> Result<Self, CLIError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CLIError::usage_error(format!(
                "Unable to read config file {}: {e}",
                path.display()
            ))
        })?;

        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CLIError> {
        let mut config: Self = serde_yaml::from_str(contents).map_err(CLIError::usage_error_from)?;
        config.merge(Self::sample());
        Ok(config)
    }

    pub fn departments_config(&self) -> DepartmentsConfig {
        self.departments.clone().unwrap_or_default().into()
    }

    pub fn job_agent_config(&self) -> JobAgentConfig {
        self.jobs.clone().unwrap_or_default().into()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Departments
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DepartmentsSettings {
    /// Maximum length of a department value
    pub value_max_length: Option<usize>,
    /// Number of entries in a listing when no limit is requested
    pub default_list_limit: Option<usize>,
    /// Whether newly created departments must be blocked before deletion
    pub block_guard: Option<bool>,
    pub list_cache_partition: Option<String>,
    pub rename_task_group: Option<String>,
    pub rename_time_limit: Option<DurationString>,
}

impl DepartmentsSettings {
    pub fn sample() -> Self {
        let defaults = DepartmentsConfig::default();
        Self {
            value_max_length: Some(defaults.value_max_length),
            default_list_limit: Some(defaults.default_list_limit),
            block_guard: Some(defaults.block_guard),
            list_cache_partition: Some(defaults.list_cache_partition),
            rename_task_group: Some(defaults.rename_task_group),
            rename_time_limit: Some(DurationString::from(defaults.rename_time_limit)),
        }
    }
}

impl From<DepartmentsSettings> for DepartmentsConfig {
    fn from(value: DepartmentsSettings) -> Self {
        let defaults = DepartmentsConfig::default();
        Self {
            value_max_length: value.value_max_length.unwrap_or(defaults.value_max_length),
            default_list_limit: value
                .default_list_limit
                .unwrap_or(defaults.default_list_limit),
            block_guard: value.block_guard.unwrap_or(defaults.block_guard),
            list_cache_partition: value
                .list_cache_partition
                .unwrap_or(defaults.list_cache_partition),
            rename_task_group: value
                .rename_task_group
                .unwrap_or(defaults.rename_task_group),
            rename_time_limit: value
                .rename_time_limit
                .map_or(defaults.rename_time_limit, Duration::from),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Jobs
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct JobsSettings {
    /// Pause between polls of an empty queue
    pub job_checking_interval: Option<DurationString>,
    /// Time budget of jobs whose runner declares none
    pub default_time_limit: Option<DurationString>,
}

impl JobsSettings {
    pub fn sample() -> Self {
        let defaults = JobAgentConfig::default();
        Self {
            job_checking_interval: Some(DurationString::from(defaults.job_checking_interval)),
            default_time_limit: Some(DurationString::from(defaults.default_time_limit)),
        }
    }
}

impl From<JobsSettings> for JobAgentConfig {
    fn from(value: JobsSettings) -> Self {
        let defaults = JobAgentConfig::default();
        Self::new(
            value
                .job_checking_interval
                .map_or(defaults.job_checking_interval, Duration::from),
            value
                .default_time_limit
                .map_or(defaults.default_time_limit, Duration::from),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Seed
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SeedConfig {
    #[serde(default)]
    pub departments: Vec<SeedDepartment>,
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SeedDepartment {
    pub value: String,
    pub extension_name: Option<String>,
    #[serde(default)]
    pub block: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SeedEmployee {
    /// Distinguished name of the directory entry
    pub dn: String,
    pub name: String,
    pub department: String,
    /// Whether the employee also exists in the directory, not only locally
    #[serde(default = "default_true")]
    pub in_directory: bool,
}

fn default_true() -> bool {
    true
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn merge_recursive<T: Merge>(left: &mut Option<T>, right: Option<T>) {
    if let Some(right) = right {
        match left {
            Some(left) => left.merge(right),
            None => *left = Some(right),
        }
    }
}
