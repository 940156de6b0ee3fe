// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const DEFAULT_LOGGING_CONFIG: &str = "info";
const VERBOSE_LOGGING_CONFIG: &str = "debug";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// 0 - default, 1+ - debug output to STDERR
    pub verbosity_level: u8,
    /// When set, logs are written as JSON lines into this file instead of
    /// STDERR
    pub log_file: Option<PathBuf>,
}

/// Keeps the background log writer alive, must be held until exit
#[derive(Default)]
#[must_use]
pub struct Guards {
    pub appender: Option<tracing_appender::non_blocking::WorkerGuard>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn init(config: &LoggingConfig) -> Guards {
    // Logging may be already initialized when running under tests
    if tracing::dispatcher::has_been_set() {
        return Guards::default();
    }

    // Use configuration from RUST_LOG env var if provided
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.verbosity_level == 0 {
            EnvFilter::new(DEFAULT_LOGGING_CONFIG)
        } else {
            EnvFilter::new(VERBOSE_LOGGING_CONFIG)
        }
    });

    let log_path = match &config.log_file {
        Some(log_path) if config.verbosity_level == 0 => log_path,
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_span_events(if config.verbosity_level > 0 {
                    FmtSpan::NEW | FmtSpan::CLOSE
                } else {
                    FmtSpan::NONE
                })
                .with_writer(std::io::stderr)
                .init();

            return Guards::default();
        }
    };

    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let log_file_name = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("phonebook.log"));

    let (appender, appender_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, log_file_name));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_writer(appender)
        .init();

    Guards {
        appender: Some(appender_guard),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
