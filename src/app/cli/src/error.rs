// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::error::Error as StdError;
use std::fmt::Write as _;

use dill::InjectionError;
use internal_error::InternalError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

type BoxedError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum CLIError {
    /// Invalid invocation, corrected by changing arguments or configuration
    #[error("{source}")]
    UsageError { source: BoxedError },

    /// Expected failure of an operation, e.g. an entity not found
    #[error("{source}")]
    Failure { source: BoxedError },

    /// Unexpected failure that most likely indicates a bug or a broken
    /// environment
    #[error("{source}")]
    CriticalFailure { source: BoxedError },
}

impl CLIError {
    pub fn usage_error(msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        Self::UsageError { source: msg.into() }
    }

    pub fn usage_error_from(e: impl StdError + Send + Sync + 'static) -> Self {
        Self::UsageError {
            source: Box::new(e),
        }
    }

    pub fn failure(e: impl StdError + Send + Sync + 'static) -> Self {
        Self::Failure {
            source: Box::new(e),
        }
    }

    pub fn critical(e: impl StdError + Send + Sync + 'static) -> Self {
        Self::CriticalFailure {
            source: Box::new(e),
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::CriticalFailure { .. })
    }

    /// Renders the error for a terminal, optionally with the chain of causes
    pub fn pretty(&self, with_causes: bool) -> String {
        let (title, source) = match self {
            Self::UsageError { source } => ("Usage error", source),
            Self::Failure { source } => ("Error", source),
            Self::CriticalFailure { source } => ("Critical error", source),
        };

        let mut buf = format!("{}: {source}", console::style(title).red().bold());

        if with_causes {
            let mut cause = source.source();
            while let Some(e) = cause {
                let _ = write!(buf, "\n  Caused by: {e}");
                cause = e.source();
            }
        }

        buf
    }
}

impl From<InternalError> for CLIError {
    fn from(e: InternalError) -> Self {
        Self::critical(e)
    }
}

impl From<InjectionError> for CLIError {
    fn from(e: InjectionError) -> Self {
        Self::critical(e)
    }
}
