// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Bit mask of application roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRole(u32);

impl UserRole {
    pub const USER: Self = Self(1);
    pub const SECRETARY: Self = Self(1 << 1);
    pub const HUMAN_RESOURCES: Self = Self(1 << 2);
    pub const ADMIN: Self = Self(1 << 3);

    const DEPARTMENT_WRITERS: Self =
        Self(Self::SECRETARY.0 | Self::HUMAN_RESOURCES.0 | Self::ADMIN.0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the role may change the department attribute of an employee
    pub const fn can_change_department(self) -> bool {
        self.intersects(Self::DEPARTMENT_WRITERS)
    }
}

impl std::ops::BitOr for UserRole {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(UserRole, &str); 4] = [
            (UserRole::USER, "user"),
            (UserRole::SECRETARY, "secretary"),
            (UserRole::HUMAN_RESOURCES, "hr"),
            (UserRole::ADMIN, "admin"),
        ];

        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(role, _)| self.contains(*role))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = UnknownUserRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Self::USER),
            "secretary" => Ok(Self::SECRETARY),
            "hr" | "human_resources" => Ok(Self::HUMAN_RESOURCES),
            "admin" => Ok(Self::ADMIN),
            other => other
                .parse::<u32>()
                .map(Self::from_bits)
                .map_err(|_| UnknownUserRoleError {
                    role: s.to_string(),
                }),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown user role '{role}'")]
pub struct UnknownUserRoleError {
    pub role: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
