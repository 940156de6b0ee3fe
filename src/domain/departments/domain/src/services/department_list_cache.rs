// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::DepartmentListing;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read-through cache of the active department listing
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait DepartmentListCache: Send + Sync {
    /// Listing of at most `limit` active departments, the configured default
    /// limit applies when `None`
    async fn get_list_departments_with_extension(
        &self,
        limit: Option<usize>,
    ) -> Result<DepartmentListing, InternalError>;

    /// Drops every cached listing
    async fn invalidate(&self) -> Result<(), InternalError>;
}
