// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Process-wide key-value cache split into independently cleared partitions
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    async fn read(
        &self,
        key: &str,
        partition: &str,
    ) -> Result<Option<serde_json::Value>, InternalError>;

    async fn write(
        &self,
        key: &str,
        value: serde_json::Value,
        partition: &str,
    ) -> Result<(), InternalError>;

    /// Counter bumped by every [`CacheStore::clear`] of the partition
    async fn generation(&self, partition: &str) -> Result<u64, InternalError>;

    /// Stores the value only if the partition is still at `generation`.
    /// Returns `false` when a clear happened in between and nothing was
    /// written.
    async fn write_if_generation(
        &self,
        key: &str,
        value: serde_json::Value,
        partition: &str,
        generation: u64,
    ) -> Result<bool, InternalError>;

    /// Drops every entry of the partition
    async fn clear(&self, partition: &str) -> Result<(), InternalError>;
}
