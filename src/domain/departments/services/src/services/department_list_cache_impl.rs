// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::*;
use internal_error::{InternalError, ResultIntoInternal};
use phonebook_departments::*;
use sha3::{Digest, Sha3_256};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Caches department listings in the shared [`CacheStore`], one entry per
/// limit, and clears the whole partition on any department mutation
pub struct DepartmentListCacheImpl {
    department_repo: Arc<dyn DepartmentRepository>,
    cache_store: Arc<dyn CacheStore>,
    config: Arc<DepartmentsConfig>,
}

#[component(pub)]
#[interface(dyn DepartmentListCache)]
#[interface(dyn DepartmentLifecycleHook)]
impl DepartmentListCacheImpl {
    pub fn new(
        department_repo: Arc<dyn DepartmentRepository>,
        cache_store: Arc<dyn CacheStore>,
        config: Arc<DepartmentsConfig>,
    ) -> Self {
        Self {
            department_repo,
            cache_store,
            config,
        }
    }

    pub fn cache_key(limit: usize) -> String {
        let digest = Sha3_256::digest(limit.to_string().as_bytes());
        format!("list_departments_{}", hex::encode(digest))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DepartmentListCache for DepartmentListCacheImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(?limit))]
    async fn get_list_departments_with_extension(
        &self,
        limit: Option<usize>,
    ) -> Result<DepartmentListing, InternalError> {
        let limit = limit.unwrap_or(self.config.default_list_limit);
        let key = Self::cache_key(limit);
        let partition = &self.config.list_cache_partition;

        if let Some(cached) = self.cache_store.read(&key, partition).await? {
            match serde_json::from_value::<DepartmentListing>(cached) {
                Ok(listing) => {
                    tracing::debug!(%key, "Department listing cache hit");
                    return Ok(listing);
                }
                Err(e) => {
                    tracing::warn!(%key, error = %e, "Discarding malformed cached listing");
                }
            }
        }

        tracing::debug!(%key, "Department listing cache miss");

        // Taken before the snapshot, so a mutation that lands while we compute
        // keeps our listing out of the cache
        let generation = self.cache_store.generation(partition).await?;

        let departments = self.department_repo.list_departments().await?;
        let listing = DepartmentListing::build(departments, limit);

        let stored = self
            .cache_store
            .write_if_generation(
                &key,
                serde_json::to_value(&listing).int_err()?,
                partition,
                generation,
            )
            .await?;
        if !stored {
            tracing::debug!(%key, "Listing invalidated while computing, not caching it");
        }

        Ok(listing)
    }

    async fn invalidate(&self) -> Result<(), InternalError> {
        tracing::debug!(
            partition = %self.config.list_cache_partition,
            "Invalidating department listings"
        );
        self.cache_store
            .clear(&self.config.list_cache_partition)
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DepartmentLifecycleHook for DepartmentListCacheImpl {
    async fn on_department_persisted(
        &self,
        _department: &Department,
        _created: bool,
    ) -> Result<(), InternalError> {
        self.invalidate().await
    }

    async fn on_department_deleted(&self, _department: &Department) -> Result<(), InternalError> {
        self.invalidate().await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
