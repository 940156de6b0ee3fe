// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dill::*;
use internal_error::InternalError;

use crate::domain::CacheStore;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryCacheStore {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    partitions: HashMap<String, HashMap<String, serde_json::Value>>,
    generations: HashMap<String, u64>,
}

impl State {
    fn generation(&self, partition: &str) -> u64 {
        self.generations.get(partition).copied().unwrap_or_default()
    }

    fn insert(&mut self, key: &str, value: serde_json::Value, partition: &str) {
        self.partitions
            .entry(partition.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }
}

#[component(pub)]
#[interface(dyn CacheStore)]
#[scope(Singleton)]
impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// Number of entries currently held in the partition
    pub fn len(&self, partition: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.partitions.get(partition).map_or(0, HashMap::len)
    }
}

#[async_trait::async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn read(
        &self,
        key: &str,
        partition: &str,
    ) -> Result<Option<serde_json::Value>, InternalError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .partitions
            .get(partition)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    async fn write(
        &self,
        key: &str,
        value: serde_json::Value,
        partition: &str,
    ) -> Result<(), InternalError> {
        let mut state = self.state.lock().unwrap();
        state.insert(key, value, partition);
        Ok(())
    }

    async fn generation(&self, partition: &str) -> Result<u64, InternalError> {
        let state = self.state.lock().unwrap();
        Ok(state.generation(partition))
    }

    async fn write_if_generation(
        &self,
        key: &str,
        value: serde_json::Value,
        partition: &str,
        generation: u64,
    ) -> Result<bool, InternalError> {
        let mut state = self.state.lock().unwrap();
        if state.generation(partition) != generation {
            return Ok(false);
        }
        state.insert(key, value, partition);
        Ok(true)
    }

    async fn clear(&self, partition: &str) -> Result<(), InternalError> {
        let mut state = self.state.lock().unwrap();
        state.partitions.remove(partition);
        *state.generations.entry(partition.to_string()).or_default() += 1;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
