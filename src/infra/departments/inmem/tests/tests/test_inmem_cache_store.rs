// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use phonebook_departments::CacheStore;
use phonebook_departments_inmem::InMemoryCacheStore;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_clear_affects_single_partition() {
    let store = InMemoryCacheStore::new();

    store
        .write("a", serde_json::json!(1), "departments")
        .await
        .unwrap();
    store
        .write("b", serde_json::json!(2), "departments")
        .await
        .unwrap();
    store.write("a", serde_json::json!(3), "other").await.unwrap();

    assert_eq!(
        store.read("a", "departments").await.unwrap(),
        Some(serde_json::json!(1))
    );
    assert_eq!(store.len("departments"), 2);

    store.clear("departments").await.unwrap();

    assert_eq!(store.read("a", "departments").await.unwrap(), None);
    assert_eq!(store.len("departments"), 0);
    assert_eq!(
        store.read("a", "other").await.unwrap(),
        Some(serde_json::json!(3))
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_write_rejected_after_clear() {
    let store = InMemoryCacheStore::new();

    let generation = store.generation("departments").await.unwrap();
    assert_eq!(generation, 0);
    assert!(
        store
            .write_if_generation("a", serde_json::json!(1), "departments", generation)
            .await
            .unwrap()
    );

    store.clear("departments").await.unwrap();
    assert_eq!(store.generation("departments").await.unwrap(), 1);
    assert_eq!(store.generation("other").await.unwrap(), 0);

    // Computed against the generation seen before the clear
    assert!(
        !store
            .write_if_generation("b", serde_json::json!(2), "departments", generation)
            .await
            .unwrap()
    );
    assert_eq!(store.len("departments"), 0);

    assert!(
        store
            .write_if_generation("b", serde_json::json!(2), "departments", 1)
            .await
            .unwrap()
    );
    assert_eq!(
        store.read("b", "departments").await.unwrap(),
        Some(serde_json::json!(2))
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
