// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashSet};

use crate::{DepartmentExtension, DepartmentExtensionID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Recomputes nested set bounds of all extensions.
///
/// Siblings are ordered by name then id. Extensions referring to a missing
/// parent are treated as roots. Bounds are numbered from 1.
pub fn recover_tree(extensions: &mut [DepartmentExtension]) {
    let known: HashSet<DepartmentExtensionID> = extensions.iter().map(|e| e.id).collect();

    let mut children: BTreeMap<Option<DepartmentExtensionID>, Vec<usize>> = BTreeMap::new();
    for (index, extension) in extensions.iter().enumerate() {
        let parent = extension.parent_id.filter(|p| known.contains(p) && *p != extension.id);
        children.entry(parent).or_default().push(index);
    }
    for siblings in children.values_mut() {
        siblings.sort_by(|a, b| {
            let (a, b) = (&extensions[*a], &extensions[*b]);
            a.name.cmp(&b.name).then(a.id.cmp(&b.id))
        });
    }

    let mut counter = 1;
    let mut visited = HashSet::new();
    let roots = children.get(&None).cloned().unwrap_or_default();
    for root in roots {
        assign_bounds(extensions, &children, root, &mut counter, &mut visited);
    }

    // Members of parent cycles are unreachable from any root
    let unvisited: Vec<usize> = (0..extensions.len())
        .filter(|i| !visited.contains(i))
        .collect();
    for index in unvisited {
        if !visited.contains(&index) {
            extensions[index].parent_id = None;
            assign_bounds(extensions, &children, index, &mut counter, &mut visited);
        }
    }
}

fn assign_bounds(
    extensions: &mut [DepartmentExtension],
    children: &BTreeMap<Option<DepartmentExtensionID>, Vec<usize>>,
    index: usize,
    counter: &mut u64,
    visited: &mut HashSet<usize>,
) {
    if !visited.insert(index) {
        return;
    }

    extensions[index].lft = *counter;
    *counter += 1;

    let id = extensions[index].id;
    if let Some(child_indices) = children.get(&Some(id)) {
        for child in child_indices {
            assign_bounds(extensions, children, *child, counter, visited);
        }
    }

    extensions[index].rght = *counter;
    *counter += 1;
}

/// Re-attaches children of the removed extension to its parent
pub fn reparent_children(extensions: &mut [DepartmentExtension], removed: &DepartmentExtension) {
    for extension in extensions.iter_mut() {
        if extension.parent_id == Some(removed.id) {
            extension.parent_id = removed.parent_id;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
