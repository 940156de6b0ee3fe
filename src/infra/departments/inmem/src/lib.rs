// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

// Re-exports
pub use phonebook_departments as domain;

mod inmem_cache_store;
mod inmem_department_repository;
mod inmem_employee_directory;

pub use inmem_cache_store::*;
pub use inmem_department_repository::*;
pub use inmem_employee_directory::*;
