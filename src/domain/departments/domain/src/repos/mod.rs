// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod cache_store;
mod department_repository;
mod employee_directory;

pub use cache_store::*;
pub use department_repository::*;
pub use employee_directory::*;
