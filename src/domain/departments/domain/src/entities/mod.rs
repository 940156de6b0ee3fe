// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod department;
mod department_extension;
mod department_id;
mod department_listing;
mod department_tree;
mod employee;
mod rename_department;
mod user_role;

pub use department::*;
pub use department_extension::*;
pub use department_id::*;
pub use department_listing::*;
pub use department_tree::*;
pub use employee::*;
pub use rename_department::*;
pub use user_role::*;
