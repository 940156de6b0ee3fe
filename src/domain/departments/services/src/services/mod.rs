// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod department_extension_hook;
mod department_list_cache_impl;
mod department_service_impl;

pub use department_extension_hook::*;
pub use department_list_cache_impl::*;
pub use department_service_impl::*;
