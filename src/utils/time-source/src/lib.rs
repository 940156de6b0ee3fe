// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


mod system_time_source;
mod system_time_source_stub;
mod time_limit;

pub use system_time_source::*;
pub use system_time_source_stub::*;
pub use time_limit::*;
