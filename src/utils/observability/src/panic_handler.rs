// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, PanicHookInfo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Installs a panic hook that records every panic as an error event, so a
/// crashed job worker shows up in the JSON log file and not only on STDERR.
///
/// With `keep_default_output` the previous hook still runs first.
pub fn trace_panics(keep_default_output: bool) {
    let previous = keep_default_output.then(panic::take_hook);

    panic::set_hook(Box::new(move |info| {
        if let Some(previous) = &previous {
            previous(info);
        }
        record_panic(info);
    }));
}

fn record_panic(info: &PanicHookInfo<'_>) {
    let thread = std::thread::current();
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));

    tracing::error!(
        error_msg = panic_message(info.payload()),
        thread = thread.name().unwrap_or("<unnamed>"),
        location = location.as_deref().unwrap_or("<unknown>"),
        error_backtrace = %Backtrace::force_capture(),
        "Unhandled panic caught"
    );
}

/// Text passed to `panic!`, when the payload carries one
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    match (payload.downcast_ref::<&str>(), payload.downcast_ref::<String>()) {
        (Some(message), _) => *message,
        (None, Some(message)) => message.as_str(),
        (None, None) => "Unknown panic payload",
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
