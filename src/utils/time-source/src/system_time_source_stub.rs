// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Manually driven clock. Time stands still until [`Self::set`] or
/// [`Self::advance`] moves it, which also wakes the sleepers that became due.
#[derive(Debug, Clone)]
pub struct SystemTimeSourceStub {
    state: Arc<Mutex<StubState>>,
}

#[derive(Debug)]
struct StubState {
    now: DateTime<Utc>,
    next_sleeper_id: u64,
    // Ordered by wake-up time, ties broken by arrival
    sleepers: BTreeMap<(DateTime<Utc>, u64), oneshot::Sender<()>>,
}

impl SystemTimeSourceStub {
    pub fn new() -> Self {
        Self::new_set(Utc::now())
    }

    pub fn new_set(now: DateTime<Utc>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                now,
                next_sleeper_id: 0,
                sleepers: BTreeMap::new(),
            })),
        }
    }

    /// Moves the clock forward to `now` and returns how many sleepers woke up
    pub fn set(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.state.lock().unwrap();
        assert!(
            now >= state.now,
            "Stub clock cannot go back from {} to {now}",
            state.now
        );
        state.now = now;

        let not_due = state.sleepers.split_off(&(now, u64::MAX));
        let due = std::mem::replace(&mut state.sleepers, not_due);

        // Sleepers dropped in the meantime are not counted
        due.into_values()
            .map(|waker| waker.send(()).is_ok())
            .filter(|&sent| sent)
            .count()
    }

    pub fn advance(&self, duration: Duration) -> usize {
        self.set(self.now() + duration)
    }

    /// Number of callers blocked in [`SystemTimeSource::sleep`]
    pub fn sleepers(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.sleepers.values().filter(|w| !w.is_closed()).count()
    }
}

impl Default for SystemTimeSourceStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceStub {
    fn now(&self) -> DateTime<Utc> {
        self.state.lock().unwrap().now
    }

    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        let woken = {
            let mut state = self.state.lock().unwrap();
            // Sleepers dropped before waking, e.g. losers of a time limit
            state.sleepers.retain(|_, w| !w.is_closed());

            let (tx, rx) = oneshot::channel();
            let wake_up_at = state.now + duration;
            let id = state.next_sleeper_id;
            state.next_sleeper_id += 1;
            state.sleepers.insert((wake_up_at, id), tx);
            rx
        };

        let _ = woken.await;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
