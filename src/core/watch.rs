// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/watch.rs
//!
//! Clock watch with an optional update limit
//!
//! Drives a [`Ticker`] and stops it once `limit` states have been
//! published. The first state is published by `start()` itself, so a limit
//! of 1 is reached before the scheduler ever fires; a limit of N needs
//! N - 1 further ticks. The event loop is owned by the caller: it learns
//! about completion through `on_finish` or [`ClockWatch::is_finished`].

use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use crate::core::{
    clock::{ClockState, TimeSource},
    ticker::{Scheduler, Ticker},
};

/// A running clock watch
///
/// Dropping the watch drops its ticker, which cancels the schedule.
pub struct ClockWatch<S: Scheduler, T: TimeSource + 'static> {
    ticker: Rc<Ticker<S, T>>,
    published: Rc<Cell<u32>>,
    finished: Rc<Cell<bool>>,
}

/// Starts watching the clock
///
/// # Arguments
///
/// * `scheduler` - Timer facility for the repeating refresh
/// * `time_source` - Wall-clock reading
/// * `limit` - Stop after this many published states (None = until stopped)
/// * `on_tick` - Called with every published state
/// * `on_finish` - Called once when the limit is reached
pub fn watch<S, T>(
    scheduler: S,
    time_source: T,
    limit: Option<u32>,
    on_tick: impl Fn(&ClockState) + 'static,
    on_finish: impl Fn() + 'static,
) -> ClockWatch<S, T>
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    T: TimeSource + 'static,
{
    let published = Rc::new(Cell::new(0u32));
    let finished = Rc::new(Cell::new(false));

    let published_for_ticks = published.clone();
    let finished_for_ticks = finished.clone();
    let ticker = Rc::new_cyclic(|weak: &Weak<Ticker<S, T>>| {
        let weak = weak.clone();
        Ticker::new(scheduler, time_source, move |state| {
            let count = published_for_ticks.get() + 1;
            published_for_ticks.set(count);
            on_tick(state);

            if limit.is_some_and(|limit| count >= limit) && !finished_for_ticks.get() {
                finished_for_ticks.set(true);
                if let Some(ticker) = weak.upgrade() {
                    ticker.stop();
                }
                on_finish();
            }
        })
    });

    ticker.start();

    // The first publish happens before start() stores the schedule handle
    if finished.get() {
        ticker.stop();
    }

    ClockWatch {
        ticker,
        published,
        finished,
    }
}

impl<S: Scheduler, T: TimeSource + 'static> ClockWatch<S, T> {
    /// Number of states published so far
    pub fn published(&self) -> u32 {
        self.published.get()
    }

    /// True once the limit has been reached
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Stops watching early
    pub fn stop(&self) {
        self.ticker.stop();
    }
}
