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

//! src/core/ticker.rs
//!
//! Live clock/date ticker
//!
//! The ticker publishes a [`ClockState`] as soon as it starts and then once
//! per [`TICK_PERIOD`] until it is stopped. It is generic over:
//! - a [`Scheduler`], which owns the repeating timer (GLib main loop in the
//!   application, a manual scheduler in tests)
//! - a [`TimeSource`], which supplies the wall-clock reading
//!
//! The schedule is tied to the ticker's lifetime: `stop()` cancels it, and
//! dropping a running ticker cancels it too.

use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::core::clock::{ClockState, TimeSource};

/// Refresh period of the clock
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// A facility that runs a callback repeatedly until cancelled
pub trait Scheduler {
    /// Token identifying one scheduled timer
    type Handle;

    /// Runs `tick` every `period`, starting one period from now
    fn schedule_repeating(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Cancels a timer returned by `schedule_repeating`
    fn cancel(&self, handle: Self::Handle);
}

/// Periodic clock/date refresher
///
/// `ClockState` has one writer (the tick callback) and one reader (the
/// `publish` callback handed in by the view).
pub struct Ticker<S: Scheduler, T: TimeSource + 'static> {
    scheduler: S,
    time_source: Rc<T>,
    state: Rc<RefCell<Option<ClockState>>>,
    publish: Rc<dyn Fn(&ClockState)>,
    handle: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, T: TimeSource + 'static> Ticker<S, T> {
    /// Creates a stopped ticker
    ///
    /// # Arguments
    ///
    /// * `scheduler` - Timer facility used for the repeating refresh
    /// * `time_source` - Wall-clock reading
    /// * `publish` - Called with every fresh `ClockState`
    pub fn new(scheduler: S, time_source: T, publish: impl Fn(&ClockState) + 'static) -> Self {
        Self {
            scheduler,
            time_source: Rc::new(time_source),
            state: Rc::new(RefCell::new(None)),
            publish: Rc::new(publish),
            handle: RefCell::new(None),
        }
    }

    /// Publishes the current time immediately, then once per second
    ///
    /// Starting a running ticker does nothing.
    pub fn start(&self) {
        if self.is_running() {
            log::debug!("Ticker already running, ignoring start");
            return;
        }

        let time_source = Rc::clone(&self.time_source);
        let state = Rc::clone(&self.state);
        let publish = Rc::clone(&self.publish);

        // Reads the clock and publishes a fresh state
        let refresh = move || {
            let fresh = ClockState::at(time_source.now());
            publish(&fresh);
            *state.borrow_mut() = Some(fresh);
        };
        refresh();

        let handle = self
            .scheduler
            .schedule_repeating(TICK_PERIOD, Box::new(refresh));
        *self.handle.borrow_mut() = Some(handle);

        log::debug!("Ticker started ({}ms period)", TICK_PERIOD.as_millis());
    }

    /// Cancels the repeating refresh
    ///
    /// Safe to call any number of times; the last published state is kept.
    pub fn stop(&self) {
        let handle = self.handle.borrow_mut().take();

        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
            log::debug!("Ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Most recently published state (None before the first start)
    pub fn state(&self) -> Option<ClockState> {
        self.state.borrow().clone()
    }
}

impl<S: Scheduler, T: TimeSource + 'static> Drop for Ticker<S, T> {
    fn drop(&mut self) {
        self.stop();
    }
}
