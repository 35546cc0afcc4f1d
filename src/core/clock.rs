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

//! src/core/clock.rs
//!
//! Wall-clock reading and formatting
//!
//! Formatting follows the en-US conventions the landing page has always
//! shown:
//! - time: `03:04:05 PM` (12-hour clock, two-digit fields, AM/PM suffix)
//! - date: `Saturday, March 15, 2025`

use chrono::{Local, NaiveDateTime, TimeDelta};
use std::cell::Cell;
use std::time::Duration;

const TIME_FORMAT: &str = "%I:%M:%S %p";
const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Formatted time and date for display
///
/// Derived entirely from one clock reading; a fresh value replaces the
/// previous one on every tick.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClockState {
    pub time_text: String,
    pub date_text: String,
}

impl ClockState {
    /// Formats a local date-time reading
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            time_text: format_time(instant),
            date_text: format_date(instant),
        }
    }
}

/// `hh:mm:ss AM/PM`
pub fn format_time(instant: NaiveDateTime) -> String {
    instant.format(TIME_FORMAT).to_string()
}

/// `Weekday, Month D, YYYY`
pub fn format_date(instant: NaiveDateTime) -> String {
    instant.format(DATE_FORMAT).to_string()
}

/// Source of the current local wall-clock time
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to
///
/// Used by `clock --at` to render a fixed instant, and by tests to pair
/// with a manual scheduler.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock forward
    ///
    /// A step past chrono's representable range leaves the clock unchanged.
    pub fn advance(&self, by: Duration) {
        let current = self.now.get();
        let next = i64::try_from(by.as_millis())
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|delta| current.checked_add_signed(delta));

        if let Some(next) = next {
            self.now.set(next);
        }
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::rc::Rc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
