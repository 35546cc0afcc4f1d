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

//! src/core/mod.rs
//!
//! Core launcher logic
//!
//! This module contains everything the landing page does that is not
//! drawing widgets:
//! - Type definitions for tools, views and destinations
//! - The static tool registry
//! - Clock reading and formatting
//! - The periodic ticker and its scheduler abstraction
//! - A clock watch that stops after a number of updates
//! - Mount/unmount lifecycle for page-owned resources
//! - The activation dispatcher
//!
//! All of it is independent of GTK so it can be unit tested without a
//! display server.

pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod registry;
pub mod ticker;
pub mod types;
pub mod watch;

pub use clock::{ClockState, ManualClock, SystemClock, TimeSource};
pub use dispatcher::{Activation, Dispatcher, ExternalOpener};
pub use error::LauncherError;
pub use lifecycle::{Mountable, PageLifecycle};
pub use ticker::{Scheduler, Ticker, TICK_PERIOD};
pub use types::*;
pub use watch::{watch, ClockWatch};

#[cfg(test)]
mod tests;
