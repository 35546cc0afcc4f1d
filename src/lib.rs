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

//! Albatross Launcher
//!
//! Landing page and tool launcher for the Albatross Communication Services
//! toolset, with a GTK4 GUI and a headless CLI.
//!
//! # Features
//!
//! - **Live Clock:** Time and date refreshed once per second while the
//!   landing page is shown
//! - **Tool Registry:** Fixed, ordered set of five tools
//! - **Dispatcher:** Routes a tool activation to the host view or to the
//!   external dashboard
//! - **GTK4 Interface:** Card grid, per-tool pages, header bar actions
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, registry, clock, ticker, dispatcher)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Dispatching a tool activation
//!
//! ```
//! use albatross_launcher::core::{
//!     Activation, Dispatcher, ExternalOpener, LauncherError, ToolId, View,
//! };
//!
//! struct NoBrowser;
//!
//! impl ExternalOpener for NoBrowser {
//!     fn open(&self, _url: &str) -> Result<(), LauncherError> {
//!         Ok(())
//!     }
//! }
//!
//! let dispatcher = Dispatcher::new(NoBrowser, |view| println!("show {}", view));
//! assert_eq!(dispatcher.activate(ToolId::Merge), Activation::Navigated(View::Merge));
//! ```
//!
//! ## Formatting the clock
//!
//! ```
//! use albatross_launcher::core::{ClockState, SystemClock, TimeSource};
//!
//! let state = ClockState::at(SystemClock.now());
//! println!("{} | {}", state.time_text, state.date_text);
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use albatross_launcher::ui::{App, LaunchOptions};
//!
//! let app = App::new(LaunchOptions::default());
//! app.run(); // Blocks until window closes
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{ClockState, ToolDescriptor, ToolId, View};
