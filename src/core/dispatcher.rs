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

//! src/core/dispatcher.rs
//!
//! Tool activation dispatcher
//!
//! Turns a click on a tool card into either:
//! - an external open of the dashboard URL, or
//! - one call to the host's navigation callback with the tool's view.
//!
//! The dispatcher holds no state between activations.

use crate::core::{
    error::LauncherError,
    types::{Destination, ToolId, View},
};

/// Opens a URL in a new browsing context
pub trait ExternalOpener {
    fn open(&self, url: &str) -> Result<(), LauncherError>;
}

/// What an activation dispatched to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Activation {
    /// Host navigation callback was invoked with this view
    Navigated(View),
    /// External URL was handed to the opener
    ExternalOpened(&'static str),
}

/// Forwards tool activations to the host or the browser
pub struct Dispatcher<O: ExternalOpener> {
    opener: O,
    navigate: Box<dyn Fn(View)>,
}

impl<O: ExternalOpener> Dispatcher<O> {
    /// Creates a dispatcher
    ///
    /// # Arguments
    ///
    /// * `opener` - Used for the external dashboard tool
    /// * `navigate` - Host callback, invoked synchronously for internal tools
    pub fn new(opener: O, navigate: impl Fn(View) + 'static) -> Self {
        Self {
            opener,
            navigate: Box::new(navigate),
        }
    }

    /// Handles one activation of a tool card
    ///
    /// Failures to open the external URL are logged and otherwise ignored;
    /// the host is never called for the external tool.
    pub fn activate(&self, tool: ToolId) -> Activation {
        match tool.destination() {
            Destination::External(url) => {
                log::info!("Opening external tool {} at {}", tool, url);
                if let Err(e) = self.opener.open(url) {
                    log::warn!("{}", e);
                }
                Activation::ExternalOpened(url)
            }
            Destination::View(view) => {
                log::info!("Navigating to {}", view);
                (self.navigate)(view);
                Activation::Navigated(view)
            }
        }
    }
}
