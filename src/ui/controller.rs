// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! MVC Controller - Mediates between Model (tool registry) and View (GTK4 pages)
//!
//! # Responsibilities
//!
//! - Own the host's current view
//! - Serve as the navigation callback target for the dispatcher
//! - Notify the View when the current view changes
//! - Provide registry data in UI-friendly form
//!
//! # Architecture
//!
//! The Controller doesn't know about GTK4 widgets. Pages subscribe with
//! `connect_view_changed` and switch themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::{registry, ToolDescriptor, View};

type ViewListener = Rc<dyn Fn(View)>;

/// MVC Controller coordinating the registry and the host views
pub struct Controller {
    /// View currently shown by the host
    current_view: Cell<View>,
    /// Callbacks notified on every view change
    listeners: RefCell<Vec<ViewListener>>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(View::Landing)
    }
}

impl Controller {
    /// Creates a new Controller starting on `initial_view`
    ///
    /// # Example
    ///
    /// ```
    /// use albatross_launcher::core::View;
    /// use albatross_launcher::ui::Controller;
    ///
    /// let controller = Controller::new(View::Landing);
    /// assert_eq!(controller.current_view(), View::Landing);
    /// ```
    pub fn new(initial_view: View) -> Self {
        Self {
            current_view: Cell::new(initial_view),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Returns the view the host is showing
    pub fn current_view(&self) -> View {
        self.current_view.get()
    }

    /// Returns all tools in display order
    pub fn tools(&self) -> &'static [ToolDescriptor] {
        registry::tools()
    }

    /// Returns the registry entry behind a tool view
    ///
    /// # Returns
    ///
    /// * `Some(descriptor)` - For every internal tool view
    /// * `None` - For the landing page
    pub fn tool_for_view(&self, view: View) -> Option<&'static ToolDescriptor> {
        view.tool().and_then(registry::find)
    }

    /// Switches the host to `view`
    ///
    /// Listeners are notified once per actual change; navigating to the
    /// view already shown does nothing.
    pub fn navigate(&self, view: View) {
        if self.current_view.get() == view {
            log::debug!("Already showing {}", view);
            return;
        }

        log::info!("View: {} → {}", self.current_view.get(), view);
        self.current_view.set(view);

        // Snapshot so listeners may navigate again without a borrow clash
        let listeners: Vec<ViewListener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(view);
        }
    }

    /// Returns to the landing page
    pub fn go_home(&self) {
        self.navigate(View::Landing);
    }

    /// Registers a callback for view changes
    pub fn connect_view_changed<F>(&self, callback: F)
    where
        F: Fn(View) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(callback));
    }
}
