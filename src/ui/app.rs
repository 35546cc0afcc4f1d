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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller as the host's navigation
//! target and hands it to the Dispatcher.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Creates Dispatcher (GioOpener + Controller::navigate)
//!   ├─ Builds main window (header bar + Stack of pages)
//!   └─ Connects components to Controller
//! ```

use gtk4::{gdk, prelude::*, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::core::{Dispatcher, View};
use crate::ui::{
    actions,
    builders::{build_header_bar, build_main_layout, wire_up_handlers},
    components::TITLE,
    opener::GioOpener,
    Controller,
};

/// Application id registered with GTK/D-Bus
pub const APP_ID: &str = "io.github.tayasarbhat.AlbatrossLauncher";

/// Per-launch settings taken from the command line
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LaunchOptions {
    /// View shown when the window opens
    pub initial_view: View,
    /// Card entrance and page transition animations
    pub animations: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            initial_view: View::Landing,
            animations: true,
        }
    }
}

/// GTK4 Application for the launcher
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
    /// Command-line settings
    options: LaunchOptions,
}

impl App {
    /// Creates a new App
    ///
    /// # Example
    ///
    /// ```no_run
    /// use albatross_launcher::ui::{App, LaunchOptions};
    ///
    /// let app = App::new(LaunchOptions::default());
    /// app.run();
    /// ```
    pub fn new(options: LaunchOptions) -> Self {
        let app = Application::builder().application_id(APP_ID).build();
        let controller = Rc::new(Controller::new(options.initial_view));

        Self {
            app,
            controller,
            options,
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop. The function blocks until the
    /// application exits.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();
        let options = self.options;

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone(), options);
        });

        // Arguments were already parsed by clap
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => log::warn!("No display available, skipping custom CSS"),
        }
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. A second activation
    /// (e.g. launching again while running) just presents the window.
    fn build_ui(app: &Application, controller: Rc<Controller>, options: LaunchOptions) {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title(TITLE)
            .default_width(1100)
            .default_height(820)
            .build();

        window.set_titlebar(Some(&build_header_bar()));

        let controller_for_nav = controller.clone();
        let dispatcher = Rc::new(Dispatcher::new(GioOpener, move |view| {
            controller_for_nav.navigate(view);
        }));

        let (stack, landing_page, tool_pages) = build_main_layout(&controller, options.animations);
        window.set_child(Some(&stack));

        wire_up_handlers(
            &stack,
            controller.clone(),
            dispatcher.clone(),
            &landing_page,
            &tool_pages,
        );

        actions::setup_quit_action(app);
        actions::setup_home_action(app, controller.clone());
        actions::setup_open_dashboard_action(app, dispatcher);

        log::info!("Showing {} ({} tools)", controller.current_view(), controller.tools().len());
        window.present();
    }
}
