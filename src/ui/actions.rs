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

//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, home,
//! open-dashboard) and their setup functions

use gtk4::{gio, prelude::*, Application};
use std::rc::Rc;

use crate::core::{Dispatcher, ToolId, View};
use crate::ui::{opener::GioOpener, Controller};

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}

/// Sets up the home action
///
/// Returns the host to the landing page. The action is disabled while the
/// landing page is already shown.
pub fn setup_home_action(app: &Application, controller: Rc<Controller>) {
    let home_action = gio::SimpleAction::new("home", None);
    home_action.set_enabled(controller.current_view() != View::Landing);

    let controller_for_home = controller.clone();
    home_action.connect_activate(move |_, _| {
        controller_for_home.go_home();
    });

    let action_for_views = home_action.clone();
    controller.connect_view_changed(move |view| {
        action_for_views.set_enabled(view != View::Landing);
    });

    app.add_action(&home_action);
    app.set_accels_for_action("app.home", &["<Alt>Home"]);
}

/// Sets up the open-dashboard action
///
/// Activates the external dashboard tool through the dispatcher, exactly
/// as clicking its card does.
pub fn setup_open_dashboard_action(app: &Application, dispatcher: Rc<Dispatcher<GioOpener>>) {
    let dashboard_action = gio::SimpleAction::new("open-dashboard", None);

    dashboard_action.connect_activate(move |_, _| {
        dispatcher.activate(ToolId::GoogleSheets);
    });

    app.add_action(&dashboard_action);
}
