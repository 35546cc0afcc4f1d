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

//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Tool card activation (through the dispatcher)
//! - View changes (Controller → Stack)
//! - "Back to tools" buttons

use gtk4::Stack;
use std::rc::Rc;

use crate::core::Dispatcher;
use crate::ui::{
    components::{LandingPage, ToolPage},
    opener::GioOpener,
    Controller,
};

/// Wires up all event handlers for the main UI
///
/// Sets up:
/// - Card clicks → Dispatcher::activate
/// - Controller view changes → visible Stack page
/// - Back buttons → Controller::go_home
pub fn wire_up_handlers(
    stack: &Stack,
    controller: Rc<Controller>,
    dispatcher: Rc<Dispatcher<GioOpener>>,
    landing_page: &LandingPage,
    tool_pages: &[ToolPage],
) {
    // ============================================================================
    // Card activation
    // ============================================================================
    landing_page.connect_activate(move |tool| {
        dispatcher.activate(tool);
    });

    // ============================================================================
    // View switching
    // ============================================================================
    let stack_for_views = stack.clone();
    controller.connect_view_changed(move |view| {
        stack_for_views.set_visible_child_name(view.as_str());
    });

    // ============================================================================
    // Back buttons
    // ============================================================================
    for page in tool_pages {
        let controller_for_back = controller.clone();
        page.connect_back(move || controller_for_back.go_home());
    }
}
