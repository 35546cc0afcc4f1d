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

//! Layout builder
//!
//! Creates the main application layout structure.

use gtk4::{Stack, StackTransitionType};

use crate::core::View;
use crate::ui::{
    components::{LandingPage, ToolPage},
    Controller,
};

/// Builds the main application layout
///
/// Creates a Stack with one page per host view:
/// - `landing`: clock banner and tool grid
/// - `viewer`, `shuffle`, `manual`, `merge`: tool pages
///
/// Page names are the views' wire identifiers.
///
/// # Returns
///
/// Tuple of (stack, landing_page, tool_pages)
pub fn build_main_layout(
    controller: &Controller,
    animations: bool,
) -> (Stack, LandingPage, Vec<ToolPage>) {
    let stack = Stack::builder()
        .transition_type(if animations {
            StackTransitionType::Crossfade
        } else {
            StackTransitionType::None
        })
        .transition_duration(300)
        .build();

    let landing_page = LandingPage::new(controller.tools(), animations);
    stack.add_named(landing_page.widget(), Some(View::Landing.as_str()));

    let tool_pages: Vec<ToolPage> = View::ALL
        .into_iter()
        .filter_map(|view| {
            controller
                .tool_for_view(view)
                .map(|tool| ToolPage::new(view, tool))
        })
        .collect();

    for page in &tool_pages {
        stack.add_named(page.widget(), Some(page.view().as_str()));
    }

    stack.set_visible_child_name(controller.current_view().as_str());

    (stack, landing_page, tool_pages)
}
