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

//! Header bar builder
//!
//! Creates the application header bar with navigation and menu

use gtk4::{gio::Menu, prelude::WidgetExt, Button, HeaderBar, MenuButton};

/// Builds the application header bar
///
/// Creates a HeaderBar containing:
/// - Home button (app.home action) on the left
/// - Menu button on the right with:
///   - Open Dashboard (app.open-dashboard action)
///   - Quit (app.quit action)
///
/// # Returns
///
/// The configured HeaderBar widget
pub fn build_header_bar() -> HeaderBar {
    let header_bar = HeaderBar::new();

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Open Dashboard"), Some("app.open-dashboard"));
    menu.append(Some("Quit"), Some("app.quit"));

    // Menu button
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    // Home button (left side), insensitive while the landing page is shown
    let home_button = Button::builder()
        .icon_name("go-home-symbolic")
        .action_name("app.home")
        .tooltip_text("Back to tools")
        .build();

    home_button.add_css_class("flat");
    header_bar.pack_start(&home_button);
    header_bar.pack_end(&menu_button);

    header_bar
}
