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

//! Tool page component
//!
//! The page the host shows after navigating to an internal tool. The tools
//! themselves live in their own applications; this page names the tool and
//! offers the way back to the landing page.

use gtk4::{
    pango::WrapMode::WordChar, prelude::*, Align, Box as GtkBox, Button, Image, Label,
    Orientation,
};

use crate::core::{ToolDescriptor, View};

/// Host page for one internal tool
pub struct ToolPage {
    /// Root widget
    widget: GtkBox,
    /// "Back to tools" button
    back_button: Button,
    /// View this page stands for
    view: View,
}

impl ToolPage {
    /// Builds the page for an internal tool view
    ///
    /// # Arguments
    ///
    /// * `view` - Host view this page is registered under
    /// * `tool` - Registry entry for that view
    pub fn new(view: View, tool: &'static ToolDescriptor) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(16)
            .valign(Align::Center)
            .halign(Align::Center)
            .build();
        widget.add_css_class("tool-page");

        let badge = GtkBox::builder().halign(Align::Center).build();
        badge.add_css_class("tool-icon");
        for class in tool.style_hint.css_classes() {
            badge.add_css_class(&class);
        }
        let icon = Image::from_icon_name(tool.icon.icon_name());
        icon.set_pixel_size(48);
        badge.append(&icon);
        widget.append(&badge);

        let title = Label::new(Some(tool.name));
        title.add_css_class("tool-page-title");
        widget.append(&title);

        let description = Label::builder()
            .label(tool.description)
            .wrap(true)
            .wrap_mode(WordChar)
            .max_width_chars(60)
            .justify(gtk4::Justification::Center)
            .build();
        description.add_css_class("tool-description");
        widget.append(&description);

        let back_button = Button::builder()
            .label("Back to tools")
            .halign(Align::Center)
            .build();
        back_button.add_css_class("pill");
        widget.append(&back_button);

        Self {
            widget,
            back_button,
            view,
        }
    }

    /// Connects a handler for the "Back to tools" button
    pub fn connect_back<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.back_button.connect_clicked(move |_| callback());
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
