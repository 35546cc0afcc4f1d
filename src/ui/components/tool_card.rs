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

//! Tool card component
//!
//! One clickable card per registry entry: icon on a gradient badge, an
//! arrow hint, the tool name and its description. Cards fade in after
//! their entrance delay each time the landing page is shown.

use gtk4::{
    pango::WrapMode::WordChar, prelude::*, Align, Box as GtkBox, Button, Image, Label,
    Orientation, Revealer, RevealerTransitionType,
};
use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::core::{Mountable, ToolDescriptor, ToolId};

const FADE_MS: u32 = 500;

/// A clickable card for one tool
pub struct ToolCard {
    /// Root widget (fades the card in)
    revealer: Revealer,
    /// The clickable card itself
    button: Button,
    /// Registry entry this card shows
    tool: &'static ToolDescriptor,
    /// Whether the entrance waits for the tool's delay and fades
    animate: bool,
    /// Pending entrance timeout, if the card is still waiting to appear
    pending: Rc<RefCell<Option<glib::SourceId>>>,
}

impl ToolCard {
    /// Builds the card for `tool`
    ///
    /// With `animate` unset the card appears at once on every mount.
    pub fn new(tool: &'static ToolDescriptor, animate: bool) -> Self {
        let content = GtkBox::new(Orientation::Vertical, 8);

        // Top row: gradient badge with icon, arrow on the right
        let top_row = GtkBox::new(Orientation::Horizontal, 0);

        let badge = GtkBox::builder().halign(Align::Start).hexpand(true).build();
        badge.add_css_class("tool-icon");
        for class in tool.style_hint.css_classes() {
            badge.add_css_class(&class);
        }
        let icon = Image::from_icon_name(tool.icon.icon_name());
        icon.set_pixel_size(24);
        badge.append(&icon);
        top_row.append(&badge);

        let arrow = Image::from_icon_name("go-next-symbolic");
        arrow.add_css_class("tool-arrow");
        arrow.set_valign(Align::Center);
        top_row.append(&arrow);

        content.append(&top_row);

        let name = Label::builder().label(tool.name).xalign(0.0).build();
        name.add_css_class("tool-name");
        content.append(&name);

        let description = Label::builder()
            .label(tool.description)
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .build();
        description.add_css_class("tool-description");
        content.append(&description);

        let button = Button::builder()
            .child(&content)
            .tooltip_text(tool.description)
            .build();
        button.add_css_class("tool-card");

        let revealer = Revealer::builder()
            .child(&button)
            .transition_type(RevealerTransitionType::Crossfade)
            .transition_duration(FADE_MS)
            .reveal_child(false)
            .build();

        Self {
            revealer,
            button,
            tool,
            animate,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Calls `callback` with this card's tool id on every click
    pub fn connect_activate<F>(&self, callback: F)
    where
        F: Fn(ToolId) + 'static,
    {
        let id = self.tool.id;
        self.button.connect_clicked(move |_| callback(id));
    }

    /// Shows the card, after its entrance delay when animated
    pub fn play_entrance(&self) {
        self.reset();

        let delay = self.tool.activation_delay_ms;
        if !self.animate {
            self.revealer.set_transition_duration(0);
            self.revealer.set_reveal_child(true);
            return;
        }

        self.revealer.set_transition_duration(FADE_MS);
        if delay == 0 {
            self.revealer.set_reveal_child(true);
            return;
        }

        let revealer = self.revealer.clone();
        let pending = self.pending.clone();
        let source = glib::timeout_add_local_once(Duration::from_millis(delay.into()), move || {
            // Source is gone once fired; forget it so reset() won't remove it
            pending.borrow_mut().take();
            revealer.set_reveal_child(true);
        });
        *self.pending.borrow_mut() = Some(source);
    }

    /// Hides the card and cancels a pending entrance
    pub fn reset(&self) {
        if let Some(source) = self.pending.borrow_mut().take() {
            source.remove();
        }
        self.revealer.set_transition_duration(0);
        self.revealer.set_reveal_child(false);
    }

    pub fn tool(&self) -> &'static ToolDescriptor {
        self.tool
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Revealer {
        &self.revealer
    }
}

impl Mountable for ToolCard {
    fn mount(&self) {
        self.play_entrance();
    }

    fn unmount(&self) {
        self.reset();
    }
}
