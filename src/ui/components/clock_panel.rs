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

//! Clock panel component
//!
//! Header banner with the company title and a live time/date readout
//! aligned to the right. The readout is driven by a [`Ticker`] on the GTK
//! main loop.

use gtk4::{prelude::*, Align, Box as GtkBox, Image, Label, Orientation};

use crate::core::{Mountable, SystemClock, Ticker};
use crate::ui::timer::GlibScheduler;

/// Title shown at the top of the landing page
pub const TITLE: &str = "Albatross Communication Services";

/// Header banner with the live clock
pub struct ClockPanel {
    /// Root widget
    widget: GtkBox,
    /// Refreshes the time and date labels once per second
    ticker: Ticker<GlibScheduler, SystemClock>,
}

impl Default for ClockPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPanel {
    pub fn new() -> Self {
        let widget = GtkBox::new(Orientation::Vertical, 12);
        widget.add_css_class("clock-panel");

        let title = Label::builder()
            .label(TITLE)
            .wrap(true)
            .justify(gtk4::Justification::Center)
            .build();
        title.add_css_class("landing-title");
        widget.append(&title);

        let separator = Label::new(Some("||"));
        separator.add_css_class("landing-subtitle");
        widget.append(&separator);

        let time_label = Label::new(None);
        time_label.add_css_class("clock-time");
        let date_label = Label::new(None);
        date_label.add_css_class("clock-date");

        let readout = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(32)
            .halign(Align::End)
            .build();
        readout.append(&Self::labelled("alarm-symbolic", &time_label));
        readout.append(&Self::labelled("x-office-calendar-symbolic", &date_label));
        widget.append(&readout);

        let ticker = Ticker::new(GlibScheduler, SystemClock, move |state| {
            time_label.set_label(&state.time_text);
            date_label.set_label(&state.date_text);
        });

        Self { widget, ticker }
    }

    /// Icon + label pair
    fn labelled(icon_name: &str, label: &Label) -> GtkBox {
        let row = GtkBox::new(Orientation::Horizontal, 8);
        let icon = Image::from_icon_name(icon_name);
        icon.add_css_class("clock-icon");
        row.append(&icon);
        row.append(label);
        row
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}

impl Mountable for ClockPanel {
    /// Starts the live readout
    fn mount(&self) {
        self.ticker.mount();
    }

    /// Stops the live readout
    fn unmount(&self) {
        self.ticker.unmount();
    }
}
