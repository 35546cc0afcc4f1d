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

//! Landing page component
//!
//! Composes the clock banner and the grid of tool cards. The page behaves
//! like a mounted view: `map` and `unmap` drive a [`PageLifecycle`] that
//! starts the clock and plays the card entrances, then stops the clock and
//! hides the cards again.
//!
//! Unmap fires whenever the host switches away from the page or the
//! window is destroyed, so the timer never outlives the page.

use gtk4::{prelude::*, Align, Box as GtkBox, Grid, Orientation, ScrolledWindow};
use std::rc::Rc;

use crate::core::{PageLifecycle, ToolDescriptor, ToolId};
use crate::ui::components::{ClockPanel, ToolCard};

/// The launcher's landing page
pub struct LandingPage {
    /// Root widget (scrollable)
    widget: ScrolledWindow,
    /// Starts and stops the clock and card entrances (kept alive with the page)
    _lifecycle: Rc<PageLifecycle>,
    /// One card per tool, in registry order
    cards: Vec<Rc<ToolCard>>,
}

impl LandingPage {
    /// Builds the page for `tools`
    ///
    /// # Arguments
    ///
    /// * `tools` - Registry entries in display order
    /// * `animations` - Whether cards fade in with their entrance delay
    pub fn new(tools: &'static [ToolDescriptor], animations: bool) -> Self {
        let content = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(48)
            .margin_top(32)
            .margin_bottom(32)
            .margin_start(32)
            .margin_end(32)
            .halign(Align::Center)
            .width_request(900)
            .build();

        let clock_panel = Rc::new(ClockPanel::new());
        content.append(clock_panel.widget());

        let grid = Grid::builder()
            .column_spacing(24)
            .row_spacing(24)
            .column_homogeneous(true)
            .build();

        let cards: Vec<Rc<ToolCard>> = tools
            .iter()
            .map(|tool| Rc::new(ToolCard::new(tool, animations)))
            .collect();
        Self::place_cards(&grid, &cards);
        content.append(&grid);

        let widget = ScrolledWindow::builder()
            .child(&content)
            .hscrollbar_policy(gtk4::PolicyType::Never)
            .vexpand(true)
            .build();

        let lifecycle = Rc::new(PageLifecycle::new());
        lifecycle.add(clock_panel);
        for card in &cards {
            lifecycle.add(card.clone());
        }

        let lifecycle_for_map = lifecycle.clone();
        widget.connect_map(move |_| {
            log::debug!("Landing page mounted");
            lifecycle_for_map.mount();
        });

        let lifecycle_for_unmap = lifecycle.clone();
        widget.connect_unmap(move |_| {
            log::debug!("Landing page unmounted");
            lifecycle_for_unmap.unmount();
        });

        Self {
            widget,
            _lifecycle: lifecycle,
            cards,
        }
    }

    /// Two-column grid; the external dashboard card spans both columns
    /// and sits centred on its own row
    fn place_cards(grid: &Grid, cards: &[Rc<ToolCard>]) {
        let mut row = 0;
        let mut column = 0;

        for card in cards {
            if card.tool().id.is_external() {
                if column != 0 {
                    row += 1;
                    column = 0;
                }
                card.widget().set_halign(Align::Center);
                grid.attach(card.widget(), 0, row, 2, 1);
                row += 1;
                continue;
            }

            grid.attach(card.widget(), column, row, 1, 1);
            column += 1;
            if column == 2 {
                column = 0;
                row += 1;
            }
        }
    }

    /// Calls `callback` whenever any card is clicked
    pub fn connect_activate<F>(&self, callback: F)
    where
        F: Fn(ToolId) + 'static,
    {
        let callback = Rc::new(callback);
        for card in self.cards.iter() {
            let callback = callback.clone();
            card.connect_activate(move |id| callback(id));
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
