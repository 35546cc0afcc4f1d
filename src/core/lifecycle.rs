// Copyright 2025 bakri (tidynest@proton.me)
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

//! src/core/lifecycle.rs
//!
//! Mount/unmount lifecycle for page-owned resources
//!
//! A page registers everything that must only run while it is visible
//! (the clock ticker, card entrance animations) with a [`PageLifecycle`].
//! The GTK layer forwards `map`/`unmap` to `mount()`/`unmount()`; the
//! bookkeeping itself lives here so it can be tested without a display.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::core::{
    clock::TimeSource,
    ticker::{Scheduler, Ticker},
};

/// Something that starts when its page is shown and stops when it is hidden
pub trait Mountable {
    fn mount(&self);
    fn unmount(&self);
}

impl<S: Scheduler, T: TimeSource + 'static> Mountable for Ticker<S, T> {
    fn mount(&self) {
        self.start();
    }

    fn unmount(&self) {
        self.stop();
    }
}

/// Mount guard for one page
///
/// Repeated `mount()` or `unmount()` calls are ignored, so parts see a
/// strict mount, unmount, mount... sequence even if the toolkit reports
/// the same transition twice.
#[derive(Default)]
pub struct PageLifecycle {
    mounted: Cell<bool>,
    parts: RefCell<Vec<Rc<dyn Mountable>>>,
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a part; it is mounted at once if the page already is
    pub fn add(&self, part: Rc<dyn Mountable>) {
        if self.mounted.get() {
            part.mount();
        }
        self.parts.borrow_mut().push(part);
    }

    /// Mounts every part in registration order
    pub fn mount(&self) {
        if self.mounted.replace(true) {
            log::debug!("Page already mounted, ignoring mount");
            return;
        }

        for part in self.snapshot() {
            part.mount();
        }
    }

    /// Unmounts every part in reverse registration order
    pub fn unmount(&self) {
        if !self.mounted.replace(false) {
            return;
        }

        for part in self.snapshot().into_iter().rev() {
            part.unmount();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    // Parts may register more parts while being mounted
    fn snapshot(&self) -> Vec<Rc<dyn Mountable>> {
        self.parts.borrow().clone()
    }
}
