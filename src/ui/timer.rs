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

//! GLib main-loop timer
//!
//! Runs ticker callbacks on the thread-default GLib main context, which is
//! the GTK main loop in the GUI and a bare `glib::MainLoop` in `clock --watch`.

use std::time::Duration;

use crate::core::Scheduler;

/// Scheduler backed by `glib::timeout_add_local`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlibScheduler;

impl Scheduler for GlibScheduler {
    type Handle = glib::SourceId;

    fn schedule_repeating(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> glib::SourceId {
        glib::timeout_add_local(period, move || {
            tick();
            glib::ControlFlow::Continue
        })
    }

    fn cancel(&self, handle: glib::SourceId) {
        // The source never removes itself, so it is still attached here
        handle.remove();
    }
}
