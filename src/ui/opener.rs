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

//! Opens URLs with the desktop's default handler via GIO

use gtk4::gio;

use crate::core::{ExternalOpener, LauncherError};

/// Launches the default browser for a URI
#[derive(Clone, Copy, Debug, Default)]
pub struct GioOpener;

impl ExternalOpener for GioOpener {
    fn open(&self, url: &str) -> Result<(), LauncherError> {
        gio::AppInfo::launch_default_for_uri(url, None::<&gio::AppLaunchContext>).map_err(|e| {
            LauncherError::OpenFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })
    }
}
