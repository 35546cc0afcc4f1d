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

use thiserror::Error;

/// Errors raised at the edges of the launcher (CLI parsing, URL opening).
///
/// The ticker and dispatcher themselves have no error path.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum LauncherError {
    /// Identifier is not one of the registered tools.
    #[error("Unknown tool: '{0}' (expected one of: google-sheets, viewer, shuffle, manual, merge)")]
    UnknownTool(String),
    /// Identifier is not one of the host views.
    #[error("Unknown view: '{0}' (expected one of: landing, shuffle, viewer, manual, merge)")]
    UnknownView(String),
    /// The desktop could not open the URL.
    #[error("Failed to open {url}: {reason}")]
    OpenFailed { url: String, reason: String },
}
