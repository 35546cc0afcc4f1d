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

//! src/core/types.rs
//!
//! Core type definitions for the launcher
//!
//! This module defines the fundamental types used throughout the application:
//! - `ToolId`: The closed set of tool identifiers shown on the landing page
//! - `View`: The host views the navigation callback can switch to
//! - `Destination`: Where activating a tool leads (host view or external URL)
//! - `Icon` / `Gradient`: Presentation hints carried by each tool
//! - `ToolDescriptor`: Complete static metadata for one tool card
//!
//! Identifiers keep their literal wire names (`google-sheets`, `viewer`, ...)
//! because hosts and the CLI switch on them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::error::LauncherError;

/// Fixed address of the external Google Sheets dashboard
pub const DASHBOARD_URL: &str = "https://tayasarbhat.github.io/GSN/";

/// Identifier of a tool on the landing page
///
/// The set is closed: the dispatcher and every host match on it
/// exhaustively, so adding a tool is a compile-time change.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ToolId {
    /// External Google Sheets dashboard (opens in the browser)
    #[serde(rename = "google-sheets")]
    GoogleSheets,
    /// CSV table viewer
    #[serde(rename = "viewer")]
    Viewer,
    /// Manual number shuffle
    #[serde(rename = "shuffle")]
    Shuffle,
    /// Number shuffler (variation generator)
    #[serde(rename = "manual")]
    Manual,
    /// CSV merge/split tool
    #[serde(rename = "merge")]
    Merge,
}

impl ToolId {
    /// All identifiers in registry order
    pub const ALL: [ToolId; 5] = [
        ToolId::GoogleSheets,
        ToolId::Viewer,
        ToolId::Shuffle,
        ToolId::Manual,
        ToolId::Merge,
    ];

    /// Literal wire identifier
    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::GoogleSheets => "google-sheets",
            ToolId::Viewer => "viewer",
            ToolId::Shuffle => "shuffle",
            ToolId::Manual => "manual",
            ToolId::Merge => "merge",
        }
    }

    /// Where activating this tool leads
    pub fn destination(self) -> Destination {
        match self {
            ToolId::GoogleSheets => Destination::External(DASHBOARD_URL),
            ToolId::Viewer => Destination::View(View::Viewer),
            ToolId::Shuffle => Destination::View(View::Shuffle),
            ToolId::Manual => Destination::View(View::Manual),
            ToolId::Merge => Destination::View(View::Merge),
        }
    }

    /// True for the reserved external-link tool
    pub fn is_external(self) -> bool {
        matches!(self.destination(), Destination::External(_))
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| LauncherError::UnknownTool(s.to_string()))
    }
}

/// A view owned by the host application
///
/// `Landing` is the page that shows the tool grid; the others are the
/// internal tools the navigation callback can switch to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Shuffle,
    Viewer,
    Manual,
    Merge,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Landing,
        View::Shuffle,
        View::Viewer,
        View::Manual,
        View::Merge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Shuffle => "shuffle",
            View::Viewer => "viewer",
            View::Manual => "manual",
            View::Merge => "merge",
        }
    }

    /// The tool that leads to this view (None for the landing page)
    pub fn tool(self) -> Option<ToolId> {
        match self {
            View::Landing => None,
            View::Shuffle => Some(ToolId::Shuffle),
            View::Viewer => Some(ToolId::Viewer),
            View::Manual => Some(ToolId::Manual),
            View::Merge => Some(ToolId::Merge),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for View {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s.trim())
            .ok_or_else(|| LauncherError::UnknownView(s.to_string()))
    }
}

/// Result of resolving a tool activation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    /// Open a fixed URL in a new browsing context
    External(&'static str),
    /// Ask the host to switch to a view
    View(View),
}

/// Visual glyph shown on a tool card
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ExternalLink,
    Table,
    Shuffle,
    FileText,
    Layers,
}

impl Icon {
    /// Symbolic icon name from the freedesktop/Adwaita icon theme
    pub fn icon_name(self) -> &'static str {
        match self {
            Icon::ExternalLink => "send-to-symbolic",
            Icon::Table => "x-office-spreadsheet-symbolic",
            Icon::Shuffle => "media-playlist-shuffle-symbolic",
            Icon::FileText => "text-x-generic-symbolic",
            Icon::Layers => "view-dual-symbolic",
        }
    }
}

/// Two-colour gradient used as the card's accent
///
/// Colours are palette names (`purple`, `teal`, ...) which the view turns
/// into CSS classes such as `from-purple` / `to-pink`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// CSS classes for this gradient
    pub fn css_classes(&self) -> [String; 2] {
        [format!("from-{}", self.from), format!("to-{}", self.to)]
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Static metadata for one tool card
///
/// Defined once in the registry and never mutated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ToolDescriptor {
    /// Unique identifier
    pub id: ToolId,
    /// Card title
    pub name: &'static str,
    /// One-sentence summary shown under the title
    pub description: &'static str,
    /// Card glyph
    pub icon: Icon,
    /// Accent gradient
    pub style_hint: Gradient,
    /// Entrance animation delay in milliseconds
    pub activation_delay_ms: u32,
}
