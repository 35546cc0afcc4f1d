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

//! src/core/registry.rs
//!
//! Static tool registry
//!
//! The landing page shows exactly these five tools, in this order. The
//! table is constant for the lifetime of the process.

use crate::core::types::{Gradient, Icon, ToolDescriptor, ToolId};

/// Every tool on the landing page, in display order
pub static TOOLS: [ToolDescriptor; 5] = [
    ToolDescriptor {
        id: ToolId::GoogleSheets,
        name: "Google Sheets",
        description: "Access the Google Sheets Dashboard",
        icon: Icon::ExternalLink,
        style_hint: Gradient::new("purple", "pink"),
        activation_delay_ms: 0,
    },
    ToolDescriptor {
        id: ToolId::Viewer,
        name: "Table Viewer",
        description: "View, manage, and analyze phone numbers from CSV files with advanced features",
        icon: Icon::Table,
        style_hint: Gradient::new("teal", "cyan"),
        activation_delay_ms: 100,
    },
    ToolDescriptor {
        id: ToolId::Shuffle,
        name: "Manual Shuffle",
        description: "Manually input and process phone numbers with bulk operations and CSV management",
        icon: Icon::Shuffle,
        style_hint: Gradient::new("emerald", "teal"),
        activation_delay_ms: 200,
    },
    ToolDescriptor {
        id: ToolId::Manual,
        name: "Number Shuffler",
        description: "Generate intelligent variations of phone numbers using advanced algorithms",
        icon: Icon::FileText,
        style_hint: Gradient::new("cyan", "amber"),
        activation_delay_ms: 300,
    },
    ToolDescriptor {
        id: ToolId::Merge,
        name: "Merge Files",
        description: "Combine multiple CSV files, remove duplicates, and split into manageable chunks",
        icon: Icon::Layers,
        style_hint: Gradient::new("amber", "emerald"),
        activation_delay_ms: 400,
    },
];

/// Returns the registry in display order
pub fn tools() -> &'static [ToolDescriptor] {
    &TOOLS
}

/// Looks up a tool by identifier
///
/// Every `ToolId` has an entry, so this only returns `None` if the table
/// and the enum drift apart.
pub fn find(id: ToolId) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.id == id)
}
