//! UI Components
//!
//! GTK4 widgets for the launcher.
//!
//! # Components
//!
//! - `landing_page.rs` - Clock banner plus the grid of tool cards
//! - `clock_panel.rs` - Title banner with live time and date
//! - `tool_card.rs` - Clickable card for one tool
//! - `tool_page.rs` - Host page for an internal tool

mod clock_panel;
mod landing_page;
mod tool_card;
mod tool_page;

pub use clock_panel::{ClockPanel, TITLE};
pub use landing_page::LandingPage;
pub use tool_card::ToolCard;
pub use tool_page::ToolPage;
