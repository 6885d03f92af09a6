//! USDT Deposit Guide UI Components
//!
//! Dioxus components for the tabbed deposit guide, plus static HTML export.
//!
//! ## Design
//!
//! Dark slate page with gold accents:
//! - **Gold (#D4AF37)**: titles, step ordinals, the active tab
//! - **Secondary (#8B949E)**: instruction text
//! - **USDT green (#26A17B)**: the closing "transfer complete" step
//! - **Red**: accepted-network restrictions and the BNB-chain warning

#![allow(non_snake_case)]

pub mod components;
pub mod render;
pub mod theme;

pub use components::*;
pub use render::{render_document, render_page};
pub use theme::GLOBAL_STYLES;
