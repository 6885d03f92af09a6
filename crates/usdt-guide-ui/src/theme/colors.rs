//! Accent colors applied inline by components.
//!
//! The rest of the palette lives as CSS custom properties in the global
//! styles.

/// Step ordinals, section accents, pending payment steps
pub const GOLD: &str = "#D4AF37";

/// The closing "transfer complete" payment step
pub const USDT_GREEN: &str = "#26A17B";
