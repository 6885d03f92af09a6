//! Theme for the deposit guide.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
