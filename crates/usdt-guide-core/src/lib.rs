//! USDT Deposit Guide Core Library
//!
//! Section selection and the static content of the tabbed deposit guide.
//!
//! ## Overview
//!
//! The guide has three mutually exclusive sections: the PC walkthrough, the
//! mobile walkthrough, and the deposit notes. [`ViewSelector`] holds which one
//! is shown; [`GuideContent`] holds every string on the page.
//!
//! ```ignore
//! use usdt_guide_core::{ActiveSection, GuideContent, ViewSelector};
//!
//! let content = GuideContent::builtin()?;
//! let mut selector = ViewSelector::new();
//! selector.select(ActiveSection::Notes);
//! println!("{}", content.section_title(selector.active()));
//! ```

pub mod content;
pub mod error;
pub mod section;
pub mod selector;

// Re-exports
pub use content::{
    FooterContent, GuideContent, HeroContent, ImageRef, NotesContent, PaymentKind, PaymentStep,
    StepContent, StepGuide,
};
pub use error::{GuideError, Result};
pub use section::ActiveSection;
pub use selector::ViewSelector;
