//! Components of the deposit guide page.
//!
//! Each takes its text through props; none of them holds state except
//! [`Guide`], which owns the section selector.

mod footer;
mod guide;
mod hero;
mod icons;
mod notes_view;
mod screenshot;
mod section_header;
mod section_view;
mod step_card;
mod tab_bar;

pub use footer::*;
pub use guide::*;
pub use hero::*;
pub use icons::*;
pub use notes_view::*;
pub use screenshot::*;
pub use section_header::*;
pub use section_view::*;
pub use step_card::*;
pub use tab_bar::*;
