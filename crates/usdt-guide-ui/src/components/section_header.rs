//! Section header: gold icon tile followed by the section title.

use dioxus::prelude::*;

use super::icons::{icon, Icon};

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    pub title: String,
    pub icon: Icon,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            div { class: "section-header-icon",
                {icon(props.icon, "icon")}
            }
            h2 { class: "gold-gradient", "{props.title}" }
        }
    }
}
