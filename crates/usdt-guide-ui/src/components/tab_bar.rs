//! Tab Bar Component
//!
//! The three section buttons under the hero title.

use dioxus::prelude::*;
use usdt_guide_core::ActiveSection;

use super::icons::{icon, Icon};

/// Icon shown next to each section's tab label and header
pub fn section_icon(section: ActiveSection) -> Icon {
    match section {
        ActiveSection::Desktop => Icon::Monitor,
        ActiveSection::Mobile => Icon::Smartphone,
        ActiveSection::Notes => Icon::ShieldCheck,
    }
}

/// Properties for the TabBar component
#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    /// Labels in tab order (desktop, mobile, notes)
    pub labels: [String; 3],
    /// Currently selected section
    pub active: ActiveSection,
    /// Called with the clicked section
    pub on_select: EventHandler<ActiveSection>,
}

/// Row of section tabs. The active tab is filled gold.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            class: "tab-bar",
            role: "tablist",
            for (section, label) in ActiveSection::ALL.into_iter().zip(props.labels.iter()) {
                {
                    let is_active = section == props.active;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{section}",
                            class: if is_active { "tab active" } else { "tab" },
                            role: "tab",
                            "data-tab": "{section}",
                            "aria-selected": if is_active { "true" } else { "false" },
                            onclick: move |_| on_select.call(section),
                            {icon(section_icon(section), "icon-sm")}
                            " {label}"
                        }
                    }
                }
            }
        }
    }
}
