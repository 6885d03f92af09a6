//! Step Card Component
//!
//! One numbered step: ordinal badge, title, the instruction list in order,
//! and its screenshot panel.

use dioxus::prelude::*;
use usdt_guide_core::StepContent;

use super::icons::{icon, Icon};
use super::screenshot::Screenshot;
use crate::theme::colors;

#[derive(Clone, PartialEq, Props)]
pub struct StepCardProps {
    pub step: StepContent,
}

#[component]
pub fn StepCard(props: StepCardProps) -> Element {
    let step = &props.step;
    let badge = colors::GOLD;

    rsx! {
        article { class: "step-card", "data-step": "{step.number}",
            div { class: "step-body",
                div { class: "step-heading",
                    span {
                        class: "step-number",
                        style: "background-color: {badge};",
                        "{step.number}"
                    }
                    h3 { "{step.title}" }
                }
                ul { class: "step-items",
                    for (i, item) in step.items.iter().enumerate() {
                        li { key: "{i}",
                            {icon(Icon::ChevronRight, "icon-sm")}
                            span { "{item}" }
                        }
                    }
                }
            }
            if let Some(image) = &step.image {
                Screenshot { image: image.clone() }
            }
        }
    }
}
