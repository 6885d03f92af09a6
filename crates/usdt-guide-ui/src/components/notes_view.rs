//! Notes View Component
//!
//! Deposit notes: operating key points, the accepted-network restriction
//! with the BNB-chain warning, and the three final payment steps.

use dioxus::prelude::*;
use usdt_guide_core::{NotesContent, PaymentKind, PaymentStep};

use super::icons::{icon, Icon};
use super::screenshot::Screenshot;
use super::section_header::SectionHeader;
use crate::theme::colors;

fn payment_icon(kind: PaymentKind) -> Icon {
    match kind {
        PaymentKind::Copy => Icon::Copy,
        PaymentKind::Upload => Icon::UploadCloud,
        PaymentKind::Complete => Icon::CheckCircle,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NotesViewProps {
    pub notes: NotesContent,
}

#[component]
pub fn NotesView(props: NotesViewProps) -> Element {
    let notes = &props.notes;

    rsx! {
        div { class: "notes",
            SectionHeader { title: notes.title.clone(), icon: Icon::ShieldCheck }

            div { class: "notes-grid",
                div { class: "notes-panel key-points-panel",
                    h3 {
                        {icon(Icon::Info, "icon")}
                        " {notes.key_points_heading}"
                    }
                    ul { class: "key-points",
                        for (i, point) in notes.key_points.iter().enumerate() {
                            li { key: "{i}",
                                div { class: "key-point-dot" }
                                span { "{point}" }
                            }
                        }
                    }
                }

                div { class: "notes-panel warning",
                    h3 {
                        {icon(Icon::AlertTriangle, "icon")}
                        " {notes.restrictions_heading}"
                    }
                    p { class: "restrictions-lead", "{notes.restrictions_lead}" }
                    div { class: "network-tags",
                        for network in notes.accepted_networks.iter() {
                            span { key: "{network}", class: "network-tag", "{network}" }
                        }
                    }
                    p { class: "network-warning", "{notes.warning}" }
                }
            }

            div { class: "payment-panel",
                h3 { class: "gold-gradient", "{notes.payment_heading}" }
                div { class: "payment-steps",
                    for (i, step) in notes.payment_steps.iter().enumerate() {
                        PaymentStepView { key: "{i}", step: step.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PaymentStepViewProps {
    pub step: PaymentStep,
}

#[component]
pub fn PaymentStepView(props: PaymentStepViewProps) -> Element {
    let step = &props.step;
    let success = step.kind.is_success();
    let accent = if success { colors::USDT_GREEN } else { colors::GOLD };

    rsx! {
        div { class: if success { "payment-step success" } else { "payment-step" },
            div {
                class: "payment-icon",
                style: "border-color: {accent}; color: {accent};",
                {icon(payment_icon(step.kind), "icon-lg")}
            }
            h4 { "{step.title}" }
            p { class: "description", "{step.description}" }
            Screenshot { image: step.image.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_icons_follow_kind() {
        assert_eq!(payment_icon(PaymentKind::Copy), Icon::Copy);
        assert_eq!(payment_icon(PaymentKind::Upload), Icon::UploadCloud);
        assert_eq!(payment_icon(PaymentKind::Complete), Icon::CheckCircle);
    }
}
