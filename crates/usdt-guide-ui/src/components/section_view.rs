//! Section View Component
//!
//! Renders the block for exactly one section. Inactive sections produce no
//! markup at all.

use dioxus::prelude::*;
use usdt_guide_core::{ActiveSection, GuideContent, StepGuide};

use super::notes_view::NotesView;
use super::section_header::SectionHeader;
use super::step_card::StepCard;
use super::tab_bar::section_icon;

#[derive(Clone, PartialEq, Props)]
pub struct SectionViewProps {
    pub content: GuideContent,
    pub section: ActiveSection,
}

#[component]
pub fn SectionView(props: SectionViewProps) -> Element {
    let section = props.section;

    let body = match props.content.step_guide(section) {
        Some(guide) => rsx! {
            StepGuideView { guide: guide.clone(), section: section }
        },
        None => rsx! {
            NotesView { notes: props.content.notes.clone() }
        },
    };

    rsx! {
        section {
            class: "section-block",
            "data-section": "{section}",
            {body}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StepGuideViewProps {
    pub guide: StepGuide,
    pub section: ActiveSection,
}

/// Header plus the numbered step cards of a walkthrough
#[component]
pub fn StepGuideView(props: StepGuideViewProps) -> Element {
    rsx! {
        SectionHeader { title: props.guide.title.clone(), icon: section_icon(props.section) }
        for step in props.guide.steps.iter() {
            StepCard { key: "{step.number}", step: step.clone() }
        }
    }
}
