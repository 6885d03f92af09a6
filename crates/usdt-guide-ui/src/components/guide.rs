//! Guide Component
//!
//! Root view of the deposit guide. Owns the view selector; the tab bar
//! writes it and the main area renders the one selected section.

use chrono::Datelike;
use dioxus::prelude::*;
use usdt_guide_core::{ActiveSection, GuideContent, ViewSelector};

use super::footer::Footer;
use super::hero::Hero;
use super::section_view::SectionView;

/// Properties for the Guide component
#[derive(Clone, PartialEq, Props)]
pub struct GuideProps {
    /// Every string shown on the page
    pub content: GuideContent,
    /// Section shown on first render
    #[props(default)]
    pub initial: ActiveSection,
}

/// Full tabbed page: hero with tabs, the active section, footer.
///
/// # Example
///
/// ```rust,ignore
/// let content = GuideContent::builtin()?;
///
/// rsx! {
///     Guide { content: content }
/// }
/// ```
#[component]
pub fn Guide(props: GuideProps) -> Element {
    let initial = props.initial;
    let mut selector = use_signal(move || {
        let mut selector = ViewSelector::new();
        selector.select(initial);
        selector
    });
    let year = use_hook(|| chrono::Local::now().year());

    let active = selector.read().active();
    let content = &props.content;
    let tab_labels = ActiveSection::ALL.map(|section| content.tab_label(section).to_string());

    // Re-selecting the active tab leaves the signal clean
    let on_select = move |section: ActiveSection| {
        if !selector.peek().is_active(section) {
            selector.write().select(section);
        }
    };

    rsx! {
        div { class: "guide",
            Hero {
                hero: content.hero.clone(),
                tab_labels: tab_labels,
                active: active,
                on_select: on_select,
            }
            main { class: "guide-main",
                SectionView { content: content.clone(), section: active }
            }
            Footer { footer: content.footer.clone(), year: year }
        }
    }
}
