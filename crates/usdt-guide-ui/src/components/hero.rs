//! Hero header with the page title and the section tabs.

use dioxus::prelude::*;
use usdt_guide_core::{ActiveSection, HeroContent};

use super::icons::{icon, Icon};
use super::tab_bar::TabBar;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    pub hero: HeroContent,
    pub tab_labels: [String; 3],
    pub active: ActiveSection,
    pub on_select: EventHandler<ActiveSection>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let hero = &props.hero;

    rsx! {
        header { class: "hero",
            div { class: "hero-dots" }
            div { class: "hero-inner",
                div { class: "hero-badge",
                    {icon(Icon::ArrowRightLeft, "icon-xl")}
                }
                h1 { class: "hero-title",
                    span { class: "plain", "{hero.badge_title}" }
                    br {}
                    span { class: "gold-gradient", "{hero.highlight_title}" }
                }
                p { class: "hero-subtitle", "{hero.subtitle}" }
                TabBar {
                    labels: props.tab_labels.clone(),
                    active: props.active,
                    on_select: props.on_select,
                }
            }
        }
    }
}
