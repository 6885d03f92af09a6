//! Footer: brand mark, footer links and copyright line.

use dioxus::prelude::*;
use usdt_guide_core::FooterContent;

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    pub footer: FooterContent,
    /// Year printed in the copyright line
    pub year: i32,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let footer = &props.footer;

    rsx! {
        footer { class: "guide-footer",
            div { class: "footer-inner",
                div { class: "footer-brand",
                    div { class: "footer-mark", "{footer.mark}" }
                    div {
                        span { class: "footer-name", "{footer.name}" }
                        span { class: "footer-tagline", "{footer.tagline}" }
                    }
                }
                nav { class: "footer-links",
                    for link in footer.links.iter() {
                        a { key: "{link}", href: "#", "{link}" }
                    }
                }
                p { class: "footer-copyright",
                    "© {props.year} {footer.company}. All rights reserved."
                }
            }
        }
    }
}
