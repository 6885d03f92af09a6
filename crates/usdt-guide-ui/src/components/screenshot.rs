//! Screenshot Component
//!
//! Shows the referenced image when it has a URL, otherwise a textual
//! placeholder carrying the caption. A URL that fails to load is left to
//! the renderer's broken-image handling.

use dioxus::prelude::*;
use usdt_guide_core::ImageRef;

/// Label above placeholder captions
pub const PLACEHOLDER_LABEL: &str = "Screenshot Reference";

#[derive(Clone, PartialEq, Props)]
pub struct ScreenshotProps {
    pub image: ImageRef,
}

#[component]
pub fn Screenshot(props: ScreenshotProps) -> Element {
    let caption = &props.image.caption;

    rsx! {
        div { class: "screenshot",
            if let Some(url) = &props.image.url {
                img {
                    src: "{url}",
                    alt: "{caption}",
                    loading: "lazy",
                }
            } else {
                div { class: "screenshot-placeholder",
                    p { class: "screenshot-label", "{PLACEHOLDER_LABEL}" }
                    p { class: "screenshot-caption", "{caption}" }
                }
            }
        }
    }
}
