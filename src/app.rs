use dioxus::prelude::*;
use usdt_guide_core::GuideContent;
use usdt_guide_ui::{Guide, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles and mounts the guide with the content loaded at
/// startup.
#[component]
pub fn App() -> Element {
    let content = use_context::<GuideContent>();

    rsx! {
        style { {GLOBAL_STYLES} }
        Guide { content: content }
    }
}
