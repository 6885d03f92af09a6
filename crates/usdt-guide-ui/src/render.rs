//! Server-side rendering of the guide to static HTML.

use dioxus::prelude::*;
use usdt_guide_core::{ActiveSection, GuideContent};

use crate::components::{Guide, GuideProps};
use crate::theme::GLOBAL_STYLES;

/// Render the page body with `section` selected.
pub fn render_page(content: &GuideContent, section: ActiveSection) -> String {
    let mut dom = VirtualDom::new_with_props(
        Guide,
        GuideProps {
            content: content.clone(),
            initial: section,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a standalone HTML document with the global styles inlined.
pub fn render_document(content: &GuideContent, section: ActiveSection) -> String {
    let body = render_page(content, section);
    let title = escape_text(&content.page_title());
    tracing::debug!(%section, bytes = body.len(), "Rendered guide");

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"zh-Hant\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{GLOBAL_STYLES}</style>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
