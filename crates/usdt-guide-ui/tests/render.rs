//! Rendering Tests
//!
//! Server-side render the components and check which blocks and strings
//! end up in the markup.

use dioxus::prelude::*;
use usdt_guide_core::{ActiveSection, GuideContent, ImageRef, StepContent, ViewSelector};
use usdt_guide_ui::{
    render_document, render_page, Footer, FooterProps, Screenshot, ScreenshotProps, SectionView,
    SectionViewProps, StepCard, StepCardProps, TabBar, PLACEHOLDER_LABEL,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn content() -> GuideContent {
    GuideContent::builtin().expect("built-in content is valid")
}

fn render<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_section(section: ActiveSection) -> String {
    render(
        SectionView,
        SectionViewProps {
            content: content(),
            section,
        },
    )
}

fn section_marker(section: ActiveSection) -> String {
    format!("data-section=\"{}\"", section.id())
}

/// Exactly one of the three section blocks is present
fn assert_only_section(html: &str, visible: ActiveSection) {
    for section in ActiveSection::ALL {
        let present = html.contains(&section_marker(section));
        assert_eq!(
            present,
            section == visible,
            "section {} presence should be {}",
            section,
            section == visible
        );
    }
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_initial_page_shows_desktop_guide() {
    let html = render_page(&content(), ActiveSection::default());

    assert_only_section(&html, ActiveSection::Desktop);
    assert!(html.contains("PC 端提交介面引導"));
    assert!(!html.contains("手機端提交介面引導"));
    assert!(!html.contains("TRC20"));
}

#[test]
fn test_page_renders_hero_tabs_and_footer() {
    let html = render_page(&content(), ActiveSection::Desktop);

    assert!(html.contains("USDT 線上入金"));
    assert!(html.contains("渠道說明"));
    for label in ["PC 端指引", "手機端指引", "入金詳解"] {
        assert!(html.contains(label), "missing tab label {label}");
    }
    assert!(html.contains("PPL International. All rights reserved."));
    assert!(html.contains("隱私政策"));
}

#[test]
fn test_each_section_renders_alone() {
    for section in ActiveSection::ALL {
        let html = render_page(&content(), section);
        assert_only_section(&html, section);

        let title = content().section_title(section).to_string();
        assert!(html.contains(&title));
    }
}

#[test]
fn test_active_tab_is_marked() {
    let html = render_page(&content(), ActiveSection::Mobile);

    assert!(html.contains("data-tab=\"mobile\""));
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    assert_eq!(html.matches("aria-selected=\"false\"").count(), 2);
    assert!(html.contains("class=\"tab active\""));
}

#[test]
fn test_selection_scenario_ends_on_desktop() {
    let mut selector = ViewSelector::new();
    selector.select(ActiveSection::Mobile);
    assert_only_section(&render_section(selector.active()), ActiveSection::Mobile);

    selector.select(ActiveSection::Notes);
    assert_only_section(&render_section(selector.active()), ActiveSection::Notes);

    selector.select(ActiveSection::Desktop);
    assert_only_section(&render_section(selector.active()), ActiveSection::Desktop);
}

#[test]
fn test_reselecting_renders_identically() {
    let mut selector = ViewSelector::new();
    selector.select(ActiveSection::Notes);
    let first = render_section(selector.active());
    selector.select(ActiveSection::Notes);
    let second = render_section(selector.active());

    assert_eq!(first, second);
}

#[test]
fn test_notes_always_show_restrictions() {
    let histories: [&[ActiveSection]; 3] = [
        &[],
        &[ActiveSection::Mobile, ActiveSection::Desktop],
        &[ActiveSection::Notes, ActiveSection::Mobile, ActiveSection::Notes],
    ];

    for history in histories {
        let mut selector = ViewSelector::new();
        for section in history {
            selector.select(*section);
        }
        selector.select(ActiveSection::Notes);

        let html = render_section(selector.active());
        assert!(html.contains("TRC20"));
        assert!(html.contains("ERC20"));
        assert!(html.contains("※ 不接受 BNB 鏈存入，誤存將導致資金損失。"));
    }
}

#[test]
fn test_notes_render_key_points_and_payment_steps() {
    let html = render_section(ActiveSection::Notes);
    let notes = content().notes;

    for point in &notes.key_points {
        assert!(html.contains(point.as_str()));
    }
    for step in &notes.payment_steps {
        assert!(html.contains(step.title.as_str()));
        assert!(html.contains(step.description.as_str()));
        assert!(html.contains(step.image.caption.as_str()));
    }
    assert_eq!(html.matches("payment-step success").count(), 1);
}

// ============================================================================
// Component Tests
// ============================================================================

#[test]
fn test_step_card_renders_items_in_order() {
    let step = content().desktop.steps[1].clone();
    let html = render(StepCard, StepCardProps { step: step.clone() });

    assert!(html.contains("data-step=\"2\""));
    assert!(html.contains(">2<"));
    assert!(html.contains(step.title.as_str()));

    let positions: Vec<usize> = step
        .items
        .iter()
        .map(|item| html.find(item.as_str()).expect("item rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_step_card_without_image_has_no_screenshot() {
    let step = StepContent {
        number: 1,
        title: "Only text".to_string(),
        items: vec!["first".to_string()],
        image: None,
    };
    let html = render(StepCard, StepCardProps { step });

    assert!(!html.contains("screenshot"));
}

#[test]
fn test_screenshot_placeholder_when_url_absent() {
    let html = render(
        Screenshot,
        ScreenshotProps {
            image: ImageRef {
                caption: "PC 登錄介面截圖 (Page 2)".to_string(),
                url: None,
            },
        },
    );

    assert!(html.contains(PLACEHOLDER_LABEL));
    assert!(html.contains("PC 登錄介面截圖 (Page 2)"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_screenshot_image_when_url_present() {
    let html = render(
        Screenshot,
        ScreenshotProps {
            image: ImageRef {
                caption: "login".to_string(),
                url: Some("https://example.com/login.png".to_string()),
            },
        },
    );

    assert!(html.contains("<img"));
    assert!(html.contains("src=\"https://example.com/login.png\""));
    assert!(!html.contains(PLACEHOLDER_LABEL));
}

#[test]
fn test_footer_prints_given_year() {
    let html = render(
        Footer,
        FooterProps {
            footer: content().footer,
            year: 2031,
        },
    );

    assert!(html.contains("© 2031 PPL International. All rights reserved."));
    assert!(html.contains("PPLI"));
    assert!(html.contains("Official Guide"));
}

#[test]
fn test_tab_bar_renders_three_tabs() {
    #[allow(non_snake_case)]
    fn Harness() -> Element {
        rsx! {
            TabBar {
                labels: [
                    "PC 端指引".to_string(),
                    "手機端指引".to_string(),
                    "入金詳解".to_string(),
                ],
                active: ActiveSection::Notes,
                on_select: move |_| {},
            }
        }
    }

    let mut dom = VirtualDom::new(Harness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("role=\"tab\"").count(), 3);
    assert!(html.contains("data-tab=\"notes\""));
    assert!(html.contains("入金詳解"));
}

#[test]
fn test_document_is_standalone() {
    let html = render_document(&content(), ActiveSection::Notes);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>USDT 線上入金渠道說明</title>"));
    assert!(html.contains("--gold: #D4AF37"));
    assert_only_section(&html, ActiveSection::Notes);
}
