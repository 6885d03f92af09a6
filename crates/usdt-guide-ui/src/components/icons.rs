//! Inline Lucide icons.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Monitor,
    Smartphone,
    ShieldCheck,
    AlertTriangle,
    Info,
    ChevronRight,
    Copy,
    UploadCloud,
    CheckCircle,
    ArrowRightLeft,
}

/// Render a Lucide icon as an inline SVG that inherits `currentColor`.
pub fn icon(kind: Icon, class: &str) -> Element {
    let paths = match kind {
        Icon::Monitor => rsx! {
            rect { x: "2", y: "3", width: "20", height: "14", rx: "2" }
            line { x1: "8", y1: "21", x2: "16", y2: "21" }
            line { x1: "12", y1: "17", x2: "12", y2: "21" }
        },
        Icon::Smartphone => rsx! {
            rect { x: "5", y: "2", width: "14", height: "20", rx: "2", ry: "2" }
            path { d: "M12 18h.01" }
        },
        Icon::ShieldCheck => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
            path { d: "m9 12 2 2 4-4" }
        },
        Icon::AlertTriangle => rsx! {
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        },
        Icon::Info => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        },
        Icon::ChevronRight => rsx! {
            path { d: "m9 18 6-6-6-6" }
        },
        Icon::Copy => rsx! {
            rect { x: "8", y: "8", width: "14", height: "14", rx: "2", ry: "2" }
            path { d: "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" }
        },
        Icon::UploadCloud => rsx! {
            path { d: "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242" }
            path { d: "M12 12v9" }
            path { d: "m16 16-4-4-4 4" }
        },
        Icon::CheckCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        },
        Icon::ArrowRightLeft => rsx! {
            path { d: "m16 3 4 4-4 4" }
            path { d: "M20 7H4" }
            path { d: "m8 21-4-4 4-4" }
            path { d: "M4 17h16" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {paths}
        }
    }
}
