//! Inline SVG glyphs for [`Icon`] tags.
//!
//! Outline icons on a 24×24 grid, stroked with `currentColor` so they pick up
//! the surrounding text color.

use crate::content::Icon;
use maud::{Markup, html};

/// Render `icon` as an inline SVG with the given CSS class.
pub fn glyph(icon: Icon, class: &str) -> Markup {
    html! {
        svg class=(class) viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round"
            aria-hidden="true" xmlns="http://www.w3.org/2000/svg" {
            (shapes(icon))
        }
    }
}

fn shapes(icon: Icon) -> Markup {
    match icon {
        Icon::Settings => html! {
            circle cx="12" cy="12" r="3" {}
            path d="M12 2v3M12 19v3M4.9 4.9 7 7M17 17l2.1 2.1M2 12h3M19 12h3M4.9 19.1 7 17M17 7l2.1-2.1" {}
        },
        Icon::Repeat => html! {
            path d="m17 2 4 4-4 4" {}
            path d="M3 11v-1a4 4 0 0 1 4-4h14" {}
            path d="m7 22-4-4 4-4" {}
            path d="M21 13v1a4 4 0 0 1-4 4H3" {}
        },
        Icon::TrendingUp => html! {
            polyline points="22 7 13.5 15.5 8.5 10.5 2 17" {}
            polyline points="16 7 22 7 22 13" {}
        },
        Icon::Search => html! {
            circle cx="11" cy="11" r="8" {}
            path d="m21 21-4.3-4.3" {}
        },
        Icon::Target => html! {
            circle cx="12" cy="12" r="10" {}
            circle cx="12" cy="12" r="6" {}
            circle cx="12" cy="12" r="2" {}
        },
        Icon::BarChart => html! {
            path d="M3 3v18h18" {}
            path d="M18 17V9M13 17V5M8 17v-3" {}
        },
        Icon::Zap => html! {
            polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" {}
        },
        Icon::Globe => html! {
            circle cx="12" cy="12" r="10" {}
            path d="M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" {}
        },
        Icon::ArrowRight => html! {
            path d="M5 12h14M12 5l7 7-7 7" {}
        },
        Icon::Mail => html! {
            rect x="2" y="4" width="20" height="16" rx="2" {}
            path d="m22 7-10 6L2 7" {}
        },
        Icon::Linkedin => html! {
            path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" {}
            rect x="2" y="9" width="4" height="12" {}
            circle cx="4" cy="4" r="2" {}
        },
        Icon::Twitter => html! {
            path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" {}
        },
        Icon::Info => html! {
            circle cx="12" cy="12" r="10" {}
            path d="M12 16v-4M12 8h.01" {}
        },
        Icon::Palette => html! {
            circle cx="13.5" cy="6.5" r="1" {}
            circle cx="17.5" cy="10.5" r="1" {}
            circle cx="8.5" cy="7.5" r="1" {}
            circle cx="6.5" cy="12.5" r="1" {}
            path d="M12 2a10 10 0 0 0 0 20c.9 0 1.6-.7 1.6-1.7 0-.4-.2-.8-.4-1.1-.3-.3-.4-.7-.4-1.1 0-.9.7-1.6 1.7-1.6h2A5.5 5.5 0 0 0 22 11c0-5-4.5-9-10-9z" {}
        },
        Icon::Code => html! {
            path d="m18 16 4-4-4-4M6 8l-4 4 4 4M14.5 4l-5 16" {}
        },
        Icon::Copy => html! {
            rect x="9" y="9" width="13" height="13" rx="2" {}
            path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" {}
        },
        Icon::Check => html! {
            circle cx="12" cy="12" r="10" {}
            path d="m9 12 2 2 4-4" {}
        },
        Icon::Download => html! {
            path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" {}
            path d="M7 10l5 5 5-5M12 15V3" {}
        },
        Icon::ExternalLink => html! {
            path d="M15 3h6v6M10 14 21 3" {}
            path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" {}
        },
    }
}
