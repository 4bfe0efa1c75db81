//! # Kazi Folio
//!
//! A static generator for the Kazi Emon hybrid-growth marketing portfolio and
//! the kit that moves it onto Google Sites.
//!
//! # Architecture: Content In, Files Out
//!
//! All portfolio content (services, case studies, the growth series) is
//! compiled into the binary. A single `build` renders it into plain files:
//!
//! ```text
//! content (built in) + config.toml  →  dist/index.html
//!                                       dist/google-sites/index.html
//!                                       dist/google-sites/embed.html
//!                                       dist/kazi-emon-google-sites-theme.json
//! ```
//!
//! The three Google Sites artifacts are also available one at a time through
//! `export`, printed to stdout, written to a file, or (for the embed snippet)
//! placed on the system clipboard.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Built-in skills, case studies and growth data, plus the [`content::ContentStore`] view |
//! | [`export`] | Standalone document, embed snippet and theme descriptor builders |
//! | [`hub`] | Deployment hub state: open/closed, active tab, time-based "copied" indicator |
//! | [`clipboard`] | [`clipboard::ClipboardSink`] seam and the `arboard`-backed system clipboard |
//! | [`chart`] | Monotone-cubic SVG area chart for the growth series |
//! | [`icons`] | Inline SVG glyphs for the [`content::Icon`] tags |
//! | [`generate`] | Renders the page with Maud and writes the output directory |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting for build, check and export results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Templates are
//! Rust expressions checked at compile time, interpolation is escaped by
//! default, and there is no template directory to ship.
//!
//! ## Builders Are Pure
//!
//! [`export::build_standalone_document`], [`export::build_embed_snippet`] and
//! [`export::export_theme`] take no I/O and cannot fail. Writing files and
//! touching the clipboard happen at the edges ([`generate`], `main`), so the
//! artifacts are byte-identical across calls and trivially testable.
//!
//! ## Time-Based Copied Indicator
//!
//! The hub's "copied" feedback is a timestamp, not a timer.
//! [`hub::CopyIndicator::is_lit`] compares against [`hub::COPIED_FLASH`], so
//! there are no threads to cancel and re-copying simply restarts the window.
//! The page script uses the same interval, carried in a `data-` attribute.
//!
//! ## No-Build Front End
//!
//! The generated page is one HTML file with inline CSS and a few lines of
//! vanilla JavaScript. The hub modal opens via `:target` and switches tabs
//! with radio inputs, so everything except the clipboard works with
//! scripting disabled.

pub mod chart;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod export;
pub mod generate;
pub mod hub;
pub mod icons;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
