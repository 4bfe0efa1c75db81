//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Content is listed by
//! what it is (a service, a case study, a month of growth) with positional
//! indices; files written are listed under their own heading, relative to the
//! output directory.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Services
//! 001 Integrated Platform Optimization
//!     Icon: settings
//! 002 Paid & Organic Synergy
//!     Icon: repeat
//!
//! Case Studies
//! 001 Multi-Channel Growth Engine
//!     Category: Hybrid Strategy
//!     Results: 300% Total Growth | 45% Organic Lift
//!
//! Growth Series
//!     6 months, Month 1 → Month 6
//!     Peak: 9200
//!
//! Config
//!     Theme: #7e22ce / #f5f3ff / #a855f7
//!     Font: Plus Jakarta Sans
//!     Chart: 640x360
//!     Export kit: enabled
//! ```
//!
//! ## Build
//!
//! ```text
//! Pages
//!     index.html
//!     google-sites/index.html
//!     google-sites/embed.html
//!     kazi-emon-google-sites-theme.json
//!
//! Assets
//!     favicon.ico
//!
//! Generated 4 files, 1 asset, 6 services, 3 case studies → dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::content::{ContentStore, Icon};
use crate::export::{Artifact, PLACEHOLDER_MODULE_URL};
use crate::generate::GenerateReport;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 asset`, `2 assets`.
fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Kebab-case icon name, as it appears in serialized content.
fn icon_name(icon: Icon) -> String {
    serde_json::to_value(icon)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

/// Trim trailing zeros off a chart value: `4900` rather than `4900.0`.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

/// Reminder printed whenever the standalone document is written.
pub fn placeholder_reminder() -> Vec<String> {
    vec![
        "Note: the standalone document imports a placeholder module".to_string(),
        format!("{}{}", indent(1), PLACEHOLDER_MODULE_URL),
        format!(
            "{}Replace it with the URL of your hosted build before uploading.",
            indent(1)
        ),
    ]
}

// ============================================================================
// Check
// ============================================================================

/// Format the content and config inventory shown by `check`.
pub fn format_check_output(store: &ContentStore, config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Services".to_string());
    if store.skills.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, skill) in store.skills.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), skill.name));
        lines.push(format!("{}Icon: {}", indent(1), icon_name(skill.icon)));
    }

    lines.push(String::new());
    lines.push("Case Studies".to_string());
    if store.projects.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, project) in store.projects.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), project.title));
        lines.push(format!("{}Category: {}", indent(1), project.category));
        lines.push(format!("{}Results: {}", indent(1), project.results));
    }

    lines.push(String::new());
    lines.push("Growth Series".to_string());
    match (store.growth.first(), store.growth.last()) {
        (Some(first), Some(last)) => {
            lines.push(format!(
                "{}{}, {} → {}",
                indent(1),
                plural(store.growth.len(), "month", "months"),
                first.label,
                last.label
            ));
            lines.push(format!(
                "{}Peak: {}",
                indent(1),
                format_value(store.growth_peak())
            ));
        }
        _ => lines.push(format!("{}(none)", indent(1))),
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    let theme = &config.theme;
    lines.push(format!(
        "{}Theme: {} / {} / {}",
        indent(1),
        theme.primary_color,
        theme.secondary_color,
        theme.accent_color
    ));
    lines.push(format!("{}Font: {}", indent(1), theme.font_family));
    lines.push(format!(
        "{}Chart: {}x{}",
        indent(1),
        config.chart.width,
        config.chart.height
    ));
    lines.push(format!(
        "{}Export kit: {}",
        indent(1),
        if config.export.enabled { "enabled" } else { "disabled" }
    ));

    lines
}

pub fn print_check_output(store: &ContentStore, config: &SiteConfig) {
    for line in format_check_output(store, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the files written by a build.
pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    for page in &report.pages {
        lines.push(format!("{}{}", indent(1), page.display()));
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset.display()));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}, {} → {}",
        plural(report.pages.len(), "file", "files"),
        plural(report.assets.len(), "asset", "assets"),
        plural(report.skills, "service", "services"),
        plural(report.projects, "case study", "case studies"),
        output_dir.display()
    ));

    if report
        .pages
        .iter()
        .any(|p| p == Path::new(Artifact::Standalone.file_name()))
    {
        lines.push(String::new());
        lines.extend(placeholder_reminder());
    }

    lines
}

pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Export
// ============================================================================

/// Format the confirmation for an artifact written to `path`.
///
/// Goes to stderr so `export` output stays pipeable when printing to stdout.
pub fn format_export_written(artifact: Artifact, path: &Path) -> Vec<String> {
    let mut lines = vec![format!("Wrote {}", path.display())];
    if artifact == Artifact::Standalone {
        lines.extend(placeholder_reminder());
    }
    lines
}

pub fn print_export_written(artifact: Artifact, path: &Path) {
    for line in format_export_written(artifact, path) {
        eprintln!("{}", line);
    }
}

/// Format the confirmation for a clipboard copy.
///
/// `serving` is set where this process keeps owning the selection (X11,
/// Wayland) and the command stays up until another copy replaces it.
pub fn format_copied(serving: bool) -> Vec<String> {
    let mut lines = vec![
        "Embed code copied to clipboard".to_string(),
        format!(
            "{}Paste it into Google Sites: Insert > Embed > Embed Code",
            indent(1)
        ),
    ];
    if serving {
        lines.push(format!(
            "{}Serving the clipboard until something else is copied (Ctrl-C to stop)",
            indent(1)
        ));
    }
    lines
}

pub fn print_copied(serving: bool) {
    for line in format_copied(serving) {
        eprintln!("{}", line);
    }
}
