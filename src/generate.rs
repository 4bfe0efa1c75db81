//! HTML site generation.
//!
//! Renders the single-page portfolio from the [`ContentStore`] and writes it,
//! together with the Google Sites export kit, into the output directory.
//!
//! ## Page Sections
//!
//! - **Nav**: brand mark, section anchors, "Export for Google Sites" button
//! - **Hero**: headline and calls to action
//! - **Methodology** (`#method`): the three-step paid → organic loop
//! - **Services** (`#services`): one card per [`Skill`]
//! - **Impact**: the growth chart ([`crate::chart`])
//! - **Work** (`#work`): one card per [`Project`]
//! - **Deployment hub** (`#deployment-hub`): modal with the export kit
//! - **Footer**
//!
//! Every repeated block is a plain projection of its slice, so empty content
//! renders empty grids rather than failing.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                          # The portfolio page
//! ├── kazi-emon-google-sites-theme.json   # Theme descriptor
//! ├── google-sites/
//! │   ├── index.html                      # Standalone document
//! │   └── embed.html                      # Embed snippet
//! └── ...                                 # Contents of assets/, if any
//! ```
//!
//! ## No-Build Interactivity
//!
//! The hub opens through the `:target` pseudo-class and switches tabs with
//! radio inputs, so it works without JavaScript. The only script is
//! `static/hub.js`, which copies the embed snippet and flips the "copied"
//! indicator for [`COPIED_FLASH`].

use crate::chart::render_growth_chart;
use crate::config::{self, SiteConfig};
use crate::content::{ContentError, ContentStore, Icon, Project, Skill};
use crate::export::{self, Artifact, EMBED_PREVIEW, THEME_FILENAME};
use crate::hub::{COPIED_FLASH, HubState, HubTab};
use crate::icons::glyph;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Asset {} would overwrite a generated file", .0.display())]
    AssetCollision(PathBuf),
}

const ARTIFACTS: [Artifact; 3] = [Artifact::Standalone, Artifact::Embed, Artifact::Theme];

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/hub.js");

pub const SITE_TITLE: &str = "Kazi Emon | Hybrid Growth Specialist";
pub const CONTACT_EMAIL: &str = "contact@kaziemon.com";
const GUIDE_URL: &str = "https://support.google.com/sites/answer/90538";

/// Everything a page render depends on.
pub struct RenderContext<'a> {
    pub store: ContentStore<'a>,
    pub config: &'a SiteConfig,
    pub hub: HubState,
    /// Instant the copied indicator is evaluated at.
    pub now: Instant,
    /// Year printed in the footer.
    pub year: i32,
}

/// What a [`generate`] run wrote.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Files written, relative to the output directory.
    pub pages: Vec<PathBuf>,
    /// Files copied from the assets directory.
    pub assets: Vec<PathBuf>,
    pub skills: usize,
    pub projects: usize,
    pub growth_points: usize,
}

/// Render the site into `output_dir`.
pub fn generate(
    ctx: &RenderContext,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    ctx.store.validate()?;
    fs::create_dir_all(output_dir)?;

    let mut report = GenerateReport {
        skills: ctx.store.skills.len(),
        projects: ctx.store.projects.len(),
        growth_points: ctx.store.growth.len(),
        ..GenerateReport::default()
    };

    let mut planned = vec![PathBuf::from("index.html")];
    if ctx.config.export.enabled {
        planned.extend(ARTIFACTS.iter().map(|a| PathBuf::from(a.file_name())));
    } else {
        debug!("export kit disabled, skipping Google Sites artifacts");
    }

    // Assets go first so a collision fails before anything is written over.
    let assets_dir = source_dir.join(&ctx.config.assets_dir);
    if assets_dir.is_dir() {
        report.assets = copy_assets(&assets_dir, output_dir, &planned)?;
    }

    let page = render_page(ctx);
    write_output(output_dir, Path::new("index.html"), page.into_string().as_bytes())?;
    if ctx.config.export.enabled {
        for artifact in ARTIFACTS {
            let bytes = export::render_artifact(artifact, &ctx.config.theme);
            write_output(output_dir, Path::new(artifact.file_name()), &bytes)?;
        }
    }
    report.pages = planned;

    info!(
        pages = report.pages.len(),
        assets = report.assets.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

fn write_output(output_dir: &Path, rel: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}

/// Copy the assets tree into the output root, returning relative paths.
///
/// Every entry is checked against `reserved` before anything is copied.
fn copy_assets(
    src: &Path,
    dst: &Path,
    reserved: &[PathBuf],
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => continue,
        };
        if reserved.contains(&rel) {
            return Err(GenerateError::AssetCollision(rel));
        }
        entries.push((entry, rel));
    }

    let mut copied = Vec::new();
    for (entry, rel) in entries {
        let target = dst.join(&rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied.push(rel);
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link href=(export::FONT_STYLESHEET_URL) rel="stylesheet";
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn brand_mark(class: &str) -> Markup {
    html! {
        div class={ "brand-mark " (class) } { "KE" }
    }
}

fn site_nav() -> Markup {
    html! {
        nav.site-nav {
            div.container.nav-inner {
                a.brand href="#" {
                    (brand_mark("brand-mark-sm"))
                    span.brand-text {
                        span.brand-name { "KAZI EMON" }
                        span.brand-role { "Hybrid Growth Specialist" }
                    }
                }
                div.nav-links {
                    a href="#method" { "Methodology" }
                    a href="#services" { "Services" }
                    a href="#work" { "Work" }
                }
                a.button.button-pill href="#deployment-hub" {
                    (glyph(Icon::Globe, "icon icon-sm")) " Export for Google Sites"
                }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section.hero {
            div.container.hero-inner {
                div.eyebrow {
                    (glyph(Icon::TrendingUp, "icon icon-xs")) " Organic Authority • Paid Precision"
                }
                h1 {
                    "Mastering the " br;
                    span.gradient-text { "Hybrid Growth Loop." }
                }
                p.lead {
                    "I am " strong { "Kazi Emon" } ". I specialize in synchronizing "
                    span.accent { "Paid" } " and " span.accent { "Organic" }
                    " strategies to ensure sustainable business growth on all digital platforms."
                }
                div.hero-actions {
                    a.button.button-primary href={ "mailto:" (CONTACT_EMAIL) } {
                        "Start Optimization " (glyph(Icon::ArrowRight, "icon icon-sm"))
                    }
                    a.button.button-ghost href="#work" { "Portfolio" }
                }
            }
        }
    }
}

const METHOD_STEPS: [(&str, &str); 3] = [
    (
        "Paid Injection",
        "I launch targeted paid campaigns to gather instant data and initial traffic.",
    ),
    (
        "Organic Compounding",
        "I use engagement from paid traffic to amplify organic reach and authority.",
    ),
    (
        "Sustainable Scale",
        "As organic growth accelerates, I reduce paid dependency to maximize profit margins.",
    ),
];

fn methodology() -> Markup {
    html! {
        section #method.band {
            div.container.split {
                div.card.card-raised {
                    h3.card-heading { (glyph(Icon::Target, "icon accent")) " The Synergistic Approach" }
                    ol.steps {
                        @for (i, (title, body)) in METHOD_STEPS.iter().enumerate() {
                            li.step {
                                span.step-number { (i + 1) }
                                div {
                                    p.step-title { (title) }
                                    p.muted { (body) }
                                }
                            }
                        }
                    }
                }
                div {
                    h2 { "How Do I Work?" }
                    p.lead {
                        "Digital marketing isn't just about \"boosting\" posts. It's a disciplined optimization process. "
                        "I use paid media as a 'fuel' that helps the organic 'engine' reach top speed faster and more efficiently."
                    }
                    div.stats {
                        div.stat { span.stat-value { "45%" } span.stat-label { "Cost Reduction" } }
                        div.stat-divider {}
                        div.stat { span.stat-value { "3x" } span.stat-label { "Faster Results" } }
                    }
                }
            }
        }
    }
}

/// Renders the services grid, one card per skill.
pub fn render_services(skills: &[Skill]) -> Markup {
    html! {
        section #services.section {
            div.container {
                header.section-header {
                    h2 { "Expert Services" }
                    p.muted { "Integrated digital marketing and optimization services using both paid and organic methods." }
                }
                div.grid.grid-3 {
                    @for skill in skills {
                        article.card.skill-card {
                            div.skill-icon { (glyph(skill.icon, "icon icon-lg")) }
                            h3 { (skill.name) }
                            p.muted { (skill.description) }
                        }
                    }
                }
            }
        }
    }
}

fn impact(ctx: &RenderContext) -> Markup {
    html! {
        section.impact {
            div.container.split {
                div {
                    h2 { "Visualizing the " br; "Shift in Strategy" }
                    p.impact-copy {
                        "Observe the chart: We initiate growth using Paid Traffic, which accelerates Organic Authority over time. "
                        "This is the hallmark of a successful optimization strategy."
                    }
                    ul.legend-list {
                        li { span.dot.dot-organic {} "Organic Growth: Sustainable & Scalable" }
                        li { span.dot.dot-paid {} "Paid Traffic: Targeted & Immediate" }
                    }
                }
                div.chart-frame {
                    (render_growth_chart(ctx.store.growth, &ctx.config.chart))
                }
            }
        }
    }
}

/// Renders the case-study grid, one card per project.
pub fn render_projects(projects: &[Project]) -> Markup {
    html! {
        section #work.section {
            div.container {
                header.section-header {
                    h2 { "Recent Case Studies" }
                    p.muted { "Selected projects demonstrating successful synergy between paid and organic methodologies." }
                }
                div.grid.grid-3 {
                    @for project in projects {
                        article.project-card data-project-id=(project.id) {
                            div.project-media {
                                img src=(project.image_url) alt=(project.title) loading="lazy";
                                div.project-overlay {
                                    span.project-category { (project.category) }
                                    p { (project.description) }
                                    div.project-results {
                                        (glyph(Icon::Zap, "icon icon-sm"))
                                        span { (project.results) }
                                    }
                                }
                            }
                            h3 { (project.title) }
                            p.project-tag { (project.category) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the deployment hub modal in the given state.
pub fn render_hub(hub: &HubState, config: &SiteConfig, now: Instant) -> Markup {
    let copied = if hub.copied.is_lit(now) { "true" } else { "false" };
    let flash_ms = COPIED_FLASH.as_millis().to_string();
    let modal_class = if hub.open { "hub-modal is-open" } else { "hub-modal" };
    let export_enabled = config.export.enabled;

    html! {
        div #deployment-hub class=(modal_class)
            role="dialog" aria-modal="true" aria-labelledby="hub-title" {
            a.hub-backdrop href="#" data-hub-close aria-label="Close" {}
            div.hub-panel {
                header.hub-header {
                    div {
                        h2 #hub-title { "Google Sites Deployment" }
                        p.muted { "Follow these steps to integrate your custom design." }
                    }
                    a.hub-close href="#" data-hub-close aria-label="Close" { "✕" }
                }
                @for tab in [HubTab::Embed, HubTab::Theme] {
                    input.hub-tab-input type="radio" name="hub-tab" id=(tab.id())
                        checked[hub.active_tab == tab];
                }
                div.hub-tabs role="tablist" {
                    label for=(HubTab::Embed.id()) { (glyph(Icon::Code, "icon icon-sm")) " " (HubTab::Embed.label()) }
                    label for=(HubTab::Theme.id()) { (glyph(Icon::Palette, "icon icon-sm")) " " (HubTab::Theme.label()) }
                }
                div.hub-panes {
                    div.hub-pane.pane-embed {
                        div.callout.callout-info {
                            (glyph(Icon::Info, "icon"))
                            div {
                                p.callout-title { "How to Embed:" }
                                p {
                                    "Go to your Google Site, click " strong { "Insert" } " > " strong { "Embed" }
                                    " > " strong { "Embed Code" } ", then paste the code below."
                                }
                            }
                        }
                        div.code-block {
                            pre { code { (EMBED_PREVIEW) } }
                            button.copy-button type="button" aria-label="Copy embed code"
                                data-snippet=(export::build_embed_snippet())
                                data-flash-ms=(flash_ms)
                                data-copied=(copied) {
                                (glyph(Icon::Copy, "icon icon-sm when-idle"))
                                (glyph(Icon::Check, "icon icon-sm when-copied"))
                            }
                        }
                        div.download-box {
                            p.muted { "Alternatively, download the ready-to-use HTML file:" }
                            @if export_enabled {
                                a.button.button-primary href=(Artifact::Standalone.file_name()) download="index.html" {
                                    (glyph(Icon::Download, "icon icon-sm")) " Download index.html"
                                }
                            } @else {
                                p.muted { "Run the build with the export kit enabled to produce it." }
                            }
                        }
                    }
                    div.hub-pane.pane-theme {
                        div.callout.callout-brand {
                            (glyph(Icon::Palette, "icon"))
                            div {
                                p.callout-title { "Synchronize Styling:" }
                                p {
                                    "Download this JSON to update the Google Sites " strong { "native" }
                                    " headers and buttons to match your brand's purple theme."
                                }
                            }
                        }
                        div.swatches {
                            div.swatch { span.swatch-dot style={ "background:" (config.theme.primary_color) } {} span { "Primary" } }
                            div.swatch { span.swatch-dot style={ "background:" (config.theme.accent_color) } {} span { "Accent" } }
                            div.swatch { span.swatch-dot.swatch-body style={ "background:" (config.theme.secondary_color) } {} span { "Body" } }
                        }
                        @if export_enabled {
                            a.button.button-dark.button-block href=(THEME_FILENAME) download=(THEME_FILENAME) {
                                (glyph(Icon::Download, "icon")) " Download Theme JSON"
                            }
                        }
                    }
                }
                footer.hub-footer {
                    span.hub-compat { (glyph(Icon::Globe, "icon icon-xs")) " Compatible with Google Sites V2" }
                    a href=(GUIDE_URL) target="_blank" rel="noopener" {
                        "Official Guide " (glyph(Icon::ExternalLink, "icon icon-xs"))
                    }
                }
            }
        }
    }
}

fn site_footer(year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                (brand_mark("brand-mark-lg"))
                h2 { "KAZI EMON" }
                p.brand-role { "Platform Optimization Expert" }
                div.social {
                    a href="#" aria-label="LinkedIn" { (glyph(Icon::Linkedin, "icon")) }
                    a href="#" aria-label="Twitter" { (glyph(Icon::Twitter, "icon")) }
                    a href={ "mailto:" (CONTACT_EMAIL) } aria-label="Email" { (glyph(Icon::Mail, "icon")) }
                }
                p.copyright { "© " (year) " KAZI EMON • ALL RIGHTS RESERVED" }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the full portfolio page.
pub fn render_page(ctx: &RenderContext) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_theme_css(&ctx.config.theme),
        CSS_STATIC
    );

    let content = html! {
        (site_nav())
        main {
            (hero())
            (methodology())
            (render_services(ctx.store.skills))
            (impact(ctx))
            (render_projects(ctx.store.projects))
        }
        (render_hub(&ctx.hub, ctx.config, ctx.now))
        (site_footer(ctx.year))
    };

    base_document(SITE_TITLE, &css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardSink};
    use crate::content::{GROWTH_DATA, PROJECTS, SKILLS};
    use crate::test_helpers::*;
    use std::time::Duration;
    use tempfile::TempDir;

    struct NullSink;

    impl ClipboardSink for NullSink {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[test]
    fn page_includes_doctype_and_title() {
        let config = SiteConfig::default();
        let html = render_page(&test_context(&config)).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Kazi Emon | Hybrid Growth Specialist</title>"));
    }

    #[test]
    fn page_has_all_sections() {
        let config = SiteConfig::default();
        let html = render_page(&test_context(&config)).into_string();
        for id in ["id=\"method\"", "id=\"services\"", "id=\"work\"", "id=\"deployment-hub\""] {
            assert!(html.contains(id), "missing {id}");
        }
        assert!(html.contains("<svg class=\"growth-chart\""));
        assert!(html.contains("© 2026 KAZI EMON"));
    }

    #[test]
    fn page_renders_one_card_per_record() {
        let config = SiteConfig::default();
        let html = render_page(&test_context(&config)).into_string();
        assert_eq!(count_class(&html, "skill-card"), SKILLS.len());
        assert_eq!(count_class(&html, "project-card"), PROJECTS.len());
        for skill in SKILLS {
            assert!(html.contains(&maud::html! { (skill.name) }.into_string()));
        }
    }

    #[test]
    fn empty_content_renders_empty_grids() {
        let config = SiteConfig::default();
        let ctx = RenderContext {
            store: ContentStore::empty(),
            ..test_context(&config)
        };
        let html = render_page(&ctx).into_string();
        assert_eq!(count_class(&html, "skill-card"), 0);
        assert_eq!(count_class(&html, "project-card"), 0);
        assert!(!html.contains("chart-series"));
        assert!(html.contains("Expert Services"));
    }

    #[test]
    fn sections_carry_anchor_ids() {
        let config = SiteConfig::default();
        let html = render_page(&test_context(&config)).into_string();
        for (id, class) in [("method", "band"), ("services", "section"), ("work", "section")] {
            let tag = tag_with_id(&html, id);
            assert!(tag.starts_with("<section "), "{tag}");
            assert!(tag.contains(&format!(r#"class="{class}""#)), "{tag}");
        }
    }

    #[test]
    fn footer_links_social_profiles_and_email() {
        let html = site_footer(TEST_YEAR).into_string();
        assert!(html.contains(r##"<a href="#" aria-label="LinkedIn">"##));
        assert!(html.contains(r##"<a href="#" aria-label="Twitter">"##));
        assert!(html.contains(r#"href="mailto:contact@kaziemon.com" aria-label="Email""#));
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn theme_css_is_injected() {
        let mut config = SiteConfig::default();
        config.theme.primary_color = "#123456".to_string();
        let html = render_page(&test_context(&config)).into_string();
        assert!(html.contains("--color-primary: #123456"));
    }

    #[test]
    fn project_image_and_results() {
        let html = render_projects(PROJECTS).into_string();
        assert!(html.contains(PROJECTS[0].image_url.replace('&', "&amp;").as_str()));
        assert!(html.contains(r#"data-project-id="2""#));
        assert!(html.contains("5.8x ROAS"));
    }

    #[test]
    fn services_escape_content() {
        let skills = [Skill {
            name: "<script>alert('xss')</script>",
            description: "d",
            icon: Icon::Zap,
        }];
        let html = render_services(&skills).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Deployment hub
    // =========================================================================

    #[test]
    fn hub_closed_by_default_on_embed_tab() {
        let html = render_hub(&HubState::default(), &SiteConfig::default(), Instant::now())
            .into_string();
        assert!(html.contains(r#"class="hub-modal""#));
        assert!(html.contains(r#"id="hub-tab-embed" checked"#));
        assert!(!html.contains(r#"id="hub-tab-theme" checked"#));
        assert!(html.contains(r#"data-copied="false""#));
        assert!(tag_with_id(&html, "deployment-hub").starts_with("<div "));
        assert_eq!(tag_with_id(&html, "hub-title"), r#"<h2 id="hub-title">"#);
    }

    #[test]
    fn hub_open_on_theme_tab() {
        let hub = HubState::opened_on(HubTab::Theme);
        let html = render_hub(&hub, &SiteConfig::default(), Instant::now()).into_string();
        assert!(html.contains(r#"class="hub-modal is-open""#));
        assert!(html.contains(r#"id="hub-tab-theme" checked"#));
        assert!(!html.contains(r#"id="hub-tab-embed" checked"#));
    }

    #[test]
    fn hub_shows_copied_state_for_flash_interval() {
        let mut hub = HubState::opened_on(HubTab::Embed);
        let t0 = Instant::now();
        hub.copy_embed(t0, &mut NullSink).unwrap();
        let config = SiteConfig::default();

        let lit = render_hub(&hub, &config, t0 + Duration::from_millis(1999)).into_string();
        assert!(lit.contains(r#"data-copied="true""#));

        let dark = render_hub(&hub, &config, t0 + COPIED_FLASH).into_string();
        assert!(dark.contains(r#"data-copied="false""#));
    }

    #[test]
    fn hub_carries_snippet_and_flash_duration() {
        let html = render_hub(&HubState::default(), &SiteConfig::default(), Instant::now())
            .into_string();
        assert!(html.contains(r#"data-flash-ms="2000""#));
        assert!(html.contains("data-snippet=\"&lt;div id=&quot;ke-portfolio-container&quot;"));
        assert!(html.contains("&lt;div id=&quot;root&quot;&gt;&lt;/div&gt;"));
    }

    #[test]
    fn hub_links_export_artifacts() {
        let html = render_hub(&HubState::default(), &SiteConfig::default(), Instant::now())
            .into_string();
        assert!(html.contains(r#"href="google-sites/index.html" download="index.html""#));
        assert!(html.contains(&format!(r#"href="{THEME_FILENAME}""#)));
    }

    #[test]
    fn hub_omits_downloads_when_export_disabled() {
        let mut config = SiteConfig::default();
        config.export.enabled = false;
        let html = render_hub(&HubState::default(), &config, Instant::now()).into_string();
        assert!(!html.contains("google-sites/index.html"));
        assert!(!html.contains(THEME_FILENAME));
    }

    // =========================================================================
    // generate() tests
    // =========================================================================

    #[test]
    fn generate_writes_page_and_export_kit() {
        let config = SiteConfig::default();
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let report = generate(&test_context(&config), src.path(), out.path()).unwrap();

        assert_eq!(report.pages.len(), 4);
        assert_eq!(report.skills, 6);
        assert_eq!(report.growth_points, GROWTH_DATA.len());
        assert!(out.path().join("index.html").is_file());
        assert_eq!(
            fs::read_to_string(out.path().join("google-sites/index.html")).unwrap(),
            export::build_standalone_document()
        );
        assert_eq!(
            fs::read_to_string(out.path().join("google-sites/embed.html")).unwrap(),
            export::build_embed_snippet()
        );
        assert_eq!(
            fs::read(out.path().join(THEME_FILENAME)).unwrap(),
            export::export_theme(&config.theme)
        );
    }

    #[test]
    fn generate_skips_export_kit_when_disabled() {
        let mut config = SiteConfig::default();
        config.export.enabled = false;
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let report = generate(&test_context(&config), src.path(), out.path()).unwrap();
        assert_eq!(report.pages, vec![PathBuf::from("index.html")]);
        assert!(!out.path().join("google-sites").exists());
    }

    #[test]
    fn generate_copies_assets() {
        let config = SiteConfig::default();
        let src = source_with_assets(&[("favicon.ico", "ico"), ("img/og.png", "png")]);
        let out = TempDir::new().unwrap();

        let report = generate(&test_context(&config), src.path(), out.path()).unwrap();
        assert_eq!(
            report.assets,
            vec![PathBuf::from("favicon.ico"), PathBuf::from("img/og.png")]
        );
        assert_eq!(
            fs::read_to_string(out.path().join("img/og.png")).unwrap(),
            "png"
        );
    }

    #[test]
    fn generate_rejects_assets_shadowing_generated_files() {
        let config = SiteConfig::default();
        let src = source_with_assets(&[("index.html", "ASSET")]);
        let out = TempDir::new().unwrap();

        let result = generate(&test_context(&config), src.path(), out.path());
        match result {
            Err(GenerateError::AssetCollision(rel)) => assert_eq!(rel, PathBuf::from("index.html")),
            other => panic!("expected asset collision, got {other:?}"),
        }
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn generate_rejects_asset_named_like_theme_file() {
        let config = SiteConfig::default();
        let src = source_with_assets(&[("favicon.ico", "ico"), (THEME_FILENAME, "{}")]);
        let out = TempDir::new().unwrap();

        let result = generate(&test_context(&config), src.path(), out.path());
        assert!(matches!(result, Err(GenerateError::AssetCollision(_))));
        assert!(!out.path().join("favicon.ico").exists());
    }

    #[test]
    fn asset_may_reuse_export_paths_when_kit_disabled() {
        let mut config = SiteConfig::default();
        config.export.enabled = false;
        let src = source_with_assets(&[(THEME_FILENAME, "{}")]);
        let out = TempDir::new().unwrap();

        let report = generate(&test_context(&config), src.path(), out.path()).unwrap();
        assert_eq!(report.assets, vec![PathBuf::from(THEME_FILENAME)]);
        let page = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn generate_rejects_duplicate_project_ids() {
        let config = SiteConfig::default();
        let projects = [PROJECTS[0], PROJECTS[0]];
        let ctx = RenderContext {
            store: ContentStore {
                projects: &projects,
                ..ContentStore::builtin()
            },
            ..test_context(&config)
        };
        let out = TempDir::new().unwrap();
        let result = generate(&ctx, out.path(), out.path());
        assert!(matches!(result, Err(GenerateError::Content(_))));
    }
}
