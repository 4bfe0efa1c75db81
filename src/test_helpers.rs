//! Shared test utilities for the kazi-folio test suite.
//!
//! Provides a deterministic [`RenderContext`], a temp source directory with
//! an `assets/` tree, and markup lookups (class counts, tags by id).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = SiteConfig::default();
//! let html = render_page(&test_context(&config)).into_string();
//! assert_eq!(count_class(&html, "skill-card"), 6);
//! ```

use std::path::Path;
use std::time::Instant;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::generate::RenderContext;
use crate::hub::HubState;

/// Footer year used by every test render.
pub const TEST_YEAR: i32 = 2026;

/// Builtin content, closed hub, fixed year.
pub fn test_context(config: &SiteConfig) -> RenderContext<'_> {
    RenderContext {
        store: ContentStore::builtin(),
        config,
        hub: HubState::default(),
        now: Instant::now(),
        year: TEST_YEAR,
    }
}

/// Temp source directory whose `assets/` holds `files` (`(relative path, contents)`).
pub fn source_with_assets(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let assets = tmp.path().join("assets");
    for (rel, contents) in files {
        let path = assets.join(rel);
        std::fs::create_dir_all(path.parent().unwrap_or(Path::new("."))).unwrap();
        std::fs::write(&path, contents).unwrap();
    }
    tmp
}

/// Number of elements whose `class` attribute lists `class`.
///
/// Matches whole class tokens, so `card` does not count `skill-card`, and
/// selectors inside `<style>` are ignored.
pub fn count_class(html: &str, class: &str) -> usize {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|attr| attr.split_whitespace().any(|c| c == class))
        .count()
}

/// Opening tag of the first element with `id`.
pub fn tag_with_id<'h>(html: &'h str, id: &str) -> &'h str {
    let at = html
        .find(&format!("id=\"{id}\""))
        .unwrap_or_else(|| panic!("no element with id {id}"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}
