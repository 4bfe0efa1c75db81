//! Google Sites export kit.
//!
//! Google Sites cannot run an application bundle, so the portfolio ships as
//! three artifacts the site owner pastes or uploads by hand:
//!
//! | Artifact | Builder | Delivered as |
//! |----------|---------|--------------|
//! | Standalone document | [`build_standalone_document`] | `google-sites/index.html` |
//! | Embed snippet | [`build_embed_snippet`] | clipboard, `google-sites/embed.html` |
//! | Theme descriptor | [`export_theme`] | [`THEME_FILENAME`] |
//!
//! The two HTML builders take no input and always return the same string.
//! The theme descriptor is a pure function of [`ThemeConfig`]; its values are
//! copied through without any checking, so a malformed color simply produces
//! a malformed-looking file.
//!
//! ## Manual step
//!
//! The standalone document's module script imports [`PLACEHOLDER_MODULE_URL`].
//! The operator must replace it with the URL of their own hosted build before
//! the document does anything. The CLI prints a reminder whenever it writes
//! the file.

use crate::config::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name the theme descriptor is saved under.
pub const THEME_FILENAME: &str = "kazi-emon-google-sites-theme.json";

/// Display name written into the theme descriptor.
pub const THEME_NAME: &str = "Kazi Emon Hybrid Marketing Theme";

/// Module URL left in the standalone document for the operator to replace.
pub const PLACEHOLDER_MODULE_URL: &str = "https://esm.sh/gh/user/repo/index.tsx";

/// Font stylesheet referenced by the standalone document.
pub const FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@300;400;500;600;700;800&display=swap";

/// Three-line preview shown in the deployment hub's code block.
pub const EMBED_PREVIEW: &str = "<div id=\"root\"></div>\n<script src=\"https://cdn.tailwindcss.com\"></script>\n<script type=\"module\" src=\"https://your-hosted-url.com/index.js\"></script>";

const TITLE_STYLE: (u32, &str) = (48, "#2e1065");
const BODY_STYLE: (u32, &str) = (16, "#4c1d95");

/// The three things the export kit can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Artifact {
    /// Full single-file HTML document.
    Standalone,
    /// Fragment for a Google Sites "Embed code" block.
    Embed,
    /// JSON theme descriptor.
    Theme,
}

impl Artifact {
    /// Path of the artifact relative to the output root.
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Standalone => "google-sites/index.html",
            Artifact::Embed => "google-sites/embed.html",
            Artifact::Theme => THEME_FILENAME,
        }
    }
}

/// Single-file HTML document that boots the portfolio from CDN modules.
pub fn build_standalone_document() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Kazi Emon Portfolio</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link href="{FONT_STYLESHEET_URL}" rel="stylesheet">
    <style>
      body {{ font-family: 'Plus Jakarta Sans', sans-serif; scroll-behavior: smooth; margin: 0; padding: 0; }}
      .purple-gradient {{ background: linear-gradient(135deg, #7e22ce 0%, #a855f7 100%); }}
    </style>
    <script type="importmap">
    {{
      "imports": {{
        "react-dom/": "https://esm.sh/react-dom@^19.2.4/",
        "react/": "https://esm.sh/react@^19.2.4/",
        "react": "https://esm.sh/react@^19.2.4",
        "recharts": "https://esm.sh/recharts@^3.7.0",
        "lucide-react": "https://esm.sh/lucide-react@^0.563.0"
      }}
    }}
    </script>
</head>
<body>
    <div id="root"></div>
    <script type="module">
        // Replace with the URL of your hosted build before publishing.
        import "{PLACEHOLDER_MODULE_URL}";
    </script>
</body>
</html>
"#
    )
}

/// Fragment for pasting into a Google Sites "Embed code" block.
pub fn build_embed_snippet() -> String {
    r##"<div id="ke-portfolio-container"></div>
<script src="https://cdn.tailwindcss.com"></script>
<link href="https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;700&display=swap" rel="stylesheet">
<div style="text-align:center; padding: 50px; font-family: sans-serif;">
  <h3>Kazi Emon Portfolio Loaded Successfully</h3>
  <p>To view the full interactive version within Google Sites, ensure you use the "Embed URL" option or host the build files.</p>
  <a href="#" style="background:#7e22ce; color:white; padding:10px 20px; border-radius:8px; text-decoration:none;">View Full Case Studies</a>
</div>"##
        .to_string()
}

/// Theme file consumed by Google Sites' native theming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub colors: ThemeColors,
    pub text: ThemeText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeText {
    pub title: TextStyle,
    pub body: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: u32,
    pub color: String,
}

impl TextStyle {
    fn new(font_family: &str, (font_size, color): (u32, &str)) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
            color: color.to_string(),
        }
    }
}

/// Map the site theme onto the descriptor shape.
pub fn theme_descriptor(theme: &ThemeConfig) -> ThemeDescriptor {
    ThemeDescriptor {
        name: THEME_NAME.to_string(),
        colors: ThemeColors {
            primary: theme.primary_color.clone(),
            secondary: theme.secondary_color.clone(),
            accent: theme.accent_color.clone(),
        },
        text: ThemeText {
            title: TextStyle::new(&theme.font_family, TITLE_STYLE),
            body: TextStyle::new(&theme.font_family, BODY_STYLE),
        },
    }
}

/// Serialize the theme descriptor as pretty-printed (2-space) JSON.
pub fn export_theme(theme: &ThemeConfig) -> Vec<u8> {
    // Only strings and integers: serialization cannot fail.
    serde_json::to_vec_pretty(&theme_descriptor(theme)).unwrap_or_default()
}

/// Save the theme descriptor as [`THEME_FILENAME`] inside `dir`.
pub fn write_theme_file(theme: &ThemeConfig, dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(THEME_FILENAME);
    fs::write(&path, export_theme(theme))?;
    Ok(path)
}

/// Render any artifact to bytes.
pub fn render_artifact(artifact: Artifact, theme: &ThemeConfig) -> Vec<u8> {
    match artifact {
        Artifact::Standalone => build_standalone_document().into_bytes(),
        Artifact::Embed => build_embed_snippet().into_bytes(),
        Artifact::Theme => export_theme(theme),
    }
}
