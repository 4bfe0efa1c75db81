//! Static portfolio content.
//!
//! Everything the page shows (services, case studies, the growth series) is
//! compiled into the binary. There is no write path: the records live in
//! `static` slices and are handed out as a [`ContentStore`] of borrowed views.
//!
//! Icons are stored as an [`Icon`] tag rather than markup so this module stays
//! presentation-agnostic; `generate` resolves each tag to an inline SVG glyph.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate project id '{0}'")]
    DuplicateProject(String),
}

/// Glyph tag. Skills carry one; the page chrome uses the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Settings,
    Repeat,
    TrendingUp,
    Search,
    Target,
    BarChart,
    Zap,
    Globe,
    ArrowRight,
    Mail,
    Linkedin,
    Twitter,
    Info,
    Palette,
    Code,
    Copy,
    Check,
    Download,
    ExternalLink,
}

/// A service offered, rendered as one card in the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// A case study in the project showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Unique across the shipped set.
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Free-text headline numbers, e.g. `"2.5x ROI | -40% Ad Spend"`.
    pub results: &'static str,
    pub image_url: &'static str,
}

/// One month of the growth series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub label: &'static str,
    pub organic: f64,
    pub paid: f64,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Integrated Platform Optimization",
        description: "Combining Paid reach with Organic authority to create a self-sustaining growth loop on any digital platform.",
        icon: Icon::Settings,
    },
    Skill {
        name: "Paid & Organic Synergy",
        description: "Using paid campaigns to fuel organic data, allowing for smarter, cheaper, and more effective long-term visibility.",
        icon: Icon::Repeat,
    },
    Skill {
        name: "Hybrid Content Strategy",
        description: "Developing content that performs equally well as a sponsored ad and an organic social post.",
        icon: Icon::TrendingUp,
    },
    Skill {
        name: "SEM & SEO Alignment",
        description: "Aligning search engine marketing with organic SEO to dominate the entire search results page (SERP).",
        icon: Icon::Search,
    },
    Skill {
        name: "Conversion Optimization",
        description: "Optimizing landing pages for both cold paid traffic and warm organic leads to maximize total ROI.",
        icon: Icon::Target,
    },
    Skill {
        name: "Data-Driven Attribution",
        description: "Analyzing how paid touchpoints influence organic conversions to understand the true customer journey.",
        icon: Icon::BarChart,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Multi-Channel Growth Engine",
        category: "Hybrid Strategy",
        description: "Integrated Google Ads with Technical SEO to triple the total platform traffic in 90 days.",
        results: "300% Total Growth | 45% Organic Lift",
        image_url: "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=800",
    },
    Project {
        id: "2",
        title: "Paid-to-Organic Pipeline",
        category: "Optimization",
        description: "Built a system where initial paid traffic accelerated organic social proof, lowering overall CPL.",
        results: "2.5x ROI | -40% Ad Spend",
        image_url: "https://images.unsplash.com/photo-1551288049-bbbda536339a?auto=format&fit=crop&q=80&w=800",
    },
    Project {
        id: "3",
        title: "Brand Authority Scale",
        category: "Digital Marketing",
        description: "Leveraged high-performing organic content as social ads to build rapid brand trust and authority.",
        results: "1M+ Reach | 5.8x ROAS",
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800",
    },
];

pub const GROWTH_DATA: &[GrowthPoint] = &[
    GrowthPoint {
        label: "Month 1",
        organic: 1200.0,
        paid: 2500.0,
    },
    GrowthPoint {
        label: "Month 2",
        organic: 1800.0,
        paid: 3200.0,
    },
    GrowthPoint {
        label: "Month 3",
        organic: 2900.0,
        paid: 4100.0,
    },
    GrowthPoint {
        label: "Month 4",
        organic: 4500.0,
        paid: 3800.0,
    },
    GrowthPoint {
        label: "Month 5",
        organic: 6800.0,
        paid: 3500.0,
    },
    GrowthPoint {
        label: "Month 6",
        organic: 9200.0,
        paid: 3200.0,
    },
];

/// Largest value across both growth series, 0 when `points` is empty.
pub fn series_peak(points: &[GrowthPoint]) -> f64 {
    points
        .iter()
        .flat_map(|p| [p.organic, p.paid])
        .fold(0.0, f64::max)
}

/// Borrowed view over the content the renderer consumes.
///
/// The shipped site always uses [`ContentStore::builtin`]; tests swap in
/// other slices (including empty ones) to exercise the layout boundaries.
#[derive(Debug, Clone, Copy)]
pub struct ContentStore<'a> {
    pub skills: &'a [Skill],
    pub projects: &'a [Project],
    pub growth: &'a [GrowthPoint],
}

impl ContentStore<'static> {
    pub fn builtin() -> Self {
        Self {
            skills: SKILLS,
            projects: PROJECTS,
            growth: GROWTH_DATA,
        }
    }

    pub fn empty() -> Self {
        Self {
            skills: &[],
            projects: &[],
            growth: &[],
        }
    }
}

impl ContentStore<'_> {
    /// Project ids key the showcase cards and must not collide.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id.to_string()));
            }
        }
        Ok(())
    }

    pub fn growth_peak(&self) -> f64 {
        series_peak(self.growth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        assert!(ContentStore::builtin().validate().is_ok());
    }

    #[test]
    fn builtin_counts() {
        let store = ContentStore::builtin();
        assert_eq!(store.skills.len(), 6);
        assert_eq!(store.projects.len(), 3);
        assert_eq!(store.growth.len(), 6);
    }

    #[test]
    fn growth_series_is_chronological() {
        let labels: Vec<&str> = GROWTH_DATA.iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            ["Month 1", "Month 2", "Month 3", "Month 4", "Month 5", "Month 6"]
        );
    }

    #[test]
    fn duplicate_project_ids_rejected() {
        let projects = [PROJECTS[0], PROJECTS[0]];
        let store = ContentStore {
            skills: SKILLS,
            projects: &projects,
            growth: GROWTH_DATA,
        };
        assert_eq!(
            store.validate(),
            Err(ContentError::DuplicateProject("1".to_string()))
        );
    }

    #[test]
    fn empty_store_is_valid() {
        let store = ContentStore::empty();
        assert!(store.validate().is_ok());
        assert_eq!(store.growth_peak(), 0.0);
    }

    #[test]
    fn growth_peak_spans_both_series() {
        assert_eq!(ContentStore::builtin().growth_peak(), 9200.0);

        let points = [GrowthPoint {
            label: "only",
            organic: 10.0,
            paid: 25.0,
        }];
        let store = ContentStore {
            growth: &points,
            ..ContentStore::empty()
        };
        assert_eq!(store.growth_peak(), 25.0);
    }

    #[test]
    fn icon_serializes_kebab_case() {
        let json = serde_json::to_string(&Icon::TrendingUp).unwrap();
        assert_eq!(json, "\"trending-up\"");
    }
}
