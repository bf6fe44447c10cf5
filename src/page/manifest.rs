//! Serde model of a portfolio page, loadable from TOML or JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text (e.g., "About")
    pub label: String,
    /// Id of the section the link points at
    pub target: String,
}

/// A prose section of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionManifest {
    /// Section id (also the nav target)
    pub id: String,
    /// Section heading
    pub heading: String,
    /// Body text
    #[serde(default)]
    pub body: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardManifest {
    /// Card title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub summary: String,
    /// Category tag; cards without one are counted under "other"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A heading plus the grid of cards below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGroup {
    /// Group heading (shown only when no filter is active)
    pub heading: String,
    /// Cards in this group's grid
    #[serde(default)]
    pub cards: Vec<CardManifest>,
}

/// Complete description of a portfolio page.
///
/// # Examples
///
/// ```
/// use folio::page::PageManifest;
///
/// let manifest: PageManifest = toml::from_str(
///     r#"
///     title = "Jane Doe"
///
///     [[projects]]
///     heading = "Featured"
///     cards = [{ title = "Site", category = "web" }]
///     "#,
/// )
/// .unwrap();
/// assert_eq!(manifest.projects[0].cards[0].category.as_deref(), Some("web"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageManifest {
    /// Page title (rendered in the header)
    pub title: String,
    /// Short tagline under the title
    #[serde(default)]
    pub tagline: String,
    /// Navigation menu links
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Prose sections, in page order
    #[serde(default)]
    pub sections: Vec<SectionManifest>,
    /// Project groups; when empty the page carries no filter section
    #[serde(default)]
    pub projects: Vec<ProjectGroup>,
}

impl PageManifest {
    /// Loads a manifest from a TOML (`.toml`) or JSON (`.json`) file,
    /// selected by extension. Anything else is parsed as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read page manifest: {}", path.display()))?;

        let manifest = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .context(format!("Failed to parse JSON manifest: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .context(format!("Failed to parse TOML manifest: {}", path.display()))?
        };

        Ok(manifest)
    }

    /// Distinct card categories in order of first appearance.
    ///
    /// Cards without a category contribute "other".
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for group in &self.projects {
            for card in &group.cards {
                let cat = card
                    .category
                    .as_deref()
                    .unwrap_or(super::markers::DEFAULT_CATEGORY);
                if !out.iter().any(|c| c == cat) {
                    out.push(cat.to_string());
                }
            }
        }
        out
    }

    /// Built-in sample page used when no manifest is given.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            title: "Alex Doe".to_string(),
            tagline: "Systems engineer & occasional designer".to_string(),
            nav: vec![
                NavLink {
                    label: "About".to_string(),
                    target: "about".to_string(),
                },
                NavLink {
                    label: "Skills".to_string(),
                    target: "skills".to_string(),
                },
                NavLink {
                    label: "Projects".to_string(),
                    target: "projects".to_string(),
                },
                NavLink {
                    label: "Contact".to_string(),
                    target: "contact".to_string(),
                },
            ],
            sections: vec![
                SectionManifest {
                    id: "about".to_string(),
                    heading: "About".to_string(),
                    body: "I build reliable tools and the occasional pretty thing."
                        .to_string(),
                },
                SectionManifest {
                    id: "skills".to_string(),
                    heading: "Skills".to_string(),
                    body: "Rust, distributed systems, terminal interfaces, typography."
                        .to_string(),
                },
                SectionManifest {
                    id: "contact".to_string(),
                    heading: "Contact".to_string(),
                    body: "alex@example.com".to_string(),
                },
            ],
            projects: vec![
                ProjectGroup {
                    heading: "Featured".to_string(),
                    cards: vec![
                        CardManifest {
                            title: "Storefront".to_string(),
                            summary: "Headless commerce front end.".to_string(),
                            category: Some("web".to_string()),
                        },
                        CardManifest {
                            title: "Telemetry Hub".to_string(),
                            summary: "Fleet metrics collector.".to_string(),
                            category: Some("web".to_string()),
                        },
                        CardManifest {
                            title: "Brand Refresh".to_string(),
                            summary: "Identity system for a small press.".to_string(),
                            category: Some("design".to_string()),
                        },
                    ],
                },
                ProjectGroup {
                    heading: "Open Source".to_string(),
                    cards: vec![
                        CardManifest {
                            title: "folio".to_string(),
                            summary: "This viewer.".to_string(),
                            category: Some("tools".to_string()),
                        },
                        CardManifest {
                            title: "Sketchbook".to_string(),
                            summary: "Assorted experiments.".to_string(),
                            category: None,
                        },
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_first_appearance_order() {
        let manifest = PageManifest::sample();
        assert_eq!(manifest.categories(), vec!["web", "design", "tools", "other"]);
    }

    #[test]
    fn test_toml_round_trip() {
        let manifest = PageManifest::sample();
        let content = toml::to_string_pretty(&manifest).unwrap();
        let loaded: PageManifest = toml::from_str(&content).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_json_parse() {
        let manifest = PageManifest::sample();
        let content = serde_json::to_string(&manifest).unwrap();
        let loaded: PageManifest = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_minimal_manifest_defaults() {
        let manifest: PageManifest = toml::from_str("title = \"Minimal\"").unwrap();
        assert!(manifest.nav.is_empty());
        assert!(manifest.sections.is_empty());
        assert!(manifest.projects.is_empty());
        assert!(manifest.categories().is_empty());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PageManifest::sample();

        let toml_path = dir.path().join("page.toml");
        std::fs::write(&toml_path, toml::to_string_pretty(&manifest).unwrap()).unwrap();
        assert_eq!(PageManifest::load(&toml_path).unwrap(), manifest);

        let json_path = dir.path().join("page.json");
        std::fs::write(&json_path, serde_json::to_string(&manifest).unwrap()).unwrap();
        assert_eq!(PageManifest::load(&json_path).unwrap(), manifest);
    }
}
