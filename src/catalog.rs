//! The fixed list of portfolio projects.

use std::path::Path;

use thiserror::Error;

use crate::models::{parse_categories, ProjectRecord, ProjectStatus};

/// Sentinel filter matching every record.
pub const ALL: &str = "all";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only store of project records in authored order.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// The projects authored for the page.
    pub fn builtin() -> Self {
        Self::new(builtin_projects())
    }

    /// Load a catalog from a JSON array of records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let projects: Vec<ProjectRecord> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} projects from {}",
            projects.len(),
            path.as_ref().display()
        );
        Ok(Self::new(projects))
    }

    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Records carrying `tag`, in authored order. `"all"` returns everything.
    pub fn filter(&self, tag: &str) -> Vec<&ProjectRecord> {
        if tag == ALL {
            return self.projects.iter().collect();
        }
        self.projects.iter().filter(|p| p.has_category(tag)).collect()
    }

    /// Every tag used by at least one record, in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.projects.iter().flat_map(|p| p.categories.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Whether `tag` is a valid filter: `"all"` or a tag some record carries.
    pub fn contains_tag(&self, tag: &str) -> bool {
        tag == ALL || self.projects.iter().any(|p| p.has_category(tag))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn project(
    title: &str,
    description: &str,
    categories: &str,
    technologies: &[&str],
    power_score: u32,
    github_url: &str,
    demo_url: &str,
) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        description: description.to_string(),
        categories: parse_categories(categories),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        status: ProjectStatus::Completed,
        power_score,
        github_url: github_url.to_string(),
        demo_url: demo_url.to_string(),
    }
}

const WEB: &[&str] = &["HTML", "CSS", "JavaScript"];
const WEB_API: &[&str] = &["HTML", "CSS", "JavaScript", "API"];

fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "Pokedex App",
            "Interactive Pokemon database with search and filters",
            "featured frontend",
            WEB_API,
            88,
            "https://github.com/danidanidani2/Pokedex",
            "https://pokeddex-pokedex.netlify.app/",
        ),
        project(
            "Password Generator",
            "Secure password generator with customization",
            "frontend practice",
            WEB,
            82,
            "https://github.com/danidanidani2/Password-generator",
            "https://glistening-pithivier-6ba3b9.netlify.app/",
        ),
        project(
            "Movie Database",
            "Movie search app with TMDB API integration",
            "featured frontend",
            WEB_API,
            86,
            "https://github.com/danidanidani2/Movie-App",
            "https://moviie-appp.netlify.app/",
        ),
        project(
            "Drink Water Tracker",
            "Hydration tracking application with goals",
            "frontend practice",
            WEB,
            79,
            "https://github.com/danidanidani2/Drink-Water",
            "http://drinkwat.netlify.app/",
        ),
        project(
            "Weather Application",
            "Real-time weather forecast with location",
            "featured frontend",
            WEB_API,
            84,
            "https://github.com/danidanidani2/weather-website",
            "https://weather-webbsite.netlify.app/",
        ),
        project(
            "Task Manager Pro",
            "Advanced task management with categories",
            "featured frontend",
            WEB,
            87,
            "https://github.com/danidanidani2/Tasks-Manager",
            "https://tasks-mana.netlify.app/",
        ),
        project(
            "Cosmic Analytics",
            "Dashboard with analytics and charts",
            "featured frontend ai",
            WEB,
            89,
            "https://github.com/danidanidani2/Cosmic-Analytics",
            "https://cosmic-analytics.netlify.app/",
        ),
        project(
            "Nebula Store",
            "E-commerce platform with shopping cart",
            "frontend",
            WEB,
            85,
            "https://github.com/danidanidani2/NebulaStore",
            "https://onlineeshoppingg.netlify.app/",
        ),
        project(
            "Split Landing",
            "Interactive split-screen landing page",
            "frontend practice",
            WEB,
            81,
            "https://github.com/danidanidani2/split-landing",
            "https://daniswebsite.netlify.app/",
        ),
        project(
            "Quantum Loading",
            "Collection of modern loading animations",
            "frontend practice",
            WEB,
            78,
            "https://github.com/danidanidani2/Quantum-Loading",
            "https://quantum-loading.netlify.app/",
        ),
        project(
            "Payment Roll System",
            "Animated payment receipt interface",
            "frontend",
            WEB,
            83,
            "https://github.com/danidanidani2/Payment-roll",
            "https://snazzy-pastelito-904c3a.netlify.app/",
        ),
        project(
            "ULTRA Todo List",
            "Advanced todo app with Dragon Ball Z theme",
            "featured frontend",
            WEB,
            90,
            "https://github.com/danidanidani2/To-Do-Lists-ULTRA-SAYAYIN",
            "https://glistening-pithivier-6ba3b9.netlify.app/",
        ),
        project(
            "Expanding Cards",
            "Interactive card expansion interface",
            "frontend practice",
            WEB,
            80,
            "https://github.com/danidanidani2/Expanding-cards",
            "https://expading-cardss.netlify.app/",
        ),
        project(
            "Progress Steps",
            "Multi-step progress indicator",
            "frontend practice",
            WEB,
            77,
            "https://github.com/danidanidani2/Progress-Steps",
            "https://glistening-pithivier-6ba3b9.netlify.app/",
        ),
        project(
            "Hidden Search Widget",
            "Animated search bar with expand effect",
            "frontend practice",
            WEB,
            76,
            "https://github.com/danidanidani2/Hidden-Search",
            "https://glistening-pithivier-6ba3b9.netlify.app/",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_fifteen_projects_six_featured() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.filter("featured").len(), 6);
    }

    #[test]
    fn tags_are_listed_in_first_seen_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tags(), vec!["featured", "frontend", "practice", "ai"]);
    }

    #[test]
    fn contains_tag_accepts_all_and_known_tags_only() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains_tag(ALL));
        assert!(catalog.contains_tag("ai"));
        assert!(!catalog.contains_tag("backend"));
        assert!(!catalog.contains_tag(""));
    }
}
