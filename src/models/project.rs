use serde::{Deserialize, Deserializer, Serialize};

/// One project shown in the portfolio gallery.
///
/// Records are authored once and never change after the catalog is built.
/// A record can carry several category tags and matches every filter named
/// by one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    /// Category tags. Authored as a space-separated string (`"featured frontend"`)
    /// or as a list; duplicates are dropped, first occurrence wins.
    #[serde(deserialize_with = "deserialize_categories")]
    pub categories: Vec<String>,
    /// Technologies in display order.
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    /// Display-only score shown next to the bolt icon.
    pub power_score: u32,
    pub github_url: String,
    pub demo_url: String,
}

impl ProjectRecord {
    /// Whether this record carries `tag`.
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// Categories joined back into the authored space-separated form.
    pub fn category_attr(&self) -> String {
        self.categories.join(" ")
    }
}

/// Split a space-separated tag string into unique tags, keeping first-seen order.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split_whitespace() {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Joined(s) => parse_categories(&s),
        Raw::List(list) => parse_categories(&list.join(" ")),
    })
}

/// Delivery status of a project.
///
/// - `Completed`: Shipped and linked to a live demo
/// - `InProgress`: Under active development
/// - `Planned`: Announced but not started
/// - `Other`: Any other authored value, kept verbatim and shown with the
///   generic badge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    #[serde(untagged)]
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
            Self::Other(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "in-progress" => Some(Self::InProgress),
            "planned" => Some(Self::Planned),
            _ => None,
        }
    }
}
