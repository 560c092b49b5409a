//! Display units for project records.

use serde::Serialize;

use crate::models::ProjectRecord;

const THUMBNAIL_COLORS: [&str; 4] = ["#00E5A8", "#8B5CF6", "#F59E0B", "#EF4444"];

/// Icon shown when a status has no dedicated icon.
pub const FALLBACK_STATUS_ICON: &str = "fa-code";

/// Badge icon for a status string. Unknown statuses get [`FALLBACK_STATUS_ICON`].
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "completed" => "fa-check-circle",
        "in-progress" => "fa-spinner",
        "planned" => "fa-clock",
        _ => FALLBACK_STATUS_ICON,
    }
}

/// First letter of each word, at most three, upper-cased.
pub fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(3)
        .flat_map(char::to_uppercase)
        .collect()
}

fn title_hash(title: &str) -> u32 {
    title
        .bytes()
        .fold(17u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32))
}

/// Placeholder artwork for a card: the title's initials over a gradient frame,
/// as an SVG data URI. The same title always yields the same image.
pub fn thumbnail_uri(title: &str) -> String {
    let hash = title_hash(title) as usize;
    let from = THUMBNAIL_COLORS[hash % THUMBNAIL_COLORS.len()];
    let to = THUMBNAIL_COLORS[(hash / THUMBNAIL_COLORS.len()) % THUMBNAIL_COLORS.len()];
    let text = html_escape::encode_text(&initials(title)).into_owned();

    let svg = format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="250" viewBox="0 0 400 250">"##,
            r##"<defs><linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">"##,
            r##"<stop offset="0%" stop-color="{from}"/><stop offset="100%" stop-color="{to}"/>"##,
            r##"</linearGradient></defs>"##,
            r##"<rect width="400" height="250" fill="#0B1120"/>"##,
            r##"<rect x="10" y="10" width="380" height="230" rx="15" fill="none" stroke="url(#grad)" stroke-width="3"/>"##,
            r##"<circle cx="300" cy="60" r="40" fill="url(#grad)" opacity="0.3"/>"##,
            r##"<circle cx="100" cy="180" r="30" fill="url(#grad)" opacity="0.3"/>"##,
            r##"<text x="50%" y="55%" text-anchor="middle" fill="url(#grad)" font-size="48" font-weight="900" font-family="Work Sans, sans-serif">{text}</text>"##,
            r##"</svg>"##,
        ),
        from = from,
        to = to,
        text = text,
    );

    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg))
}

/// Which outbound link of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Demo,
    Source,
}

/// An outbound link embedded in a card.
///
/// Links contain their clicks: activating one never reaches the card's own
/// click handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub kind: LinkKind,
    pub href: String,
    pub title: &'static str,
    /// Font Awesome classes for the link icon.
    pub icon: &'static str,
}

/// Where a click on a card landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Body,
    Link(LinkKind),
}

/// What a card does in response to a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReaction {
    /// Play the ripple effect on the card.
    Ripple,
    /// Open the link in a new tab. The card itself does nothing.
    Open(String),
}

/// A self-contained display unit for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    /// Space-separated tags, as carried in the card's `data-category`.
    pub categories: String,
    pub technologies: Vec<String>,
    pub power_score: u32,
    pub status: String,
    pub status_icon: &'static str,
    pub thumbnail: String,
    pub links: Vec<CardLink>,
}

impl ProjectCard {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let status = record.status.as_str();
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            categories: record.category_attr(),
            technologies: record.technologies.clone(),
            power_score: record.power_score,
            status: status.to_string(),
            status_icon: status_icon(status),
            thumbnail: thumbnail_uri(&record.title),
            links: vec![
                CardLink {
                    kind: LinkKind::Demo,
                    href: record.demo_url.clone(),
                    title: "Live Demo",
                    icon: "fa-solid fa-eye",
                },
                CardLink {
                    kind: LinkKind::Source,
                    href: record.github_url.clone(),
                    title: "Source Code",
                    icon: "fa-brands fa-github",
                },
            ],
        }
    }

    pub fn link(&self, kind: LinkKind) -> Option<&CardLink> {
        self.links.iter().find(|l| l.kind == kind)
    }

    /// React to a click. Clicks on an embedded link only open the link.
    pub fn click(&self, target: ClickTarget) -> CardReaction {
        match target {
            ClickTarget::Link(kind) => match self.link(kind) {
                Some(link) => CardReaction::Open(link.href.clone()),
                None => CardReaction::Ripple,
            },
            ClickTarget::Body => CardReaction::Ripple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::ProjectStatus;

    #[test]
    fn status_icons_fall_back_for_unknown_values() {
        assert_eq!(status_icon("completed"), "fa-check-circle");
        assert_eq!(status_icon("in-progress"), "fa-spinner");
        assert_eq!(status_icon("planned"), "fa-clock");
        assert_eq!(status_icon("unknown"), FALLBACK_STATUS_ICON);
    }

    #[test]
    fn authored_unknown_status_renders_generic_badge() {
        let mut record = Catalog::builtin().all()[0].clone();
        record.status = ProjectStatus::Other("archived".to_string());
        let card = ProjectCard::from_record(&record);

        assert_eq!(card.status, "archived");
        assert_eq!(card.status_icon, FALLBACK_STATUS_ICON);
    }

    #[test]
    fn initials_take_first_three_words() {
        assert_eq!(initials("Pokedex App"), "PA");
        assert_eq!(initials("ULTRA Todo List"), "UTL");
        assert_eq!(initials("hidden search widget extra"), "HSW");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn thumbnails_are_deterministic_per_title() {
        let a = thumbnail_uri("Nebula Store");
        assert_eq!(a, thumbnail_uri("Nebula Store"));
        assert!(a.starts_with("data:image/svg+xml;utf8,"));
        assert!(a.contains("NS"));
        assert!(!a.contains('<'));
    }

    #[test]
    fn link_clicks_do_not_ripple_the_card() {
        let catalog = Catalog::builtin();
        let card = ProjectCard::from_record(&catalog.all()[0]);

        assert_eq!(card.click(ClickTarget::Body), CardReaction::Ripple);
        assert_eq!(
            card.click(ClickTarget::Link(LinkKind::Source)),
            CardReaction::Open("https://github.com/danidanidani2/Pokedex".to_string())
        );
        assert_eq!(
            card.click(ClickTarget::Link(LinkKind::Demo)),
            CardReaction::Open("https://pokeddex-pokedex.netlify.app/".to_string())
        );
    }
}
