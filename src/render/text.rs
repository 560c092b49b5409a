//! Plain-text rendering of the gallery for terminals.

use super::{GalleryRenderer, LinkKind, ProjectCard, RenderError};

const COMPLETED: char = '●';
const IN_PROGRESS: char = '○';
const PLANNED: char = '◇';
const UNKNOWN: char = '•';

/// Status symbol for a status string.
fn status_symbol(status: &str) -> char {
    match status {
        "completed" => COMPLETED,
        "in-progress" => IN_PROGRESS,
        "planned" => PLANNED,
        _ => UNKNOWN,
    }
}

/// Render one card as a short block.
///
/// Example output:
/// ```text
/// ● Pokedex App  ⚡88
/// │ Interactive Pokemon database with search and filters
/// │ [featured frontend] HTML, CSS, JavaScript, API
/// └ demo: https://pokeddex-pokedex.netlify.app/  source: https://github.com/danidanidani2/Pokedex
/// ```
pub fn render_card(card: &ProjectCard) -> String {
    let mut output = String::new();
    output.push(status_symbol(&card.status));
    output.push(' ');
    output.push_str(&card.title);
    output.push_str(&format!("  ⚡{}\n", card.power_score));
    output.push_str(&format!("│ {}\n", card.description));
    output.push_str(&format!(
        "│ [{}] {}\n",
        card.categories,
        card.technologies.join(", ")
    ));

    let links: Vec<String> = card
        .links
        .iter()
        .map(|l| {
            let label = match l.kind {
                LinkKind::Demo => "demo",
                LinkKind::Source => "source",
            };
            format!("{}: {}", label, l.href)
        })
        .collect();
    output.push_str(&format!("└ {}\n", links.join("  ")));
    output
}

/// A [`GalleryRenderer`] that writes cards as text blocks.
///
/// Every element is always present.
#[derive(Debug, Clone, Default)]
pub struct TextGallery {
    cards: Vec<String>,
    load_more_visible: bool,
    counter: String,
}

impl TextGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered gallery: counter line, cards, then the load-more hint.
    pub fn output(&self) -> String {
        let counter = if self.counter.is_empty() {
            "0"
        } else {
            &self.counter
        };
        let mut output = format!("{} projects\n\n", counter);
        for card in &self.cards {
            output.push_str(card);
            output.push('\n');
        }
        if self.load_more_visible {
            output.push_str("… more projects available (--pages)\n");
        }
        output
    }
}

impl GalleryRenderer for TextGallery {
    fn replace_cards(&mut self, cards: &[ProjectCard]) -> Result<(), RenderError> {
        self.cards = cards.iter().map(render_card).collect();
        Ok(())
    }

    fn set_load_more_visible(&mut self, visible: bool) -> Result<(), RenderError> {
        self.load_more_visible = visible;
        Ok(())
    }

    fn counter_text(&self) -> Result<String, RenderError> {
        Ok(self.counter.clone())
    }

    fn set_counter_text(&mut self, text: &str) -> Result<(), RenderError> {
        self.counter = text.to_string();
        Ok(())
    }
}
