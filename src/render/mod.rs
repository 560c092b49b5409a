//! Rendering adapters for the gallery.
//!
//! The controller never builds markup itself. It hands display units to a
//! [`GalleryRenderer`], which owns the three page elements the gallery
//! touches: the card container, the load-more control and the counter label.
//! Any of them may be missing from the host page.

mod card;
mod html;
mod text;

pub use card::*;
pub use html::*;
pub use text::*;

use thiserror::Error;

/// Id of the card container.
pub const GALLERY_ID: &str = "gallery";
/// Id of the "load more" button.
pub const LOAD_MORE_ID: &str = "load-more";
/// Class of the counter label.
pub const COUNTER_CLASS: &str = "counter-number";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Element not found: {0}")]
    MissingElement(&'static str),
}

/// Page elements the gallery writes to.
pub trait GalleryRenderer {
    /// Replace the container's contents with `cards`, in order.
    fn replace_cards(&mut self, cards: &[ProjectCard]) -> Result<(), RenderError>;

    /// Show or hide the load-more control.
    fn set_load_more_visible(&mut self, visible: bool) -> Result<(), RenderError>;

    /// Text the counter label currently shows.
    fn counter_text(&self) -> Result<String, RenderError>;

    fn set_counter_text(&mut self, text: &str) -> Result<(), RenderError>;
}

/// Which of the gallery's elements the host page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlots {
    pub gallery: bool,
    pub load_more: bool,
    pub counter: bool,
}

impl PageSlots {
    pub fn all() -> Self {
        Self {
            gallery: true,
            load_more: true,
            counter: true,
        }
    }

    pub(crate) fn require(present: bool, element: &'static str) -> Result<(), RenderError> {
        if present {
            Ok(())
        } else {
            Err(RenderError::MissingElement(element))
        }
    }
}

impl Default for PageSlots {
    fn default() -> Self {
        Self::all()
    }
}
