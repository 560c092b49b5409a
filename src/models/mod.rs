//! Domain models for the portfolio gallery.
//!
//! - [`ProjectRecord`]: one authored project, immutable once the catalog is built.
//! - [`Theme`]: the visitor's light/dark preference, the only persisted state.
//! - [`ContactSubmission`]: contact form input, validated before it is forwarded.
//! - [`Notification`]: toast text returned after an action.

mod contact;
mod notification;
mod project;
mod theme;

pub use contact::*;
pub use notification::*;
pub use project::*;
pub use theme::*;
