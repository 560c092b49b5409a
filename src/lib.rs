//! Portfolio project gallery.
//!
//! A fixed [`catalog`] of projects is filtered and paginated by a
//! [`gallery::GalleryController`], which pushes display units to a
//! [`render::GalleryRenderer`]. The [`api`] module serves the page and a JSON
//! API over HTTP; [`db`] keeps the visitor's theme preference.

pub mod api;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod counter;
pub mod db;
pub mod gallery;
pub mod models;
pub mod render;
pub mod schedule;
