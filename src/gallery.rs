//! Filtering and "load more" pagination over the catalog.
//!
//! # State
//!
//! A [`GalleryController`] owns one [`FilterState`]: the active filter and how
//! many matching projects are revealed. Two actions change it:
//!
//! - [`GalleryController::select_filter`] switches the filter and resets the
//!   revealed count to one page.
//! - [`GalleryController::load_more`] reveals one more page.
//!
//! Both re-render synchronously. The revealed count never drops below
//! [`PAGE_SIZE`] and only grows in steps of it.
//!
//! # Rendering
//!
//! Each render writes the visible slice to the renderer, shows the load-more
//! control only while matches remain hidden, and starts the counter animation
//! toward the number of matches. Counter frames are released by
//! [`GalleryController::advance`] or [`GalleryController::settle`].

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, ALL};
use crate::counter::{parse_displayed, CounterFrame, CounterUpdater};
use crate::render::{GalleryRenderer, ProjectCard, RenderError};

/// Number of projects revealed per page.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

/// The active filter and how many of its matches are revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    active_filter: String,
    visible_count: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            active_filter: ALL.to_string(),
            visible_count: PAGE_SIZE,
        }
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Pages revealed so far, counting the first.
    pub fn pages(&self) -> usize {
        self.visible_count / PAGE_SIZE
    }

    fn select(&mut self, tag: &str) {
        self.active_filter = tag.to_string();
        self.visible_count = PAGE_SIZE;
    }

    fn grow(&mut self) {
        self.visible_count += PAGE_SIZE;
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of one render.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub filter: String,
    pub visible_count: usize,
    /// Number of projects matching the filter.
    pub total: usize,
    pub cards: Vec<ProjectCard>,
    pub load_more_visible: bool,
    /// Counter frames queued by this render.
    pub counter_frames: Vec<CounterFrame>,
}

/// Owns the filter state and drives a renderer.
#[derive(Debug)]
pub struct GalleryController<'a, R: GalleryRenderer> {
    catalog: &'a Catalog,
    state: FilterState,
    renderer: R,
    counter: CounterUpdater,
}

impl<'a, R: GalleryRenderer> GalleryController<'a, R> {
    /// Create a controller showing the first page of every project.
    pub fn new(catalog: &'a Catalog, renderer: R) -> Self {
        let mut controller = Self {
            catalog,
            state: FilterState::new(),
            renderer,
            counter: CounterUpdater::default(),
        };
        controller.render();
        controller
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Switch to `tag` and show its first page.
    ///
    /// `tag` must be `"all"` or a tag carried by some project; anything else
    /// is rejected and the state is left as it was.
    pub fn select_filter(&mut self, tag: &str) -> Result<GalleryView, GalleryError> {
        if !self.catalog.contains_tag(tag) {
            tracing::warn!("Ignoring unknown filter {:?}", tag);
            return Err(GalleryError::UnknownFilter(tag.to_string()));
        }
        self.state.select(tag);
        Ok(self.render())
    }

    /// Reveal one more page of the current filter.
    pub fn load_more(&mut self) -> GalleryView {
        self.state.grow();
        self.render()
    }

    /// Recompute the visible slice and push it to the renderer.
    pub fn render(&mut self) -> GalleryView {
        let matches = self.catalog.filter(self.state.active_filter());
        let total = matches.len();
        let shown = self.state.visible_count().min(total);
        let cards: Vec<ProjectCard> = matches[..shown]
            .iter()
            .map(|p| ProjectCard::from_record(p))
            .collect();
        let load_more_visible = total > self.state.visible_count();

        tracing::debug!(
            "Showing {} of {} projects for filter {:?}",
            shown,
            total,
            self.state.active_filter()
        );

        let mut view = GalleryView {
            filter: self.state.active_filter().to_string(),
            visible_count: self.state.visible_count(),
            total,
            cards,
            load_more_visible,
            counter_frames: Vec::new(),
        };

        if let Err(e) = self.renderer.replace_cards(&view.cards) {
            tracing::warn!("Skipping gallery render: {}", e);
            return view;
        }

        skip_missing(self.renderer.set_load_more_visible(load_more_visible));

        if let Some(start) = skip_missing(self.renderer.counter_text()) {
            view.counter_frames = self
                .counter
                .animate(parse_displayed(&start), total as i64);
        }

        view
    }

    /// Move the animation clock forward, applying any counter frame now due.
    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(value) = self.counter.advance(elapsed) {
            skip_missing(self.renderer.set_counter_text(&value.to_string()));
        }
    }

    /// Finish any running animation immediately.
    pub fn settle(&mut self) {
        if let Some(value) = self.counter.finish() {
            skip_missing(self.renderer.set_counter_text(&value.to_string()));
        }
    }
}

fn skip_missing<T>(result: Result<T, RenderError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Skipping render step: {}", e);
            None
        }
    }
}
