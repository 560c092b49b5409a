//! Headless specs for filtering, pagination and the counter, driven through
//! a recording renderer.

use std::time::Duration;

use portfolio_gallery::catalog::{Catalog, ALL};
use portfolio_gallery::gallery::{GalleryController, GalleryError, PAGE_SIZE};
use portfolio_gallery::render::{
    GalleryRenderer, PageSlots, ProjectCard, RenderError, COUNTER_CLASS, GALLERY_ID, LOAD_MORE_ID,
};
use speculate2::speculate;

/// Records what the controller writes to each page element.
struct RecordingRenderer {
    slots: PageSlots,
    titles: Vec<String>,
    load_more_visible: Option<bool>,
    counter: String,
    counter_writes: Vec<String>,
}

impl RecordingRenderer {
    fn new() -> Self {
        Self::with_slots(PageSlots::all())
    }

    fn with_slots(slots: PageSlots) -> Self {
        Self {
            slots,
            titles: Vec::new(),
            load_more_visible: None,
            counter: "0".to_string(),
            counter_writes: Vec::new(),
        }
    }
}

impl GalleryRenderer for RecordingRenderer {
    fn replace_cards(&mut self, cards: &[ProjectCard]) -> Result<(), RenderError> {
        if !self.slots.gallery {
            return Err(RenderError::MissingElement(GALLERY_ID));
        }
        self.titles = cards.iter().map(|c| c.title.clone()).collect();
        Ok(())
    }

    fn set_load_more_visible(&mut self, visible: bool) -> Result<(), RenderError> {
        if !self.slots.load_more {
            return Err(RenderError::MissingElement(LOAD_MORE_ID));
        }
        self.load_more_visible = Some(visible);
        Ok(())
    }

    fn counter_text(&self) -> Result<String, RenderError> {
        if !self.slots.counter {
            return Err(RenderError::MissingElement(COUNTER_CLASS));
        }
        Ok(self.counter.clone())
    }

    fn set_counter_text(&mut self, text: &str) -> Result<(), RenderError> {
        if !self.slots.counter {
            return Err(RenderError::MissingElement(COUNTER_CLASS));
        }
        self.counter = text.to_string();
        self.counter_writes.push(text.to_string());
        Ok(())
    }
}

speculate! {
    before {
        let catalog = Catalog::builtin();
    }

    describe "catalog filter" {
        it "returns every record for all" {
            assert_eq!(catalog.filter(ALL).len(), 15);
        }

        it "returns only records carrying the tag, in authored order" {
            for tag in catalog.tags() {
                let matches = catalog.filter(tag);
                assert!(!matches.is_empty());
                assert!(matches.iter().all(|p| p.has_category(tag)));

                let authored: Vec<&str> = catalog
                    .all()
                    .iter()
                    .filter(|p| p.has_category(tag))
                    .map(|p| p.title.as_str())
                    .collect();
                let filtered: Vec<&str> = matches.iter().map(|p| p.title.as_str()).collect();
                assert_eq!(filtered, authored);
            }
        }

        it "returns an empty list for a tag nobody carries" {
            assert!(catalog.filter("backend").is_empty());
        }
    }

    describe "select_filter" {
        it "resets the visible count to one page" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            controller.load_more();
            controller.load_more();
            assert_eq!(controller.state().visible_count(), 3 * PAGE_SIZE);

            controller.select_filter("frontend").expect("known tag");
            assert_eq!(controller.state().visible_count(), PAGE_SIZE);
            assert_eq!(controller.state().active_filter(), "frontend");
        }

        it "shows all six featured projects with no load-more" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            let view = controller.select_filter("featured").expect("known tag");

            assert_eq!(view.cards.len(), 6);
            assert_eq!(view.total, 6);
            assert!(!view.load_more_visible);
            assert_eq!(controller.renderer().titles.len(), 6);
            assert_eq!(controller.renderer().load_more_visible, Some(false));
        }

        it "rejects unknown tags" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            let err = controller.select_filter("games").unwrap_err();
            assert_eq!(err, GalleryError::UnknownFilter("games".to_string()));
            assert_eq!(controller.state().active_filter(), ALL);
        }
    }

    describe "load_more" {
        it "grows the visible count by one page" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            let before = controller.state().visible_count();
            controller.load_more();
            assert_eq!(controller.state().visible_count(), before + PAGE_SIZE);
        }

        it "reveals everything after two extra pages and hides the control" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            controller.select_filter(ALL).expect("all is always valid");
            assert_eq!(controller.renderer().load_more_visible, Some(true));

            let view = controller.load_more();
            assert_eq!(view.cards.len(), 12);
            assert!(view.load_more_visible);

            let view = controller.load_more();
            assert_eq!(view.visible_count, 18);
            assert_eq!(view.cards.len(), 15);
            assert!(!view.load_more_visible);
            assert_eq!(controller.renderer().titles.len(), 15);
            assert_eq!(controller.renderer().load_more_visible, Some(false));
        }

        it "is allowed once everything is shown" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            controller.select_filter("ai").expect("known tag");
            let view = controller.load_more();
            assert_eq!(view.cards.len(), 1);
            assert_eq!(view.visible_count, 2 * PAGE_SIZE);
        }

        it "keeps the visible slice at min(visible_count, matches)" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            for tag in std::iter::once(ALL).chain(catalog.tags()) {
                controller.select_filter(tag).expect("known tag");
                for _ in 0..3 {
                    let view = controller.load_more();
                    assert_eq!(view.cards.len(), view.visible_count.min(view.total));
                    assert!(view.visible_count >= PAGE_SIZE);
                    assert_eq!(view.visible_count % PAGE_SIZE, 0);
                }
            }
        }
    }

    describe "counter" {
        it "animates toward the match count and stops on it" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            controller.advance(Duration::from_millis(600));
            assert_eq!(controller.renderer().counter, "15");

            controller.select_filter("featured").expect("known tag");
            controller.advance(Duration::from_millis(300));
            let midway: i64 = controller.renderer().counter.parse().unwrap();
            assert!(midway > 6 && midway < 15);

            controller.advance(Duration::from_millis(300));
            assert_eq!(controller.renderer().counter, "6");
        }

        it "lets the latest render win when animations overlap" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            controller.advance(Duration::from_millis(300));
            controller.select_filter("ai").expect("known tag");
            controller.settle();
            assert_eq!(controller.renderer().counter, "1");

            let writes = &controller.renderer().counter_writes;
            assert_eq!(writes.last().map(String::as_str), Some("1"));
        }

        it "writes values monotonically toward the target" {
            let mut controller = GalleryController::new(&catalog, RecordingRenderer::new());
            for _ in 0..20 {
                controller.advance(Duration::from_millis(30));
            }
            let values: Vec<i64> = controller
                .renderer()
                .counter_writes
                .iter()
                .map(|v| v.parse().unwrap())
                .collect();
            assert_eq!(values.len(), 20);
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(values.last(), Some(&15));
        }
    }

    describe "missing elements" {
        it "skips everything when the gallery container is missing" {
            let renderer = RecordingRenderer::with_slots(PageSlots {
                gallery: false,
                load_more: true,
                counter: true,
            });
            let mut controller = GalleryController::new(&catalog, renderer);
            let view = controller.load_more();

            assert_eq!(view.cards.len(), 12);
            assert!(view.counter_frames.is_empty());
            assert_eq!(controller.renderer().load_more_visible, None);
            assert!(controller.renderer().titles.is_empty());
        }

        it "still renders cards without a counter or load-more control" {
            let renderer = RecordingRenderer::with_slots(PageSlots {
                gallery: true,
                load_more: false,
                counter: false,
            });
            let mut controller = GalleryController::new(&catalog, renderer);
            controller.select_filter("practice").expect("known tag");
            controller.settle();

            assert_eq!(controller.renderer().titles.len(), 6);
            assert_eq!(controller.renderer().load_more_visible, None);
            assert!(controller.renderer().counter_writes.is_empty());
        }
    }
}
