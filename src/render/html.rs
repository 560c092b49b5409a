//! Server-side HTML rendering of the gallery and the page around it.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{
    GalleryRenderer, PageSlots, ProjectCard, RenderError, COUNTER_CLASS, GALLERY_ID, LOAD_MORE_ID,
};
use crate::catalog::ALL;
use crate::models::{Notification, Theme};

/// Markup for one card.
pub fn card_html(card: &ProjectCard) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<article class="project visible" data-category="{}" data-power="{}">"#,
        attr(&card.categories),
        card.power_score
    );
    let _ = write!(
        out,
        r#"<img src="{}" alt="{}" loading="lazy" />"#,
        attr(&card.thumbnail),
        attr(&card.title)
    );
    let _ = write!(
        out,
        r#"<div class="overlay"><h3>{}</h3><p>{}</p>"#,
        text(&card.title),
        text(&card.description)
    );

    out.push_str(r#"<div class="project-meta"><div class="tech-tags">"#);
    for tech in &card.technologies {
        let _ = write!(out, r#"<span class="tech-tag">{}</span>"#, text(tech));
    }
    let _ = write!(
        out,
        r#"</div><div class="power-level"><i class="fa-solid fa-bolt"></i>{}</div></div>"#,
        card.power_score
    );

    // data-contain-click marks links whose clicks must not reach the card
    out.push_str(r#"<div class="project-links">"#);
    for link in &card.links {
        let _ = write!(
            out,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" title="{}" data-contain-click><i class="{}"></i></a>"#,
            attr(&link.href),
            link.title,
            link.icon
        );
    }
    out.push_str("</div></div>");

    let _ = write!(
        out,
        r#"<div class="project-badge {}"><i class="fa-solid {}"></i>{}</div></article>"#,
        attr(&card.status),
        card.status_icon,
        text(&card.status)
    );
    out
}

/// A [`GalleryRenderer`] that accumulates HTML fragments.
#[derive(Debug, Clone)]
pub struct HtmlGallery {
    slots: PageSlots,
    cards: String,
    card_count: usize,
    load_more_visible: bool,
    counter: String,
}

impl HtmlGallery {
    pub fn new() -> Self {
        Self::with_slots(PageSlots::all())
    }

    pub fn with_slots(slots: PageSlots) -> Self {
        Self {
            slots,
            cards: String::new(),
            card_count: 0,
            load_more_visible: false,
            counter: "0".to_string(),
        }
    }

    pub fn cards_html(&self) -> &str {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }
}

impl Default for HtmlGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryRenderer for HtmlGallery {
    fn replace_cards(&mut self, cards: &[ProjectCard]) -> Result<(), RenderError> {
        PageSlots::require(self.slots.gallery, GALLERY_ID)?;
        self.cards = cards.iter().map(card_html).collect();
        self.card_count = cards.len();
        Ok(())
    }

    fn set_load_more_visible(&mut self, visible: bool) -> Result<(), RenderError> {
        PageSlots::require(self.slots.load_more, LOAD_MORE_ID)?;
        self.load_more_visible = visible;
        Ok(())
    }

    fn counter_text(&self) -> Result<String, RenderError> {
        PageSlots::require(self.slots.counter, COUNTER_CLASS)?;
        Ok(self.counter.clone())
    }

    fn set_counter_text(&mut self, text: &str) -> Result<(), RenderError> {
        PageSlots::require(self.slots.counter, COUNTER_CLASS)?;
        self.counter = text.to_string();
        Ok(())
    }
}

/// Everything around the gallery that the page needs.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub theme: Theme,
    /// Filter tags offered as buttons, without the `all` sentinel.
    pub tags: Vec<&'a str>,
    pub active_filter: &'a str,
    /// Page the load-more link should request next.
    pub next_page: u32,
    pub notification: Option<Notification>,
}

fn page_link(filter: &str, page: u32) -> String {
    if page <= 1 {
        format!("/?filter={}", urlencoding::encode(filter))
    } else {
        format!("/?filter={}&page={}", urlencoding::encode(filter), page)
    }
}

/// Render the whole portfolio page around a rendered gallery.
pub fn render_page(ctx: &PageContext<'_>, gallery: &HtmlGallery) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\" />\n<title>Portfolio</title>\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    out.push_str("</head>\n");
    let _ = writeln!(out, r#"<body class="{}">"#, ctx.theme.body_class());

    let _ = writeln!(
        out,
        r#"<form method="post" action="/theme/toggle"><button id="themeToggle" type="submit" data-theme="{}">Toggle theme</button></form>"#,
        ctx.theme.as_str()
    );

    if let Some(notification) = &ctx.notification {
        let _ = writeln!(
            out,
            r#"<div class="cosmic-notification {}" style="background:{}">{}</div>"#,
            notification.kind.as_str(),
            notification.kind.color(),
            text(&notification.message)
        );
    }

    out.push_str("<section id=\"projects\">\n<div class=\"cosmic-filters\">\n");
    for tag in std::iter::once(ALL).chain(ctx.tags.iter().copied()) {
        let active = if tag == ctx.active_filter { " active" } else { "" };
        let _ = writeln!(
            out,
            r#"<a class="cosmic-filter{}" data-filter="{}" href="{}">{}</a>"#,
            active,
            attr(tag),
            attr(&page_link(tag, 1)),
            text(tag)
        );
    }
    out.push_str("</div>\n");

    let _ = writeln!(
        out,
        r#"<div class="projects-counter"><span class="{}">{}</span> projects</div>"#,
        COUNTER_CLASS,
        text(&gallery.counter)
    );
    let _ = writeln!(
        out,
        r#"<div id="{}" class="cosmic-grid">{}</div>"#,
        GALLERY_ID, gallery.cards
    );

    let display = if gallery.load_more_visible {
        "inline-flex"
    } else {
        "none"
    };
    let _ = writeln!(
        out,
        r#"<a id="{}" class="cosmic-btn" style="display:{}" href="{}">Load more</a>"#,
        LOAD_MORE_ID,
        display,
        attr(&page_link(ctx.active_filter, ctx.next_page))
    );
    out.push_str("</section>\n");

    out.push_str(CONTACT_FORM);
    out.push_str("</body>\n</html>\n");
    out
}

const CONTACT_FORM: &str = r#"<section id="contact">
<form id="contactForm" method="post" action="/contact">
<div class="form-group"><input type="text" name="name" required /></div>
<div class="form-group"><input type="email" name="email" required /></div>
<div class="form-group"><input type="text" name="subject" /></div>
<div class="form-group"><textarea name="message" required></textarea></div>
<button type="submit" class="cosmic-submit">Send Message</button>
</form>
</section>
"#;
