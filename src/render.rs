//! Render orchestrator: one full pass of a content document onto the host.

use crate::content::{ContentDocument, Meta};
use crate::i18n::Locale;
use crate::sections::{
    render_about, render_contact, render_entries, render_list, render_publications,
    render_upcoming, SectionView,
};
use crate::view::{HostDocument, SectionKey, Slot};
use tracing::debug;

/// Render every section of `document` for `locale`, in a fixed order.
///
/// Meta fields only overwrite the page when present. Each touched region is
/// cleared and rebuilt in full; regions the host lacks are skipped.
pub fn render(document: &ContentDocument, locale: Locale, view: &mut dyn HostDocument) {
    update_meta(document.meta.as_ref(), locale, view);

    for key in SectionKey::ALL {
        let section = render_section(document, key);
        apply(view, key, &section);
    }

    debug!("Render pass complete for {}", locale);
}

/// Run the renderer bound to `key` against its slice of the document.
pub fn render_section(document: &ContentDocument, key: SectionKey) -> SectionView {
    match key {
        SectionKey::Upcoming => render_upcoming(document.upcoming.as_ref()),
        SectionKey::About => render_about(document.about.as_ref()),
        SectionKey::Interests => render_list(document.interests.as_ref()),
        SectionKey::Education => render_entries(document.education.as_ref()),
        SectionKey::Experience => render_entries(document.experience.as_ref()),
        SectionKey::Publications => render_publications(document.publications.as_ref()),
        SectionKey::Contact => render_contact(document.contact.as_ref()),
    }
}

fn update_meta(meta: Option<&Meta>, locale: Locale, view: &mut dyn HostDocument) {
    let meta = meta.cloned().unwrap_or_default();

    view.set_language(meta.lang_attr.as_deref().unwrap_or(locale.code()));

    if let Some(title) = &meta.page_title {
        view.set_page_title(title);
        view.set_slot_text(Slot::SiteTitle, title);
    }
    if let Some(tagline) = &meta.tagline {
        view.set_slot_text(Slot::Subtitle, tagline);
    }
    if let Some(role) = &meta.role {
        view.set_slot_text(Slot::Eyebrow, role);
    }
    if let Some(note) = &meta.footer_note {
        view.set_slot_text(Slot::FooterNote, note);
    }
}

fn apply(view: &mut dyn HostDocument, key: SectionKey, section: &SectionView) {
    if let Some(title) = &section.title {
        view.set_section_title(key, title);
    }
    let Some(region) = view.region(key) else {
        debug!("No region for section {}, skipping", key);
        return;
    };
    region.clear();
    for node in &section.body {
        region.append(node.clone());
    }
}
