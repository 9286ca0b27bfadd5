use super::SectionView;
use crate::content::{TimelineEntry, TimelineSection};
use crate::view::{Element, Node};

const PRIMARY_SEPARATOR: &str = " / ";
const SECONDARY_SEPARATOR: &str = " · ";

pub fn render_upcoming(section: Option<&TimelineSection>) -> SectionView {
    let section = section.cloned().unwrap_or_default();
    if section.items.is_empty() {
        return SectionView::placeholder(section.title.as_ref());
    }

    let list = Element::new("ul")
        .class("upcoming-list")
        .children(section.items.iter().map(timeline_item));
    SectionView::new(section.title.as_ref(), vec![list.into()])
}

fn timeline_item(entry: &TimelineEntry) -> Node {
    let mut li = Element::new("li").class("upcoming-item");

    if let Some(primary) = join_present(&[&entry.period, &entry.name], PRIMARY_SEPARATOR) {
        li = li.child(Element::new("div").class("upcoming-line").text(primary));
    }
    if let Some(secondary) = join_present(&[&entry.role, &entry.location], SECONDARY_SEPARATOR) {
        li = li.child(Element::new("div").class("upcoming-meta").text(secondary));
    }

    li.into()
}

/// Join the present parts; `None` when no part contributes text.
fn join_present(parts: &[&Option<String>], separator: &str) -> Option<String> {
    let present: Vec<&str> = parts.iter().filter_map(|part| part.as_deref()).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}
