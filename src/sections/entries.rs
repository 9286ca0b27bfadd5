use super::SectionView;
use crate::content::{Entry, EntrySection};
use crate::view::{Element, Node};

/// Education and experience: one `<article class="entry">` per item, with a
/// header (title, role, period) and an optional bullet list of details.
pub fn render_entries(section: Option<&EntrySection>) -> SectionView {
    let section = section.cloned().unwrap_or_default();
    if section.items.is_empty() {
        return SectionView::placeholder(section.title.as_ref());
    }

    let body = section.items.iter().map(entry).collect();
    SectionView::new(section.title.as_ref(), body)
}

fn entry(item: &Entry) -> Node {
    let mut header = Element::new("div").class("entry-header");
    if let Some(title) = &item.title {
        header = header.child(Element::new("div").class("entry-title").text(title.as_str()));
    }
    if let Some(role) = &item.role {
        header = header.child(Element::new("div").text(role.as_str()));
    }
    if let Some(period) = &item.period {
        header = header.child(Element::new("div").class("entry-meta").text(period.as_str()));
    }

    let mut article = Element::new("article").class("entry").child(header);
    if !item.details.is_empty() {
        let details = item
            .details
            .iter()
            .map(|detail| Node::from(Element::new("li").text(detail.as_str())));
        article = article.child(Element::new("ul").class("detail-list").children(details));
    }
    article.into()
}
