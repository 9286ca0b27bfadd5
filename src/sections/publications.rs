use super::SectionView;
use crate::content::{Publication, PublicationSection, YearGroup};
use crate::view::{external_link, Element, Node};

/// Publications grouped by year as `<details>` blocks. Only the first group
/// is expanded, however many items any group holds.
pub fn render_publications(section: Option<&PublicationSection>) -> SectionView {
    let section = section.cloned().unwrap_or_default();
    if section.years.is_empty() {
        return SectionView::placeholder(section.title.as_ref());
    }

    let body = section
        .years
        .iter()
        .enumerate()
        .map(|(index, group)| year_group(group, index == 0))
        .collect();
    SectionView::new(section.title.as_ref(), body)
}

fn year_group(group: &YearGroup, expanded: bool) -> Node {
    let mut details = Element::new("details");
    if expanded {
        details = details.flag("open");
    }

    let summary = Element::new("summary").text(group.year.clone().unwrap_or_default());
    let list = Element::new("ul")
        .class("publication-list")
        .children(group.items.iter().map(publication));

    Element::new("div")
        .class("publication-year")
        .child(details.child(summary).child(list))
        .into()
}

fn publication(item: &Publication) -> Node {
    let mut li = Element::new("li");
    if let Some(title) = &item.title {
        li = li.child(Element::new("div").class("entry-title").text(title.as_str()));
    }
    if let Some(authors) = &item.authors {
        li = li.child(Element::new("div").class("entry-meta").text(authors.as_str()));
    }
    if let Some(venue) = &item.venue {
        li = li.child(Element::new("div").text(venue.as_str()));
    }

    // Wrapper whenever links are listed; links without a url are skipped.
    if !item.links.is_empty() {
        let links = item.links.iter().filter_map(|link| {
            let url = link.url.as_deref()?;
            Some(Node::from(external_link(url, link.label.as_deref())))
        });
        li = li.child(Element::new("div").class("publication-links").children(links));
    }

    li.into()
}
