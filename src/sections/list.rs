use super::{SectionView, EMPTY_PLACEHOLDER};
use crate::content::{ListItem, ListSection};
use crate::view::{Element, Node};

/// A `simple-list` of items. An empty list still renders, holding a single
/// placeholder item.
pub fn render_list(section: Option<&ListSection>) -> SectionView {
    let section = section.cloned().unwrap_or_default();
    let mut list = Element::new("ul").class("simple-list");

    if section.items.is_empty() {
        list = list.child(Element::new("li").class("placeholder").text(EMPTY_PLACEHOLDER));
    } else {
        list = list.children(section.items.iter().map(list_item));
    }

    SectionView::new(section.title.as_ref(), vec![list.into()])
}

fn list_item(item: &ListItem) -> Node {
    let li = Element::new("li");
    let li = match item {
        ListItem::Text(text) => li.text(text.as_str()),
        ListItem::Markup(markup) => li.child(Node::Markup(markup.clone())),
        ListItem::Empty => li,
    };
    li.into()
}
