use super::SectionView;
use crate::content::ParagraphSection;
use crate::view::{Element, Node};

/// One `<p>` per text block; nothing at all for an empty section.
pub fn render_about(section: Option<&ParagraphSection>) -> SectionView {
    let section = section.cloned().unwrap_or_default();
    let body = section
        .body
        .iter()
        .map(|text| Node::from(Element::new("p").text(text.as_str())))
        .collect();
    SectionView::new(section.title.as_ref(), body)
}
