//! Section renderers.
//!
//! Each renderer is a pure function from (possibly absent) section data to a
//! `SectionView`: the optional heading override plus the nodes that replace
//! the region's children. Absent data renders exactly like an empty section.

mod about;
mod contact;
mod entries;
mod list;
mod publications;
mod upcoming;

pub use about::render_about;
pub use contact::render_contact;
pub use entries::render_entries;
pub use list::render_list;
pub use publications::render_publications;
pub use upcoming::render_upcoming;

use crate::view::Node;

/// Literal shown in a region whose section has nothing to list.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// What one renderer produces for its region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionView {
    /// Replaces the static heading when present.
    pub title: Option<String>,
    pub body: Vec<Node>,
}

impl SectionView {
    fn new(title: Option<&String>, body: Vec<Node>) -> Self {
        Self {
            title: title.cloned(),
            body,
        }
    }

    /// A region showing only the bare placeholder text.
    fn placeholder(title: Option<&String>) -> Self {
        Self::new(title, vec![Node::text(EMPTY_PLACEHOLDER)])
    }

    /// Serialized body, as the region would hold it.
    pub fn to_html(&self) -> String {
        self.body.iter().map(Node::to_html).collect()
    }
}
