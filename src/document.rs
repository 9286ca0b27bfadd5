//! In-memory host document.
//!
//! Stands in for a live page: the binaries render into it and print the
//! result, and the tests inspect it region by region.

use crate::view::{HostDocument, Node, Region, SectionKey, Slot};
use askama::Template;
use std::collections::{BTreeMap, HashMap};

/// Page shell. Section bodies are already serialized by the view layer and
/// are the only values inserted unescaped.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    lang: Option<&'a str>,
    page_title: &'a str,
    eyebrow: &'a str,
    site_title: &'a str,
    subtitle: &'a str,
    toggle: Option<&'a ToggleState>,
    error: Option<&'a str>,
    sections: Vec<PageSection<'a>>,
    footer_note: &'a str,
}

struct PageSection<'a> {
    key: SectionKey,
    title: Option<&'a str>,
    body: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRegion {
    children: Vec<Node>,
}

impl MemoryRegion {
    pub fn to_html(&self) -> String {
        self.children.iter().map(Node::to_html).collect()
    }
}

impl Region for MemoryRegion {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// The toggle control's current label pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub label: String,
    pub accessible_label: String,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    language: Option<String>,
    declared_language: Option<String>,
    page_title: Option<String>,
    slots: HashMap<Slot, String>,
    section_titles: BTreeMap<SectionKey, String>,
    regions: BTreeMap<SectionKey, MemoryRegion>,
    toggle: Option<ToggleState>,
    error: Option<String>,
    mutations: usize,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::with_regions(&SectionKey::ALL)
    }
}

impl MemoryDocument {
    /// A document with every section region and a toggle.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that only has the given section regions.
    pub fn with_regions(keys: &[SectionKey]) -> Self {
        Self {
            language: None,
            declared_language: None,
            page_title: None,
            slots: HashMap::new(),
            section_titles: BTreeMap::new(),
            regions: keys.iter().map(|key| (*key, MemoryRegion::default())).collect(),
            toggle: Some(ToggleState::default()),
            error: None,
            mutations: 0,
        }
    }

    /// Set the language the page declared before any script ran.
    pub fn declaring(mut self, tag: &str) -> Self {
        self.declared_language = Some(tag.to_string());
        self.language = Some(tag.to_string());
        self
    }

    /// Drop the toggle control.
    pub fn without_toggle(mut self) -> Self {
        self.toggle = None;
        self
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn page_title(&self) -> Option<&str> {
        self.page_title.as_deref()
    }

    pub fn slot(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn section_title(&self, key: SectionKey) -> Option<&str> {
        self.section_titles.get(&key).map(String::as_str)
    }

    pub fn region_html(&self, key: SectionKey) -> Option<String> {
        self.regions.get(&key).map(MemoryRegion::to_html)
    }

    pub fn toggle(&self) -> Option<&ToggleState> {
        self.toggle.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of mutating calls received so far.
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        let page = PageTemplate {
            lang: self.language.as_deref(),
            page_title: self.page_title.as_deref().unwrap_or_default(),
            eyebrow: self.slot(Slot::Eyebrow).unwrap_or_default(),
            site_title: self.slot(Slot::SiteTitle).unwrap_or_default(),
            subtitle: self.slot(Slot::Subtitle).unwrap_or_default(),
            toggle: self.toggle.as_ref(),
            error: self.error.as_deref(),
            sections: self
                .regions
                .iter()
                .map(|(key, region)| PageSection {
                    key: *key,
                    title: self.section_title(*key),
                    body: region.to_html(),
                })
                .collect(),
            footer_note: self.slot(Slot::FooterNote).unwrap_or_default(),
        };
        page.render().unwrap_or_else(|e| format!("Template error: {}", e))
    }
}

impl HostDocument for MemoryDocument {
    fn region(&mut self, key: SectionKey) -> Option<&mut dyn Region> {
        let region = self.regions.get_mut(&key)?;
        self.mutations += 1;
        Some(region as &mut dyn Region)
    }

    fn set_section_title(&mut self, key: SectionKey, text: &str) {
        // Headings live inside the content area too.
        if self.error.is_some() {
            return;
        }
        self.mutations += 1;
        self.section_titles.insert(key, text.to_string());
    }

    fn set_slot_text(&mut self, slot: Slot, text: &str) {
        self.mutations += 1;
        self.slots.insert(slot, text.to_string());
    }

    fn set_page_title(&mut self, text: &str) {
        self.mutations += 1;
        self.page_title = Some(text.to_string());
    }

    fn set_language(&mut self, tag: &str) {
        self.mutations += 1;
        self.language = Some(tag.to_string());
    }

    fn declared_language(&self) -> Option<String> {
        self.declared_language.clone()
    }

    fn set_toggle(&mut self, label: &str, accessible_label: &str) {
        if let Some(toggle) = self.toggle.as_mut() {
            self.mutations += 1;
            toggle.label = label.to_string();
            toggle.accessible_label = accessible_label.to_string();
        }
    }

    fn show_error(&mut self, message: &str) {
        self.mutations += 1;
        // The message replaces the content area, regions included.
        self.regions.clear();
        self.section_titles.clear();
        self.error = Some(message.to_string());
    }
}
