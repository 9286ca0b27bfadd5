//! Content schema for one locale's profile document.
//!
//! Documents are validated and defaulted here, at the fetch boundary: every
//! field is optional, fields of the wrong JSON type read as absent, empty
//! strings read as absent, and sequence elements of the wrong shape become
//! empty shells. Only malformed JSON is an error. Renderers can therefore
//! trust the shape they are handed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The full localized payload for one locale. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    #[serde(deserialize_with = "de::object")]
    pub meta: Option<Meta>,
    #[serde(deserialize_with = "de::object")]
    pub upcoming: Option<TimelineSection>,
    #[serde(deserialize_with = "de::object")]
    pub about: Option<ParagraphSection>,
    #[serde(deserialize_with = "de::object")]
    pub interests: Option<ListSection>,
    #[serde(deserialize_with = "de::object")]
    pub education: Option<EntrySection>,
    #[serde(deserialize_with = "de::object")]
    pub experience: Option<EntrySection>,
    #[serde(deserialize_with = "de::object")]
    pub publications: Option<PublicationSection>,
    #[serde(deserialize_with = "de::object")]
    pub contact: Option<ContactSection>,
}

impl ContentDocument {
    /// Parse a document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// The root goes through `Value` like every nested section, so a
    /// repeated key keeps its last occurrence and a root that is not an
    /// object reads as an empty document.
    fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

/// Page-level strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    #[serde(deserialize_with = "de::text")]
    pub lang_attr: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub page_title: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub tagline: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub footer_note: Option<String>,
}

/// About: ordered text blocks. `body` may be a single string or a list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParagraphSection {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::texts")]
    pub body: Vec<String>,
}

/// Interests: a flat list of text or markup items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListSection {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::seq")]
    pub items: Vec<ListItem>,
}

/// One simple-list item.
///
/// `Markup` is trusted: whoever authors the content document is responsible
/// for sanitizing it, and it is emitted verbatim. Every other string in the
/// document is escaped. A bare string item is plain text.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListItem {
    Text(String),
    Markup(String),
    #[default]
    Empty,
}

impl<'de> Deserialize<'de> for ListItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(text) if !text.is_empty() => ListItem::Text(text),
            Value::Object(map) => {
                match (de::scalar(map.get("html")), de::scalar(map.get("text"))) {
                    (Some(html), _) => ListItem::Markup(html),
                    (None, Some(text)) => ListItem::Text(text),
                    (None, None) => ListItem::Empty,
                }
            }
            _ => ListItem::Empty,
        })
    }
}

/// Upcoming: dated timeline entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineSection {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::seq")]
    pub items: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(deserialize_with = "de::text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub location: Option<String>,
}

/// Education and experience.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntrySection {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::seq")]
    pub items: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Entry {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "de::texts")]
    pub details: Vec<String>,
}

/// Publications grouped by year, newest group first.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PublicationSection {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::seq")]
    pub years: Vec<YearGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct YearGroup {
    #[serde(deserialize_with = "de::text")]
    pub year: Option<String>,
    #[serde(deserialize_with = "de::seq")]
    pub items: Vec<Publication>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub authors: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub venue: Option<String>,
    #[serde(deserialize_with = "de::seq")]
    pub links: Vec<Link>,
}

/// An external link. Links without a `url` are never rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "de::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    #[serde(deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::texts")]
    pub body: Vec<String>,
    #[serde(deserialize_with = "de::object")]
    pub email: Option<Email>,
    #[serde(deserialize_with = "de::seq")]
    pub profiles: Vec<Link>,
}

/// An address split in two so it never appears whole in the source document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Email {
    #[serde(deserialize_with = "de::text")]
    pub user: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub domain: Option<String>,
    #[serde(deserialize_with = "de::text")]
    pub label: Option<String>,
}

impl Email {
    /// `user@domain`, only when both halves are present.
    pub fn address(&self) -> Option<String> {
        match (&self.user, &self.domain) {
            (Some(user), Some(domain)) => Some(format!("{}@{}", user, domain)),
            _ => None,
        }
    }
}

/// Lenient field deserializers. None of these fail on a well-formed JSON
/// value; they map unexpected shapes to the field's empty value.
mod de {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings (non-empty) and numbers read as text.
    pub(super) fn scalar(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar(Some(&value)))
    }

    /// A list of text blocks; a single scalar is a one-element list.
    pub fn texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(values) => values.iter().filter_map(|v| scalar(Some(v))).collect(),
            other => scalar(Some(&other)).into_iter().collect(),
        })
    }

    pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(values) => values
                .into_iter()
                .map(|v| serde_json::from_value(v).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_document() {
        let doc = ContentDocument::from_json("{}").expect("Should parse");
        assert_eq!(doc, ContentDocument::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ContentDocument::from_json("{\"about\":").is_err());
        assert!(ContentDocument::from_json("<html>").is_err());
    }

    #[test]
    fn test_non_object_root_is_empty_document() {
        for root in [r#""x""#, "42", "null", "[1, 2]", "true"] {
            let doc = ContentDocument::from_json(root).expect("Should parse");
            assert_eq!(doc, ContentDocument::default(), "root {}", root);
        }
        let doc = ContentDocument::from_slice(b"\"x\"").expect("Should parse");
        assert_eq!(doc, ContentDocument::default());
    }

    #[test]
    fn test_repeated_top_level_key_keeps_last() {
        let doc = ContentDocument::from_json(r#"{"about":{"body":"a"},"about":{"body":"b"}}"#)
            .expect("Should parse");
        assert_eq!(doc.about.unwrap().body, vec!["b".to_string()]);

        let doc = ContentDocument::from_json(r#"{"about":{"body":"a"},"about":{}}"#)
            .expect("Should parse");
        assert!(doc.about.unwrap().body.is_empty());
    }

    #[test]
    fn test_meta_camel_case_keys() {
        let doc = ContentDocument::from_json(
            r#"{"meta":{"langAttr":"en","pageTitle":"Jane Doe","tagline":"Researcher",
                "role":"PhD","footerNote":"Updated 2024"}}"#,
        )
        .unwrap();
        let meta = doc.meta.unwrap();
        assert_eq!(meta.lang_attr.as_deref(), Some("en"));
        assert_eq!(meta.page_title.as_deref(), Some("Jane Doe"));
        assert_eq!(meta.tagline.as_deref(), Some("Researcher"));
        assert_eq!(meta.role.as_deref(), Some("PhD"));
        assert_eq!(meta.footer_note.as_deref(), Some("Updated 2024"));
    }

    #[test]
    fn test_blank_meta_fields_are_absent() {
        let doc = ContentDocument::from_json(r#"{"meta":{"pageTitle":"","tagline":null}}"#).unwrap();
        let meta = doc.meta.unwrap();
        assert!(meta.page_title.is_none());
        assert!(meta.tagline.is_none());
    }

    #[test]
    fn test_about_body_accepts_string_or_list() {
        let single = ContentDocument::from_json(r#"{"about":{"body":"One"}}"#).unwrap();
        assert_eq!(single.about.unwrap().body, vec!["One"]);

        let list = ContentDocument::from_json(r#"{"about":{"body":["One","",null,"Two"]}}"#).unwrap();
        assert_eq!(list.about.unwrap().body, vec!["One", "Two"]);
    }

    #[test]
    fn test_list_items_variants() {
        let doc = ContentDocument::from_json(
            r#"{"interests":{"items":["plain",{"text":"A"},{"html":"<b>A</b>"},
                {"html":"<i>x</i>","text":"ignored"},{},42,null]}}"#,
        )
        .unwrap();
        let items = doc.interests.unwrap().items;
        assert_eq!(
            items,
            vec![
                ListItem::Text("plain".to_string()),
                ListItem::Text("A".to_string()),
                ListItem::Markup("<b>A</b>".to_string()),
                ListItem::Markup("<i>x</i>".to_string()),
                ListItem::Empty,
                ListItem::Empty,
                ListItem::Empty,
            ]
        );
    }

    #[test]
    fn test_wrong_shapes_read_as_absent() {
        let doc = ContentDocument::from_json(
            r#"{"about":"not an object","interests":{"items":"nope"},
                "education":{"items":[1,"x",{"title":"BSc","details":"single"}]},
                "publications":[]}"#,
        )
        .unwrap();
        assert!(doc.about.is_none());
        assert!(doc.interests.unwrap().items.is_empty());
        assert!(doc.publications.is_none());

        let entries = doc.education.unwrap().items;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], Entry::default());
        assert_eq!(entries[1], Entry::default());
        assert_eq!(entries[2].title.as_deref(), Some("BSc"));
        assert_eq!(entries[2].details, vec!["single"]);
    }

    #[test]
    fn test_numeric_year_reads_as_text() {
        let doc = ContentDocument::from_json(
            r#"{"publications":{"years":[{"year":2024,"items":[{"title":"Paper"}]}]}}"#,
        )
        .unwrap();
        let years = doc.publications.unwrap().years;
        assert_eq!(years[0].year.as_deref(), Some("2024"));
        assert_eq!(years[0].items[0].title.as_deref(), Some("Paper"));
    }

    #[test]
    fn test_email_address_requires_both_halves() {
        let full = Email {
            user: Some("jane".to_string()),
            domain: Some("example.com".to_string()),
            label: None,
        };
        assert_eq!(full.address().as_deref(), Some("jane@example.com"));

        let partial = Email {
            user: Some("jane".to_string()),
            ..Email::default()
        };
        assert!(partial.address().is_none());
    }

    #[test]
    fn test_contact_shape() {
        let doc = ContentDocument::from_json(
            r#"{"contact":{"body":["Reach me"],"email":{"user":"jane","domain":"example.com",
                "label":"Email Jane"},"profiles":[{"url":"https://example.org","label":"Site"},{"label":"no url"}]}}"#,
        )
        .unwrap();
        let contact = doc.contact.unwrap();
        assert_eq!(contact.body, vec!["Reach me"]);
        assert_eq!(contact.email.unwrap().label.as_deref(), Some("Email Jane"));
        assert_eq!(contact.profiles.len(), 2);
        assert!(contact.profiles[1].url.is_none());
    }
}
