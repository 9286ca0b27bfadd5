use super::SectionView;
use crate::content::ContactSection;
use crate::view::{external_link, Element, Node};

/// The contact block always renders, even for an absent section.
pub fn render_contact(section: Option<&ContactSection>) -> SectionView {
    let section = section.cloned().unwrap_or_default();
    let mut block = Element::new("div").class("contact-block");

    for paragraph in &section.body {
        block = block.child(Element::new("p").text(paragraph.as_str()));
    }

    if let Some(email) = &section.email {
        if let (Some(user), Some(domain), Some(address)) =
            (&email.user, &email.domain, email.address())
        {
            let label = email.label.clone().unwrap_or_else(|| address.clone());
            block = block.child(
                Element::new("a")
                    .attr("href", format!("mailto:{}", address))
                    .attr("rel", "noopener")
                    .attr("aria-label", label)
                    .text(format!("{} [at] {}", user, domain)),
            );
        }
    }

    if !section.profiles.is_empty() {
        let links: Vec<Node> = section
            .profiles
            .iter()
            .filter_map(|profile| {
                let url = profile.url.as_deref()?;
                Some(external_link(url, profile.label.as_deref()).into())
            })
            .collect();
        block = block.child(Element::new("div").class("contact-links").children(links));
    }

    SectionView::new(section.title.as_ref(), vec![block.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Email, Link};

    fn email(user: Option<&str>, domain: Option<&str>, label: Option<&str>) -> ContactSection {
        ContactSection {
            email: Some(Email {
                user: user.map(String::from),
                domain: domain.map(String::from),
                label: label.map(String::from),
            }),
            ..ContactSection::default()
        }
    }

    #[test]
    fn test_absent_section_renders_empty_block() {
        assert_eq!(render_contact(None).to_html(), "<div class=\"contact-block\"></div>");
    }

    #[test]
    fn test_email_link() {
        let view = render_contact(Some(&email(Some("jane"), Some("example.com"), None)));
        assert_eq!(
            view.to_html(),
            "<div class=\"contact-block\"><a href=\"mailto:jane@example.com\" rel=\"noopener\" \
             aria-label=\"jane@example.com\">jane [at] example.com</a></div>"
        );
        assert_eq!(view.body[0].text_content(), "jane [at] example.com");
    }

    #[test]
    fn test_email_accessible_label_override() {
        let view = render_contact(Some(&email(Some("jane"), Some("example.com"), Some("Email Jane"))));
        assert!(view.to_html().contains("aria-label=\"Email Jane\""));
    }

    #[test]
    fn test_email_needs_user_and_domain() {
        let view = render_contact(Some(&email(Some("jane"), None, None)));
        assert_eq!(view.to_html(), "<div class=\"contact-block\"></div>");
    }

    #[test]
    fn test_paragraphs_and_profiles() {
        let section = ContactSection {
            title: Some("Contact".into()),
            body: vec!["Write to me".into()],
            email: None,
            profiles: vec![
                Link {
                    url: Some("https://github.com/example".into()),
                    label: Some("GitHub".into()),
                },
                Link {
                    url: Some("https://orcid.org/0000".into()),
                    label: None,
                },
                Link::default(),
            ],
        };
        let view = render_contact(Some(&section));
        assert_eq!(view.title.as_deref(), Some("Contact"));
        assert_eq!(
            view.to_html(),
            "<div class=\"contact-block\"><p>Write to me</p><div class=\"contact-links\">\
             <a href=\"https://github.com/example\" target=\"_blank\" rel=\"noreferrer noopener\">GitHub</a>\
             <a href=\"https://orcid.org/0000\" target=\"_blank\" rel=\"noreferrer noopener\">https://orcid.org/0000</a>\
             </div></div>"
        );
    }
}
