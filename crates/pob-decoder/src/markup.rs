use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed markup element: name, attributes, child elements, and the
/// element's accumulated text content.
///
/// Children are always materialized as a sequence — one occurrence and
/// many occurrences produce the same shape, and [`children_named`] is
/// the single coercion point every extraction site goes through. This
/// keeps scalar-vs-sequence ambiguity out of the normalized model
/// entirely.
///
/// [`children_named`]: Element::children_named
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    /// Value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First child element with the given name.
    #[must_use]
    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.children_named(name).next()
    }
}

/// Parse markup text into its top-level elements.
///
/// This is a stateless function — no shared parser instance, no
/// process-wide state. Text and CDATA content accumulate on the
/// innermost open element; declarations, comments and processing
/// instructions carry no build data and are skipped.
///
/// # Errors
///
/// Any well-formedness failure from the underlying reader: mismatched
/// or stray close tags, invalid attribute syntax, bad escapes, or an
/// element left unclosed at end of input.
pub fn parse(text: &str) -> Result<Vec<Element>, quick_xml::Error> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut roots: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_open(&start)?),
            Event::Empty(start) => {
                let element = element_open(&start)?;
                attach(&mut stack, &mut roots, element);
            }
            Event::End(_) => {
                // Mismatched names are already rejected by the reader;
                // a stray close tag with nothing open is not.
                match stack.pop() {
                    Some(element) => attach(&mut stack, &mut roots, element),
                    None => {
                        return Err(quick_xml::Error::UnexpectedEof(
                            "close tag without a matching open tag".to_string(),
                        ));
                    }
                }
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(quick_xml::Error::UnexpectedEof(format!(
            "unclosed <{}> element",
            open.name
        )));
    }

    Ok(roots)
}

/// Build an [`Element`] from an opening tag, decoding its attributes.
fn element_open(start: &BytesStart<'_>) -> Result<Element, quick_xml::Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
        text: String::new(),
    })
}

/// Attach a finished element to its parent, or to the root list when
/// nothing is open.
fn attach(stack: &mut [Element], roots: &mut Vec<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => roots.push(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes() {
        let roots = parse(r#"<Build level="90"><Skills><Skill slot="Body Armour"/></Skills></Build>"#)
            .unwrap();
        assert_eq!(roots.len(), 1);
        let build = &roots[0];
        assert_eq!(build.name, "Build");
        assert_eq!(build.attr("level"), Some("90"));
        let skills = build.first_child("Skills").unwrap();
        assert_eq!(skills.children.len(), 1);
        assert_eq!(skills.children[0].attr("slot"), Some("Body Armour"));
    }

    #[test]
    fn single_and_repeated_children_share_a_shape() {
        let one = parse("<Skills><Skill/></Skills>").unwrap();
        let two = parse("<Skills><Skill/><Skill/></Skills>").unwrap();
        assert_eq!(one[0].children_named("Skill").count(), 1);
        assert_eq!(two[0].children_named("Skill").count(), 2);
    }

    #[test]
    fn text_accumulates_on_the_open_element() {
        let roots = parse("<Item>Rarity: RARE\nTitan Greaves</Item>").unwrap();
        assert_eq!(roots[0].text, "Rarity: RARE\nTitan Greaves");
    }

    #[test]
    fn entities_are_unescaped() {
        let roots = parse(r#"<Item name="Dusk &amp; Dawn">&lt;corrupted&gt;</Item>"#).unwrap();
        assert_eq!(roots[0].attr("name"), Some("Dusk & Dawn"));
        assert_eq!(roots[0].text, "<corrupted>");
    }

    #[test]
    fn cdata_is_taken_verbatim() {
        let roots = parse("<Item><![CDATA[1 < 2 & 3]]></Item>").unwrap();
        assert_eq!(roots[0].text, "1 < 2 & 3");
    }

    #[test]
    fn mismatched_close_tag_is_rejected() {
        assert!(parse("<Build><Skills></Build></Skills>").is_err());
    }

    #[test]
    fn unclosed_element_is_rejected() {
        assert!(parse("<Build><Skills>").is_err());
    }

    #[test]
    fn stray_close_tag_is_rejected() {
        assert!(parse("</Build>").is_err());
    }

    #[test]
    fn empty_input_has_no_roots() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n").unwrap().is_empty());
    }

    #[test]
    fn declaration_and_comments_are_skipped() {
        let roots = parse("<?xml version=\"1.0\"?><!-- header --><Build/>").unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "Build");
    }
}
