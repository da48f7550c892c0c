// SPDX-License-Identifier: PMPL-1.0-or-later
//! Typed view over a parsed HTML document.
//!
//! Checks never touch `scraper` directly; they query elements, attributes
//! and text through [`Document`] and [`Element`]. Element order is always
//! document (pre-order) order.

use crate::error::{CheckError, ScanError};
use scraper::{ElementRef, Html, Selector};

/// Elements whose text content is never rendered
const NON_RENDERED: &[&str] = &["script", "style", "noscript", "template"];

/// Heading tags, h1 through h6
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// A parsed HTML document
pub struct Document {
    html: Html,
    html_tag: bool,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("parse_errors", &self.html.errors.len())
            .field("html_tag", &self.html_tag)
            .finish()
    }
}

impl Document {
    /// Parse a full HTML document, recovering from malformed markup
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            html_tag: has_html_start_tag(source),
        }
    }

    /// Parse, failing if the parser had to recover from any error
    pub fn parse_strict(source: &str) -> Result<Self, ScanError> {
        let document = Self::parse(source);
        if document.html.errors.is_empty() {
            Ok(document)
        } else {
            Err(ScanError::Parse {
                errors: document.parse_errors(),
            })
        }
    }

    /// Errors the parser recovered from
    pub fn parse_errors(&self) -> Vec<String> {
        self.html.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Whether the source wrote an `<html>` start tag. The parser adds a
    /// root element either way.
    pub fn has_html_tag(&self) -> bool {
        self.html_tag
    }

    /// The root `<html>` element
    pub fn root(&self) -> Element<'_> {
        Element {
            inner: self.html.root_element(),
        }
    }

    /// All elements with one of the given tag names, in document order
    pub fn elements_by_tag(&self, tags: &[&str]) -> Result<Vec<Element<'_>>, CheckError> {
        let selector = compile(&tags.join(", "))?;
        Ok(self.html.select(&selector).map(Element::from).collect())
    }

    /// All elements carrying the given attribute, in document order
    pub fn elements_with_attribute(&self, name: &str) -> Result<Vec<Element<'_>>, CheckError> {
        let selector = compile(&format!("[{}]", name))?;
        Ok(self.html.select(&selector).map(Element::from).collect())
    }

    /// Count of elements with one of the given tag names
    pub fn count(&self, tags: &[&str]) -> Result<usize, CheckError> {
        let selector = compile(&tags.join(", "))?;
        Ok(self.html.select(&selector).count())
    }

    /// Whether any element with one of the given tag names exists
    pub fn contains(&self, tags: &[&str]) -> Result<bool, CheckError> {
        let selector = compile(&tags.join(", "))?;
        Ok(self.html.select(&selector).next().is_some())
    }

    /// Rendered text of the whole document, text nodes separated by a
    /// single space
    pub fn text_content(&self) -> String {
        self.root().text_content()
    }

    /// Trimmed `<title>` text, if any
    pub fn title(&self) -> Option<String> {
        let title = self.elements_by_tag(&["title"]).ok()?.into_iter().next()?;
        let text = title.text_content();
        (!text.is_empty()).then_some(text)
    }
}

/// Case-insensitive scan for `<html` followed by whitespace, `>` or `/`
fn has_html_start_tag(source: &str) -> bool {
    let bytes = source.as_bytes();
    bytes.windows(5).enumerate().any(|(i, window)| {
        window[0] == b'<'
            && window[1..].eq_ignore_ascii_case(b"html")
            && bytes
                .get(i + 5)
                .map_or(true, |&b| b == b'>' || b == b'/' || b.is_ascii_whitespace())
    })
}

fn compile(selector: &str) -> Result<Selector, CheckError> {
    Selector::parse(selector).map_err(|e| CheckError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Borrowed element of a [`Document`]
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.tag_name())
    }
}

impl<'a> Element<'a> {
    /// Lower-case tag name
    pub fn tag_name(&self) -> &'a str {
        self.inner.value().name()
    }

    /// Raw attribute value. Attribute names are lower-cased by the parser.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(&name.to_ascii_lowercase())
    }

    /// Attribute value, treating a blank value as absent
    pub fn non_empty_attribute(&self, name: &str) -> Option<&'a str> {
        self.attribute(name).filter(|v| !v.trim().is_empty())
    }

    /// Whether the attribute is present with a non-empty value.
    /// Whitespace counts as a value.
    pub fn has_attribute_value(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(|v| !v.is_empty())
    }

    /// Whitespace-separated tokens of the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.attribute("class").unwrap_or("").split_whitespace()
    }

    /// Heading level for `h1`..`h6`
    pub fn heading_level(&self) -> Option<u8> {
        let level: u8 = self.tag_name().strip_prefix('h')?.parse().ok()?;
        (1..=6).contains(&level).then_some(level)
    }

    /// Direct child elements
    pub fn children(&self) -> impl Iterator<Item = Element<'a>> {
        self.inner.children().filter_map(ElementRef::wrap).map(Element::from)
    }

    /// Descendant elements (excluding this one) in document order
    pub fn descendants(&self) -> impl Iterator<Item = Element<'a>> {
        self.inner
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Element::from)
    }

    /// First descendant with one of the given tag names
    pub fn find_descendant(&self, tags: &[&str]) -> Option<Element<'a>> {
        self.descendants().find(|e| tags.contains(&e.tag_name()))
    }

    /// Whether a descendant with one of the given tag names exists
    pub fn has_descendant(&self, tags: &[&str]) -> bool {
        self.find_descendant(tags).is_some()
    }

    /// Rendered text, whitespace-normalized. Text inside script, style,
    /// noscript and template elements is skipped.
    pub fn text_content(&self) -> String {
        let mut words: Vec<&str> = Vec::new();
        for node in self.inner.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| NON_RENDERED.contains(&a.value().name()));
            if !hidden {
                words.extend(text.split_whitespace());
            }
        }
        words.join(" ")
    }

    /// Serialized outer markup on one line, cut to `limit` characters
    pub fn snippet(&self, limit: usize) -> String {
        let markup = self.inner.html().replace(['\r', '\n'], " ");
        truncate_chars(&markup, limit).to_string()
    }
}

/// Prefix of `s` holding at most `limit` characters
pub fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `s` cut to `limit` characters with a trailing ellipsis when cut
pub fn excerpt(s: &str, limit: usize) -> String {
    let cut = truncate_chars(s, limit);
    if cut.len() < s.len() {
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
