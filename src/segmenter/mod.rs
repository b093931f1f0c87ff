pub mod error;
mod format;
mod walk;

#[cfg(test)]
mod tests;

pub use self::format::{is_content_body, MarkupFormat, MarkupNode};
pub use self::walk::FlattenedSiblings;

use chrono::NaiveDate;
use libxml::parser::Parser;
use libxml::tree::{Document, Node};
use libxml::xpath::Context;
use log::{debug, error};

use self::error::SegmenterError;
use crate::article::{Article, Section};
use crate::constants;
use crate::util::Util;

pub struct Segmenter;

impl Segmenter {
    /// Turns one archived issue into an [`Article`]: parse, strip noise,
    /// locate the content body, then split it into sections along whichever
    /// heading convention the issue uses. Title and date come from the
    /// caller; the markup does not carry them.
    pub fn parse(title: &str, date: NaiveDate, html: &str) -> Result<Article, SegmenterError> {
        libxml::tree::node::set_node_rc_guard(10);

        debug!("Segmenting issue '{}'", title);

        let document = Self::parse_html(html)?;
        Self::strip_noise(&document)?;

        let root = match document.get_root_element() {
            Some(root) => root,
            None => return Err(SegmenterError::BodyNotFound),
        };
        let body = Self::find_body(&root)?;

        Self::mark_paragraph_breaks(&document, &body);
        let sections = Self::collect_sections(&body)?;

        Ok(Article {
            title: title.to_owned(),
            date,
            sections,
        })
    }

    fn parse_html(html: &str) -> Result<Document, SegmenterError> {
        let parser = Parser::default_html();
        parser.parse_string(html).map_err(|err| {
            error!("Parsing issue HTML failed {:?}", err);
            SegmenterError::Xml
        })
    }

    fn get_xpath_ctx(doc: &Document) -> Result<Context, SegmenterError> {
        Context::new(doc).map_err(|()| {
            error!("Creating xpath context failed for issue HTML");
            SegmenterError::Xml
        })
    }

    /// Drops promotional blocks and style/script nodes from the whole tree.
    /// Absence of any of them is fine.
    fn strip_noise(document: &Document) -> Result<(), SegmenterError> {
        let context = Self::get_xpath_ctx(document)?;
        Util::strip_class(&context, constants::SPONSORED_CLASS)?;
        Util::strip_node(&context, "//style")?;
        Util::strip_node(&context, "//script")?;
        Ok(())
    }

    fn find_body(root: &Node) -> Result<Node, SegmenterError> {
        Util::find_node(root, &|node: &Node| is_content_body(node))
            .ok_or(SegmenterError::BodyNotFound)
    }

    /// Appends a paragraph break to every `<p>` in the body so the breaks
    /// survive flattening to plain text.
    fn mark_paragraph_breaks(document: &Document, body: &Node) {
        for mut paragraph in Util::get_elements_by_tag_name(body, "p") {
            if let Ok(mut marker) = Node::new_text(constants::PARAGRAPH_BREAK, document) {
                _ = paragraph.add_child(&mut marker);
            }
        }
    }

    fn collect_sections(body: &Node) -> Result<Vec<Section>, SegmenterError> {
        let (markup, first_heading) =
            MarkupFormat::detect(body).ok_or(SegmenterError::NoSectionHeadingFound)?;

        let mut sections: Vec<Section> = Vec::new();
        for node in FlattenedSiblings::new(body, &first_heading) {
            if markup.is_heading(&node) {
                sections.push(Section {
                    title: Self::heading_title(&node),
                    body: String::new(),
                });
            } else if let Some(section) = sections.last_mut() {
                section.body.push_str(&Util::clean_text(&node.text()));
            }
        }

        debug!("Collected {} sections", sections.len());
        Ok(sections)
    }

    fn heading_title(node: &Node) -> String {
        let title = Util::collapse_whitespace(&node.text());
        match escaper::decode_html(&title) {
            Ok(decoded_title) => decoded_title,
            Err(_error) => title,
        }
    }
}
