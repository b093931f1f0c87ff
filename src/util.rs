use std::fs::DirEntry;

use libxml::tree::Node;
use libxml::xpath::Context;

use crate::constants;
use crate::segmenter::error::SegmenterError;

pub struct Util;

impl Util {
    pub fn check_extension(path: &DirEntry, extension: &str) -> bool {
        if let Some(ext) = path.path().extension() {
            ext.to_str() == Some(extension)
        } else {
            false
        }
    }

    pub fn split_values(values: &str) -> Vec<&str> {
        values.split('|').map(|s| s.trim()).collect()
    }

    pub fn evaluate_xpath(
        xpath_ctx: &Context,
        xpath: &str,
    ) -> Result<Vec<Node>, SegmenterError> {
        let res = xpath_ctx.evaluate(xpath).map_err(|()| {
            log::debug!("Evaluation of xpath '{}' failed", xpath);
            SegmenterError::Xml
        })?;

        Ok(res.get_nodes_as_vec())
    }

    pub fn strip_node(context: &Context, xpath: &str) -> Result<(), SegmenterError> {
        let node_vec = Util::evaluate_xpath(context, xpath)?;
        let node_vec_clone = node_vec.clone();

        for mut node in node_vec {
            if Self::parent_part_of_result(&node, &node_vec_clone) {
                continue;
            }

            node.unlink();
        }
        Ok(())
    }

    /// Strips every node carrying `class` as a whole class token. The
    /// concat trick keeps the match token-exact instead of substring.
    pub fn strip_class(context: &Context, class: &str) -> Result<(), SegmenterError> {
        let xpath = format!(
            "//*[contains(concat(' ', normalize-space(@class), ' '), ' {} ')]",
            class
        );
        Self::strip_node(context, &xpath)
    }

    fn parent_part_of_result(node: &Node, xpath_result: &[Node]) -> bool {
        if let Some(parent) = node.get_parent() {
            for n in xpath_result {
                if n == &parent {
                    return true;
                }
            }

            return Self::parent_part_of_result(&parent, xpath_result);
        }

        false
    }

    /// Pre-order search over `node` and its descendant elements,
    /// first match wins.
    pub fn find_node<F>(node: &Node, predicate: &F) -> Option<Node>
    where
        F: Fn(&Node) -> bool,
    {
        if predicate(node) {
            return Some(node.clone());
        }

        for child in node.get_child_elements() {
            if let Some(found) = Self::find_node(&child, predicate) {
                return Some(found);
            }
        }

        None
    }

    /// Like [`Self::find_node`] but excluding `node` itself.
    pub fn find_descendant<F>(node: &Node, predicate: &F) -> Option<Node>
    where
        F: Fn(&Node) -> bool,
    {
        node.get_child_elements()
            .iter()
            .find_map(|child| Self::find_node(child, predicate))
    }

    pub fn get_elements_by_tag_name(node: &Node, tag: &str) -> Vec<Node> {
        let tag = tag.to_uppercase();
        let mut vec = Vec::new();

        fn get_elems(node: &Node, tag: &str, vec: &mut Vec<Node>) {
            for child in node.get_child_elements() {
                if child.get_name().to_uppercase() == tag {
                    vec.push(child.clone());
                }
                get_elems(&child, tag, vec);
            }
        }

        get_elems(node, &tag, &mut vec);
        vec
    }

    /// Collapses every whitespace run to a single space and trims the ends.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Collapses runs of two or more spaces to one. Idempotent; newlines and
    /// tabs pass through untouched.
    pub fn clean_text(text: &str) -> String {
        constants::MULTI_SPACE.replace_all(text, " ").into()
    }

    /// True if `text` has at least one uppercase letter and no lowercase ones.
    pub fn is_uppercase(text: &str) -> bool {
        let mut has_cased = false;
        for c in text.chars() {
            if c.is_lowercase() {
                return false;
            }
            if c.is_uppercase() {
                has_cased = true;
            }
        }
        has_cased
    }

    /// Uppercases every letter that follows a non-letter, lowercases the
    /// rest. Digits and punctuation count as word boundaries.
    pub fn title_case(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut prev_is_letter = false;

        for c in text.chars() {
            if c.is_alphabetic() {
                if prev_is_letter {
                    result.extend(c.to_lowercase());
                } else {
                    result.extend(c.to_uppercase());
                }
                prev_is_letter = true;
            } else {
                result.push(c);
                prev_is_letter = false;
            }
        }

        result
    }
}
