use std::collections::HashSet;

use libxml::tree::Node;
use log::debug;

use crate::constants;
use crate::util::Util;

/// The node capabilities the heading and body rules depend on. Keeps the
/// rules pure and testable without a libxml document behind them.
pub trait MarkupNode {
    fn tag_name(&self) -> String;
    fn class_tokens(&self) -> HashSet<String>;
    fn text(&self) -> String;
}

impl MarkupNode for Node {
    fn tag_name(&self) -> String {
        self.get_name().to_lowercase()
    }

    fn class_tokens(&self) -> HashSet<String> {
        self.get_class_names()
    }

    fn text(&self) -> String {
        self.get_content()
    }
}

/// Section heading conventions observed across the issue archive. Every
/// issue uses exactly one of them; [`MarkupFormat::detect`] resolves which.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupFormat {
    /// A `<table>` whose class token set is exactly `{header}`.
    HeaderTable,
    H2,
    H3,
}

impl MarkupFormat {
    /// Older conventions first. A later convention's markup must not shadow
    /// an earlier one's on old issues.
    const PRIORITY: [MarkupFormat; 3] = [Self::HeaderTable, Self::H2, Self::H3];

    pub fn is_heading<N: MarkupNode>(self, node: &N) -> bool {
        match self {
            Self::HeaderTable => {
                if node.tag_name() != "table" {
                    return false;
                }
                let classes = node.class_tokens();
                classes.len() == 1 && classes.contains(constants::HEADER_TABLE_CLASS)
            }
            Self::H2 => node.tag_name() == "h2",
            Self::H3 => node.tag_name() == "h3",
        }
    }

    /// Commits to one heading convention for the whole document: the first
    /// format in priority order with a match anywhere below `body` wins.
    /// Returns the format together with its first matching node.
    pub fn detect(body: &Node) -> Option<(MarkupFormat, Node)> {
        for format in Self::PRIORITY {
            let matched = Util::find_descendant(body, &|node: &Node| format.is_heading(node));
            if let Some(node) = matched {
                debug!("Detected {:?} section markup", format);
                return Some((format, node));
            }
        }

        None
    }
}

/// Main content container test. Each disjunct is a class convention of one
/// generation of the publishing system; old ones are kept for old archives.
pub fn is_content_body<N: MarkupNode>(node: &N) -> bool {
    let classes = node.class_tokens();
    classes.contains("body-component__content")
        || classes.contains("body-component")
        || classes.contains("body-copy")
        || (classes.contains("inner") && classes.contains("contents"))
}
