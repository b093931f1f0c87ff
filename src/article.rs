use chrono::NaiveDate;
use std::fmt;

/// One section of a newsletter issue. The title is fixed at creation,
/// the body accumulates text runs until the next section starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub date: NaiveDate,
    pub sections: Vec<Section>,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n\n{}", self.title, self.body)
    }
}

// The plain text rendering is what gets handed to entity recognition,
// so section boundaries stay visible as blank lines.
impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sections = self
            .sections
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}\n\n{}", self.title, sections)
    }
}
