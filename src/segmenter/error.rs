use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmenterError {
    #[error("libXml Error")]
    Xml,
    #[error("No article body found")]
    BodyNotFound,
    #[error("No section heading found")]
    NoSectionHeadingFound,
}
