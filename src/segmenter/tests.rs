use std::collections::HashSet;

use chrono::NaiveDate;

use super::error::SegmenterError;
use super::{is_content_body, MarkupFormat, MarkupNode, Segmenter};

fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 15).unwrap()
}

#[test]
fn h2_sections_in_document_order() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<h2>Capital History</h2>
<p>First paragraph.</p>
<p>Second paragraph.</p>
<h2>Elsewhere</h2>
<p>Other things happened.</p>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    let titles: Vec<&str> = article
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Capital History", "Elsewhere"]);
    assert_eq!(
        article.sections[0].body,
        "First paragraph.\n\nSecond paragraph.\n\n"
    );
    assert_eq!(article.sections[1].body, "Other things happened.\n\n");
}

#[test]
fn header_table_rule_wins_for_whole_issue() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-copy">
<table class="header"><tr><td>Markets</td></tr></table>
<p>Stocks went up.</p>
<h2>Not a real heading</h2>
<p>More prose.</p>
<table class="header"><tr><td>People</td></tr></table>
<p>Someone did a thing.</p>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    let titles: Vec<&str> = article
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Markets", "People"]);
    // The decorative h2 is ordinary body text under the committed rule.
    assert!(article.sections[0].body.contains("Not a real heading"));
    assert_eq!(article.sections[1].body, "Someone did a thing.\n\n");
}

#[test]
fn h3_issues_segment() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component__content">
<h3>One</h3>
<p>Alpha.</p>
<h3>Two</h3>
<p>Beta.</p>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections.len(), 2);
    assert_eq!(article.sections[0].title, "One");
    assert_eq!(article.sections[1].body, "Beta.\n\n");
}

#[test]
fn body_not_found() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="wrapper"><p>No recognizable container here.</p></div>
</body></html>"#;

    let result = Segmenter::parse("Test Issue", issue_date(), html);
    assert!(matches!(result, Err(SegmenterError::BodyNotFound)));
}

#[test]
fn body_class_match_is_token_exact() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Substrings of known tokens must not match.
    let html = r#"
<html><body>
<div class="xbody-component"><h2>Nope</h2><p>Text.</p></div>
</body></html>"#;

    let result = Segmenter::parse("Test Issue", issue_date(), html);
    assert!(matches!(result, Err(SegmenterError::BodyNotFound)));
}

#[test]
fn no_section_heading_found() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<p>Just paragraphs.</p>
<p>No headings anywhere.</p>
</div>
</body></html>"#;

    let result = Segmenter::parse("Test Issue", issue_date(), html);
    assert!(matches!(result, Err(SegmenterError::NoSectionHeadingFound)));
}

#[test]
fn header_table_class_must_be_exact() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<table class="header promo"><tr><td>Nope</td></tr></table>
<p>Text.</p>
</div>
</body></html>"#;

    let result = Segmenter::parse("Test Issue", issue_date(), html);
    assert!(matches!(result, Err(SegmenterError::NoSectionHeadingFound)));
}

#[test]
fn sponsored_content_is_stripped() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<h2>Real</h2>
<p>Keep this.</p>
<div class="sponsored-content"><p>Buy gold now.</p></div>
<div class="sponsored-content"><p>Second advert.</p></div>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections.len(), 1);
    assert_eq!(article.sections[0].body, "Keep this.\n\n");
    let rendered = article.to_string();
    assert!(!rendered.contains("gold"));
    assert!(!rendered.contains("advert"));
}

#[test]
fn styles_and_scripts_are_stripped() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-copy">
<h2>Only</h2>
<style>.x { color: red }</style>
<p>Visible text.</p>
<script>var tracker = 1;</script>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections[0].body, "Visible text.\n\n");
    assert!(!article.to_string().contains("tracker"));
}

#[test]
fn content_before_first_heading_is_discarded() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-copy">
<p>Intro blurb before anything.</p>
<h2>Start</h2>
<p>Actual content.</p>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections.len(), 1);
    assert_eq!(article.sections[0].body, "Actual content.\n\n");
    assert!(!article.to_string().contains("Intro blurb"));
}

#[test]
fn legacy_inner_contents_container() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<table><tr><td class="inner contents">
<h3>Old Format</h3>
<p>Vintage text.</p>
</td></tr></table>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();
    assert_eq!(article.sections[0].title, "Old Format");

    // Either token alone is not enough.
    let html = r#"
<html><body>
<div class="contents"><h3>X</h3></div>
</body></html>"#;
    let result = Segmenter::parse("Test Issue", issue_date(), html);
    assert!(matches!(result, Err(SegmenterError::BodyNotFound)));
}

#[test]
fn walk_escapes_nested_wrappers() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<div><h2>Leading</h2><p>Inside paragraph.</p></div>
<p>After the wrapper.</p>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections.len(), 1);
    assert_eq!(
        article.sections[0].body,
        "Inside paragraph.\n\nAfter the wrapper.\n\n"
    );
}

#[test]
fn content_outside_body_is_ignored() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<h2>Inside</h2>
<p>Body text.</p>
</div>
<div class="footer"><p>Unsubscribe here.</p></div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections.len(), 1);
    assert!(!article.to_string().contains("Unsubscribe"));
}

#[test]
fn heading_title_is_collapsed_and_decoded() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component">
<h2>
    Money   &amp;amp;
    Stuff
</h2>
<p>Content.</p>
</div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();
    assert_eq!(article.sections[0].title, "Money & Stuff");
}

#[test]
fn heading_without_trailing_text_is_valid() {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"
<html><body>
<div class="body-component"><h2>Lonely</h2></div>
</body></html>"#;

    let article = Segmenter::parse("Test Issue", issue_date(), html).unwrap();

    assert_eq!(article.sections.len(), 1);
    assert_eq!(article.sections[0].title, "Lonely");
    assert_eq!(article.sections[0].body, "");
}

struct FakeNode {
    tag: &'static str,
    classes: &'static [&'static str],
    text: &'static str,
}

impl MarkupNode for FakeNode {
    fn tag_name(&self) -> String {
        self.tag.to_owned()
    }

    fn class_tokens(&self) -> HashSet<String> {
        self.classes.iter().map(|class| (*class).to_owned()).collect()
    }

    fn text(&self) -> String {
        self.text.to_owned()
    }
}

#[test]
fn heading_predicates_are_pure_over_the_node_trait() {
    let header_table = FakeNode {
        tag: "table",
        classes: &["header"],
        text: "Markets",
    };
    let plain_table = FakeNode {
        tag: "table",
        classes: &["header", "wide"],
        text: "",
    };
    let h2 = FakeNode {
        tag: "h2",
        classes: &[],
        text: "People",
    };

    assert!(MarkupFormat::HeaderTable.is_heading(&header_table));
    assert!(!MarkupFormat::HeaderTable.is_heading(&plain_table));
    assert!(!MarkupFormat::HeaderTable.is_heading(&h2));
    assert!(MarkupFormat::H2.is_heading(&h2));
    assert!(!MarkupFormat::H3.is_heading(&h2));
}

#[test]
fn body_predicate_over_the_node_trait() {
    let modern = FakeNode {
        tag: "div",
        classes: &["body-component__content"],
        text: "",
    };
    let legacy = FakeNode {
        tag: "td",
        classes: &["inner", "contents"],
        text: "",
    };
    let half_legacy = FakeNode {
        tag: "td",
        classes: &["inner"],
        text: "",
    };

    assert!(is_content_body(&modern));
    assert!(is_content_body(&legacy));
    assert!(!is_content_body(&half_legacy));
}
