//! Unit tests for templates

use disco::style::node::char_len;
use disco::{load_template, Document, StyleError, StyleNode, Template};

#[test]
fn plain_templates_are_single_text_leaves() {
    for template in [
        Template::Welcome,
        Template::Rainbow,
        Template::Styled,
        Template::Rules,
    ] {
        let nodes = template.nodes();
        assert_eq!(nodes.len(), 1, "{}", template);
        assert!(matches!(nodes[0], StyleNode::Text { .. }));
    }
}

#[test]
fn template_texts() {
    let text = |t: Template| Document::from_template(t).plain_text();
    assert_eq!(text(Template::Rainbow), "R:31 A:32 I:33 N:34 B:35 O:36 W:37");
    assert_eq!(
        text(Template::Styled),
        "This text has bold and underline sections!"
    );
    assert_eq!(
        text(Template::Rules),
        "SERVER RULES:\n1. Be respectful\n2. No spamming\n3. Have fun!"
    );
}

#[test]
fn colored_template_has_nested_and_sequential_spans() {
    let nodes = Template::Colored.nodes();
    assert_eq!(char_len(&nodes), 42);
    let nested = nodes.iter().any(|n| match n {
        StyleNode::Span { children, .. } => children
            .iter()
            .any(|c| matches!(c, StyleNode::Span { .. })),
        _ => false,
    });
    assert!(nested);
    let top_level_spans = nodes
        .iter()
        .filter(|n| matches!(n, StyleNode::Span { .. }))
        .count();
    assert_eq!(top_level_spans, 1 + 1 + 4 + 10);
}

#[test]
fn load_template_is_case_insensitive() {
    assert_eq!(load_template("Colored").unwrap(), Template::Colored.nodes());
}

#[test]
fn load_template_unknown_name() {
    assert!(matches!(
        load_template("banner"),
        Err(StyleError::UnknownTemplate(_))
    ));
}

#[test]
fn document_load_template_replaces_styled_content() {
    let mut doc = Document::from_template(Template::Colored);
    doc.load_template("rules").unwrap();
    assert_eq!(doc.nodes(), Template::Rules.nodes().as_slice());
    assert!(doc.load_template("missing").is_err());
    assert_eq!(doc.nodes(), Template::Rules.nodes().as_slice());
}
