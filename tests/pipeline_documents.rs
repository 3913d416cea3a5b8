//! Integration tests for the full scan → render pipeline
//!
//! These tests run the sample documents in docs/samples through the public API
//! and check both the token tree and the rendered HTML.

use quill::{render, scan, RenderConfig, SpliceMode, Token, TokenKind};
use std::fs;

/// Helper function to read sample document content
fn read_sample_document(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read sample document")
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

#[test]
fn test_kitchensink_tokens() {
    let source = read_sample_document("docs/samples/kitchensink.md");
    let tokens = scan(&source);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Header1,
            TokenKind::Space,
            TokenKind::Paragraph,
            TokenKind::Space,
            TokenKind::Header2,
            TokenKind::Space,
            TokenKind::UnorderedList,
            TokenKind::Space,
            TokenKind::HorizontalRule,
            TokenKind::Space,
            TokenKind::Paragraph,
        ]
    );

    let list = &tokens[6];
    assert_eq!(list.children().len(), 2);
    assert_eq!(list.children()[1].text(), "second with [a link](https://example.com)");
    assert_eq!(
        list.children()[1].children()[0].href(),
        Some("https://example.com")
    );
}

#[test]
fn test_kitchensink_html() {
    let source = read_sample_document("docs/samples/kitchensink.md");
    let html = render(&scan(&source), &RenderConfig::default());

    let expected = concat!(
        "<h1>Quill</h1>\n",
        "<p>A <em>small</em> transpiler for <strong>plain</strong> text.</p>\n",
        "<h2>Lists</h2>\n",
        "<ul><li>first item</li>\n",
        "<li>second with <a href=\"https://example.com\">a link</a></li>\n",
        "</ul>\n",
        "<hr/>\n",
        "<p>Closing <del>words</del> here.\n</p>",
    );
    assert_eq!(html, expected);
}

#[test]
fn test_kitchensink_external_anchor() {
    let source = read_sample_document("docs/samples/kitchensink.md");
    let config = RenderConfig::default().with_external_anchor(true);
    let html = render(&scan(&source), &config);

    assert!(html.contains("<a href=\"https://example.com\" target=\"_blank\">a link</a>"));
}

#[test]
fn test_malformed_degrades_to_paragraphs() {
    let source = read_sample_document("docs/samples/malformed.md");
    let tokens = scan(&source);

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Paragraph, TokenKind::Space, TokenKind::Paragraph]
    );
    assert_eq!(tokens[0].text(), "#no space here");

    let children = tokens[2].children();
    assert_eq!(kinds(children), vec![TokenKind::Italic]);
    assert_eq!(children[0].raw(), "*bold*");

    let html = render(&tokens, &RenderConfig::default());
    assert_eq!(
        html,
        "<p>#no space here</p>\n<p>*unterminated emphasis and [broken link](nowhere\n--\n*<em>bold</em>\n</p>"
    );
}

#[test]
fn test_samples_consume_all_input() {
    for path in ["docs/samples/kitchensink.md", "docs/samples/malformed.md"] {
        let source = read_sample_document(path);
        let joined: String = scan(&source).iter().map(Token::raw).collect();
        assert_eq!(joined, source, "{path}");
    }
}

#[test]
fn test_splice_modes_agree_on_samples() {
    let ordered = RenderConfig::default().with_splice(SpliceMode::Ordered);
    for path in ["docs/samples/kitchensink.md", "docs/samples/malformed.md"] {
        let tokens = scan(&read_sample_document(path));
        assert_eq!(
            render(&tokens, &RenderConfig::default()),
            render(&tokens, &ordered),
            "{path}"
        );
    }
}

#[test]
fn test_spec_link_round_trip() {
    let tokens = scan("[label](http://x)");
    let link = &tokens[0].children()[0];
    assert_eq!(link.kind(), TokenKind::Link);
    assert_eq!(link.text(), "label");
    assert_eq!(link.href(), Some("http://x"));

    insta::assert_snapshot!(
        render(&tokens, &RenderConfig::default()),
        @r#"<p><a href="http://x">label</a></p>"#
    );
    insta::assert_snapshot!(
        render(&tokens, &RenderConfig::default().with_external_anchor(true)),
        @r#"<p><a href="http://x" target="_blank">label</a></p>"#
    );
}
