//! HTML serializer for token trees

use super::{RenderConfig, SpliceMode};
use crate::quill::token::{Token, TokenKind};

/// Renders token trees to HTML with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a token sequence, left to right, into a single string
    pub fn render(&self, tokens: &[Token]) -> String {
        let html: String = tokens.iter().map(|token| self.compile_token(token)).collect();
        tracing::debug!(tokens = tokens.len(), bytes = html.len(), "render complete");
        html
    }

    fn compile_token(&self, token: &Token) -> String {
        match token.kind() {
            TokenKind::HorizontalRule => singleton("hr"),
            TokenKind::Link => self.compile_link(token),
            kind => match kind.html_tag() {
                Some(tag) => wrap(&self.compile_children(token), tag),
                None => "\n".to_string(),
            },
        }
    }

    fn compile_link(&self, token: &Token) -> String {
        let href = escape_attribute(token.href().unwrap_or_default());
        let target = if self.config.external_anchor {
            " target=\"_blank\""
        } else {
            ""
        };
        format!(
            "<a href=\"{href}\"{target}>{}</a>",
            self.compile_children(token)
        )
    }

    /// The token's text with each child's `raw` replaced by the child's HTML
    fn compile_children(&self, token: &Token) -> String {
        match self.config.splice {
            SpliceMode::FirstMatch => self.splice_first_match(token),
            SpliceMode::Ordered => self.splice_ordered(token),
        }
    }

    fn splice_first_match(&self, token: &Token) -> String {
        let mut text = token.text().to_string();
        for child in token.children() {
            if child.raw().is_empty() {
                continue;
            }
            let html = self.compile_token(child);
            text = text.replacen(child.raw(), &html, 1);
        }
        text
    }

    fn splice_ordered(&self, token: &Token) -> String {
        let mut out = String::with_capacity(token.text().len());
        let mut rest = token.text();
        for child in token.children() {
            if child.raw().is_empty() {
                continue;
            }
            let Some(at) = rest.find(child.raw()) else {
                tracing::trace!(raw = child.raw(), "child not found in parent text");
                continue;
            };
            out.push_str(&rest[..at]);
            out.push_str(&self.compile_token(child));
            rest = &rest[at + child.raw().len()..];
        }
        out.push_str(rest);
        out
    }
}

fn singleton(tag: &str) -> String {
    format!("<{tag}/>")
}

fn wrap(text: &str, tag: &str) -> String {
    format!("<{tag}>{text}</{tag}>")
}

fn escape_attribute(value: &str) -> String {
    value.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quill::scanning::scan;
    use crate::quill::token::Properties;

    fn to_html(source: &str) -> String {
        HtmlRenderer::default().render(&scan(source))
    }

    fn to_html_with(source: &str, config: RenderConfig) -> String {
        HtmlRenderer::new(config).render(&scan(source))
    }

    #[test]
    fn test_full_pipeline() {
        assert_eq!(
            to_html("# Title\n\nHello *world*"),
            "<h1>Title</h1>\n<p>Hello <em>world</em></p>"
        );
    }

    #[test]
    fn test_headers() {
        insta::assert_snapshot!(to_html("### Third"), @"<h3>Third</h3>");
        insta::assert_snapshot!(to_html("###### Deep"), @"<h4>Deep</h4>");
    }

    #[test]
    fn test_header_children_are_rendered() {
        insta::assert_snapshot!(to_html("# A **big** deal"), @"<h1>A <strong>big</strong> deal</h1>");
    }

    #[test]
    fn test_emphasis_kinds() {
        insta::assert_snapshot!(
            to_html("*i* **b** ~~s~~"),
            @"<p><em>i</em> <strong>b</strong> <del>s</del></p>"
        );
    }

    #[test]
    fn test_link() {
        insta::assert_snapshot!(to_html("[label](http://x)"), @r#"<p><a href="http://x">label</a></p>"#);
    }

    #[test]
    fn test_external_link() {
        let config = RenderConfig::default().with_external_anchor(true);
        assert_eq!(
            to_html_with("[label](http://x)", config),
            "<p><a href=\"http://x\" target=\"_blank\">label</a></p>"
        );
    }

    #[test]
    fn test_link_label_children() {
        assert_eq!(
            to_html("[the *docs*](/d)"),
            "<p><a href=\"/d\">the <em>docs</em></a></p>"
        );
    }

    #[test]
    fn test_href_quotes_are_escaped() {
        assert_eq!(
            to_html("[x](a\"b)"),
            "<p><a href=\"a&quot;b\">x</a></p>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            to_html("- a\n- b\n"),
            "<ul><li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(to_html("---\n"), "<hr/>\n");
    }

    #[test]
    fn test_short_rule_is_paragraph() {
        assert_eq!(to_html("--\n"), "<p>--\n</p>");
    }

    #[test]
    fn test_whitespace_runs_render_one_newline() {
        assert_eq!(to_html("a\n\n\n\nb"), "<p>a</p>\n<p>b</p>");
        assert_eq!(to_html("   \n\n  "), "\n");
    }

    #[test]
    fn test_soft_break_folds_into_space() {
        insta::assert_snapshot!(to_html("a\n   b *c*"), @"<p>a b <em>c</em></p>");
    }

    #[test]
    fn test_unbalanced_emphasis_keeps_literal_delimiter() {
        insta::assert_snapshot!(to_html("**bold*"), @"<p>*<em>bold</em></p>");
    }

    #[test]
    fn test_overlong_runs_keep_outer_delimiters() {
        insta::assert_snapshot!(to_html("****bold****"), @"<p>**<strong>bold</strong>**</p>");
    }

    #[test]
    fn test_repeated_children_replace_in_order() {
        insta::assert_snapshot!(to_html("*a* and *a*"), @"<p><em>a</em> and <em>a</em></p>");
    }

    #[test]
    fn test_first_match_splice_can_hit_earlier_output() {
        assert_eq!(
            to_html("[a](*b*) *b*"),
            "<p><a href=\"<em>b</em>\">a</a> *b*</p>"
        );
    }

    #[test]
    fn test_ordered_splice_searches_after_previous_child() {
        let config = RenderConfig::default().with_splice(SpliceMode::Ordered);
        assert_eq!(
            to_html_with("[a](*b*) *b*", config),
            "<p><a href=\"*b*\">a</a> <em>b</em></p>"
        );
    }

    #[test]
    fn test_ordered_splice_matches_first_match_on_plain_documents() {
        let source = "# T *x*\n\nsome **bold** and [l](u) text\n- one *i*\n- two\n";
        let ordered = RenderConfig::default().with_splice(SpliceMode::Ordered);
        assert_eq!(to_html(source), to_html_with(source, ordered));
    }

    #[test]
    fn test_plain_text_renders_newline() {
        let token = Token::leaf(TokenKind::PlainText, "x", "x");
        assert_eq!(HtmlRenderer::default().render(&[token]), "\n");
    }

    #[test]
    fn test_missing_child_is_skipped() {
        let child = Token::leaf(TokenKind::Italic, "*zz*", "zz");
        let paragraph = Token::new(
            TokenKind::Paragraph,
            "abc",
            "abc",
            vec![child],
            Properties::None,
        );
        let first = HtmlRenderer::default().render(std::slice::from_ref(&paragraph));
        let ordered = HtmlRenderer::new(RenderConfig::default().with_splice(SpliceMode::Ordered))
            .render(std::slice::from_ref(&paragraph));
        assert_eq!(first, "<p>abc</p>");
        assert_eq!(ordered, "<p>abc</p>");
    }
}
