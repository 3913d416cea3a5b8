//! Token kinds
//!
//!     Every token the scanner produces carries exactly one of these kinds. The set is closed:
//!     block kinds (paragraph, headers, rule, list, whitespace) and inline kinds (emphasis,
//!     strikethrough, link) live in the same enum because both appear in the same tree.
//!
//! Structural Signals
//!
//!     The scanner never picks a kind by string. It hands over the structural signal it
//!     measured and lets this module decide:
//!
//!         - Headers: the count of leading `#` characters, see [TokenKind::header].
//!         - Emphasis: the delimiter character plus the length of the opening and closing
//!           runs, see [TokenKind::emphasis].

/// The type of a scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Default block: any run of text up to a blank line
    Paragraph,
    /// `# text`
    Header1,
    /// `## text`
    Header2,
    /// `### text`
    Header3,
    /// `#### text` and deeper
    Header4,
    /// `**text**`, `__text__`
    Bold,
    /// `*text*`, `_text_`, and any emphasis where one side has a single delimiter
    Italic,
    /// `~~text~~`
    Strikethrough,
    /// `---` on its own line
    HorizontalRule,
    /// A run of spaces and newlines between blocks
    Space,
    /// `[label](href)`
    Link,
    /// A run of `- item` lines
    UnorderedList,
    /// One `- item` line inside an [TokenKind::UnorderedList]
    ListItem,
    /// Literal text. Never produced by the scanner, rendered as a line break.
    PlainText,
}

impl TokenKind {
    /// Map a count of leading `#` characters to a header kind.
    ///
    /// There are only four levels, anything deeper collapses into [TokenKind::Header4].
    pub fn header(depth: usize) -> Self {
        match depth {
            0 | 1 => TokenKind::Header1,
            2 => TokenKind::Header2,
            3 => TokenKind::Header3,
            _ => TokenKind::Header4,
        }
    }

    /// Pick the emphasis kind from the delimiter and the opening/closing run lengths.
    ///
    /// `~` always means strikethrough. For `*` and `_`, a single delimiter on either
    /// side makes the span italic, otherwise it is bold.
    pub fn emphasis(delimiter: char, pre_count: usize, post_count: usize) -> Self {
        if delimiter == '~' {
            TokenKind::Strikethrough
        } else if pre_count == 1 || post_count == 1 {
            TokenKind::Italic
        } else {
            TokenKind::Bold
        }
    }

    /// The HTML element a token of this kind is wrapped in.
    ///
    /// `None` means the kind has no element and renders as a plain line break.
    pub fn html_tag(self) -> Option<&'static str> {
        match self {
            TokenKind::Paragraph => Some("p"),
            TokenKind::Header1 => Some("h1"),
            TokenKind::Header2 => Some("h2"),
            TokenKind::Header3 => Some("h3"),
            TokenKind::Header4 => Some("h4"),
            TokenKind::Bold => Some("strong"),
            TokenKind::Italic => Some("em"),
            TokenKind::Strikethrough => Some("del"),
            TokenKind::HorizontalRule => Some("hr"),
            TokenKind::Link => Some("a"),
            TokenKind::UnorderedList => Some("ul"),
            TokenKind::ListItem => Some("li"),
            TokenKind::Space | TokenKind::PlainText => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Paragraph => "paragraph",
            TokenKind::Header1 => "header1",
            TokenKind::Header2 => "header2",
            TokenKind::Header3 => "header3",
            TokenKind::Header4 => "header4",
            TokenKind::Bold => "bold",
            TokenKind::Italic => "italic",
            TokenKind::Strikethrough => "strikethrough",
            TokenKind::HorizontalRule => "horizontal-rule",
            TokenKind::Space => "space",
            TokenKind::Link => "link",
            TokenKind::UnorderedList => "unordered-list",
            TokenKind::ListItem => "list-item",
            TokenKind::PlainText => "plain-text",
        };
        write!(f, "{name}")
    }
}
