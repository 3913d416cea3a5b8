//! # quill
//!
//! A small transpiler from a constrained markdown-like text format to HTML.
//!
//! The work happens in two fully decoupled stages:
//!
//! - [scanning](quill::scanning) turns source text into a tree of [Token]s.
//! - [rendering](quill::rendering) walks that tree and produces an HTML string.
//!
//! ```ignore
//! let tokens = quill::scan("# Title\n\nHello *world*");
//! let html = quill::render(&tokens, &quill::RenderConfig::default());
//! assert_eq!(html, "<h1>Title</h1>\n<p>Hello <em>world</em></p>");
//! ```

pub mod quill;

pub use quill::config::{Loader, QuillConfig};
pub use quill::error::{QuillError, Result};
pub use quill::processor::{Processed, Processor};
pub use quill::rendering::{render, HtmlRenderer, RenderConfig, SpliceMode};
pub use quill::scanning::scan;
pub use quill::token::{Properties, Token, TokenKind};
