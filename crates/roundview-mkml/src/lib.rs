//! Lexer, parser, and AST for the **roundview attribute markup** (`.mkml`).
//!
//! A document declares one or more views with their construction-time
//! attributes. Lengths may carry a unit (`12dp`, `4px`); the widget layer
//! converts them to device pixels using the display density.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `DslDocument`, `Node`, `Attr`, `Value`, `Unit` |
//! | [`error`] | `ParseError`, `ErrorKind` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use roundview_mkml::parse_str;
//!
//! let src = r#"
//!     RoundImageView "avatar.png" {
//!         shape: round
//!         radius: 12dp
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.nodes[0].view, "RoundImageView");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{DslDocument, Node, Unit, Value};
pub use error::{ErrorKind, ParseError};
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> DslDocument { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn bare_view() { ok("RoundImageView"); }
    #[test] fn empty_block() { ok("RoundImageView { }"); }

    #[test]
    fn full_round_rect_declaration() {
        let doc = ok(r#"
            RoundImageView "cover.jpg" {
                id: cover
                shape: round
                radius: 12dp
                left_top_radius: 0
                right_bottom_radius: 8px
                aspect_ratio: 1.5
                fit_entire_image: false
            }
        "#);
        let node = &doc.nodes[0];
        assert_eq!(node.content.as_deref(), Some("cover.jpg"));
        assert_eq!(node.attr_str("shape"), Some("round"));
        assert_eq!(node.attr("radius"), Some(&Value::Dimension(12.0, Unit::Dp)));
        assert_eq!(node.attr_f32("left_top_radius"), Some(0.0));
        assert_eq!(node.attr("right_bottom_radius"), Some(&Value::Dimension(8.0, Unit::Px)));
        assert_eq!(node.attr_f32("aspect_ratio"), Some(1.5));
        assert_eq!(node.attr_bool("fit_entire_image"), Some(false));
    }

    #[test]
    fn several_top_level_views() {
        let doc = ok(r#"RoundImageView "a.png" { }  RoundImageView "b.png" { shape: circle }"#);
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[1].content.as_deref(), Some("b.png"));
    }

    #[test]
    fn nested_views_are_children() {
        let doc = ok("Gallery { gap: 4  RoundImageView { }  RoundImageView { } }");
        assert_eq!(doc.nodes[0].children.len(), 2);
        assert_eq!(doc.nodes[0].attr_f32("gap"), Some(4.0));
    }

    #[test]
    fn last_duplicate_attribute_wins() {
        let doc = ok("RoundImageView { radius: 4  radius: 9 }");
        assert_eq!(doc.nodes[0].attr_f32("radius"), Some(9.0));
    }

    #[test] fn negative_number() { ok("RoundImageView { aspect_ratio: -1 }"); }
    #[test] fn string_escape() { ok(r#"RoundImageView "say \"hi\".png""#); }

    #[test]
    fn err_empty_document() {
        assert_eq!(err("  // nothing here\n").kind, ErrorKind::EmptyDocument);
    }

    #[test]
    fn err_unclosed_block() {
        assert_eq!(err("RoundImageView { radius: 4").kind, ErrorKind::UnclosedBlock);
    }

    #[test]
    fn err_missing_value_reports_position() {
        let e = err("RoundImageView {\n    radius: }");
        assert_eq!(e.line, 2);
        assert!(matches!(e.kind, ErrorKind::Expected { expected: "a value", .. }));
    }

    #[test] fn err_unclosed_string() { err(r#"RoundImageView "oops { }"#); }
    #[test] fn err_double_colon() { err("RoundImageView { radius: : 8 }"); }
}
