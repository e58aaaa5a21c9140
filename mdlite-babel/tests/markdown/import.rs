//! Parsing the dialect into the document model

use mdlite_babel::format::Format;
use mdlite_babel::formats::MarkdownFormat;
use mdlite_babel::{parse, Block, FormatRegistry, Span};

#[test]
fn test_parse_builds_blocks_in_order() {
    let doc = parse("Intro\n```\nraw **text**\n```\nOutro `x`").unwrap();
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph(vec![Span::plain("Intro")]),
            Block::Preformatted("raw **text**".to_string()),
            Block::Paragraph(vec![Span::plain("Outro "), Span::monospace("x")]),
        ]
    );
}

#[test]
fn test_format_parse_matches_library_parse() {
    let source = "Hello _there_, **friend**";
    let via_format = MarkdownFormat.parse(source).unwrap();
    assert_eq!(via_format, parse(source).unwrap());
}

#[test]
fn test_reserialized_markup_parses_to_same_document() {
    let registry = FormatRegistry::default();
    let source = "Hello **bold** and _Good_night_ with `_`\n```\n**raw**\n```\nsnake_case end";
    let doc = registry.parse(source, "markdown").unwrap();
    let written = registry.serialize(&doc, "markdown").unwrap();
    assert_eq!(written, source);
    assert_eq!(registry.parse(&written, "markdown").unwrap(), doc);
}

#[test]
fn test_trailing_blank_line_survives_reserialization() {
    let registry = FormatRegistry::default();
    for source in ["a\n\n", "\nIntro _x_\n\n```\ncode\n```\n\nOutro\n\n"] {
        let doc = registry.parse(source, "markdown").unwrap();
        let written = registry.serialize(&doc, "markdown").unwrap();
        assert_eq!(registry.parse(&written, "markdown").unwrap(), doc, "{source:?}");
    }
}

#[test]
fn test_markdown_extensions_are_detected() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("README.markdown"),
        Some("markdown".to_string())
    );
}
