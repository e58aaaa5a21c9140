//! Debug representations of parsed documents

use insta::assert_snapshot;
use mdlite_babel::{parse, FormatRegistry};

#[test]
fn test_document_json_shape() {
    let doc = parse("**Hi** there\n```\ncode\n```").unwrap();
    let json = serde_json::to_string_pretty(&doc).unwrap();
    assert_snapshot!(json, @r#"
    {
      "blocks": [
        {
          "type": "paragraph",
          "content": [
            {
              "kind": "bold",
              "text": "Hi"
            },
            {
              "kind": "plain",
              "text": " there"
            }
          ]
        },
        {
          "type": "preformatted",
          "content": "code"
        }
      ]
    }
    "#);
}

#[test]
fn test_treeviz_output() {
    let registry = FormatRegistry::default();
    let tree = registry.convert("_Hi_-`you`", "markdown", "treeviz").unwrap();
    assert_snapshot!(tree, @r"
    ⧉ Document (1 blocks)
    └─ ¶ Hi-you
      ├─ 𝐼 Hi
      ├─ ◦ -
      └─ ƒ you
    ");
}
