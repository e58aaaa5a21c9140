//! CLI-specific transforms
//!
//! Debug views of a parsed document, selected by name in `mdlite inspect`:
//!
//! - `ast-json`: the document model as pretty-printed JSON
//! - `ast-treeviz`: tree visualization with Unicode icons
//! - `ast-markdown`: the document written back out as markup

use mdlite_babel::formats::markdown::serializer::serialize_to_markdown;
use mdlite_babel::formats::treeviz::to_treeviz_str;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-json", "ast-treeviz", "ast-markdown"];

/// Execute a named transform on a source string
///
/// Parse errors are returned with their fixed message, e.g. `Unclosed tag was found`.
pub fn execute_transform(source: &str, transform_name: &str) -> Result<String, String> {
    let doc = mdlite_babel::parse(source).map_err(|e| e.to_string())?;

    match transform_name {
        "ast-json" => {
            let json = serde_json::to_string_pretty(&doc)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            Ok(format!("{json}\n"))
        }
        "ast-treeviz" => Ok(to_treeviz_str(&doc)),
        "ast-markdown" => Ok(format!("{}\n", serialize_to_markdown(&doc))),
        other => Err(format!("Unknown transform '{other}'")),
    }
}
