//! Icon mapping for the tree visualization

/// Get the Unicode icon for a given node type
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Paragraph" => "¶",
        "Preformatted" => "𝒱",
        "Text" => "◦",
        "Bold" => "𝐁",
        "Italic" => "𝐼",
        "Monospace" => "ƒ",
        _ => "○",
    }
}
