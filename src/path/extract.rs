use crate::foundation::error::{HandscriptError, HandscriptResult};

/// Extract the `d` attribute of the first `<path>` element (document order) of an SVG document.
///
/// Everything else in the document is ignored. A document without a path element, or whose
/// first path has no usable `d`, is an error.
pub fn extract_first_path_d(svg_text: &str) -> HandscriptResult<String> {
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(svg_text, opts)
        .map_err(|e| HandscriptError::svg(format!("malformed svg document: {e}")))?;

    let node = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name("path"))
        .ok_or_else(|| HandscriptError::svg("svg document has no <path> element"))?;

    let d = node
        .attribute("d")
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| HandscriptError::svg("first <path> element has no 'd' attribute"))?;

    Ok(d.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/path/extract.rs"]
mod tests;
