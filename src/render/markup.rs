//! HTML/SVG emission for the handwriting widget.
//!
//! Output shape (fixed sizing):
//!
//! ```text
//! <div style="position:relative;display:inline-block;width:..px;height:..px;min-width:..;min-height:..">
//!   <style>@keyframes hs-draw-...</style>          (css animation output only)
//!   <svg viewBox="0 0 w h" fill="none" ...>        (absolute overlay, overflow visible)
//!     <path d="..." stroke-dasharray=".." stroke-dashoffset=".."/>
//!   </svg>
//!   <span style="visibility:hidden;display:block;...">children</span>
//! </div>
//! ```

use std::fmt::Write as _;

use crate::{
    animation::{ease::Ease, stroke::TransitionSpan},
    component::props::{AnimationOutput, Children, RenderConfig},
    foundation::math::{Fnv1a64, fmt_num},
    geometry::{
        dimensions::{Dimensions, ViewBox},
        sizing::SizingMode,
    },
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Everything one render pass binds together.
#[derive(Clone, Copy, Debug)]
pub struct MarkupInput<'a> {
    /// Active path data.
    pub d: &'a str,
    /// Measured dimensions of `d`.
    pub dimensions: Dimensions,
    /// Visual configuration.
    pub config: &'a RenderConfig,
    /// Placeholder content.
    pub children: &'a Children,
    /// Dash offset sampled at render time.
    pub dash_offset: f64,
    /// Running transition, if the animation was started.
    pub transition: Option<TransitionSpan>,
}

/// Render the widget as an HTML fragment.
pub fn render_html(input: &MarkupInput<'_>) -> String {
    let cfg = input.config;
    let dims = input.dimensions;
    let tag = cfg.wrapper.as_str();

    let (wrapper_style, svg_size, placeholder_size) = match cfg.sizing {
        SizingMode::Fixed {
            min_width,
            min_height,
        } => (
            format!(
                "position:relative;display:inline-block;width:{};height:{};min-width:{}px;min-height:{}px",
                px_or_auto(dims.width),
                px_or_auto(dims.height),
                fmt_num(min_width),
                fmt_num(min_height)
            ),
            "width:100%;height:100%".to_string(),
            format!(
                ";width:{}px;height:{}px",
                fmt_num(dims.width),
                fmt_num(dims.height)
            ),
        ),
        SizingMode::Fill { width, height } => (
            "position:relative;display:inline-block".to_string(),
            format!("width:{width};height:{height}"),
            String::new(),
        ),
    };

    let animation = match (cfg.animation_output, input.transition) {
        (AnimationOutput::Css, Some(span)) => Some(CssAnimation::new(span, cfg.ease)),
        _ => None,
    };

    let mut out = String::new();
    let _ = writeln!(out, r#"<{tag} style="{wrapper_style}">"#);
    if let Some(anim) = &animation {
        let _ = writeln!(out, "  <style>{}</style>", anim.keyframes());
    }
    let _ = writeln!(
        out,
        r#"  <svg viewBox="{}" fill="none" xmlns="{SVG_NS}" style="position:absolute;top:0;left:0;{svg_size};overflow:visible">"#,
        dims.view_box()
    );
    let _ = writeln!(
        out,
        "    {}",
        path_element(input, animation.as_ref().map(CssAnimation::declaration))
    );
    let _ = writeln!(out, "  </svg>");
    let _ = writeln!(
        out,
        r#"  <span style="visibility:hidden;display:block{placeholder_size}">{}</span>"#,
        children_markup(input.children)
    );
    let _ = write!(out, "</{tag}>");
    out
}

/// Render a standalone SVG document of the current frame.
///
/// The canvas is the measured box (floor-clamped in fixed mode, at least 1x1 otherwise) padded by
/// half the stroke width on every side so the stroke is not cropped.
pub fn render_svg_document(input: &MarkupInput<'_>) -> String {
    let cfg = input.config;
    let dims = match cfg.sizing {
        SizingMode::Fixed {
            min_width,
            min_height,
        } => input.dimensions.with_floor(min_width, min_height),
        SizingMode::Fill { .. } => input.dimensions.with_floor(1.0, 1.0),
    };
    let pad = cfg.stroke_width / 2.0;
    let view_box = ViewBox {
        min_x: -pad,
        min_y: -pad,
        width: dims.width + 2.0 * pad,
        height: dims.height + 2.0 * pad,
    };
    format!(
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="{view_box}" fill="none">{path}</svg>"#,
        w = fmt_num(view_box.width.ceil()),
        h = fmt_num(view_box.height.ceil()),
        path = path_element(input, None),
    )
}

fn path_element(input: &MarkupInput<'_>, animation_decl: Option<String>) -> String {
    let cfg = input.config;
    let style = animation_decl
        .map(|decl| format!(r#" style="{decl}""#))
        .unwrap_or_default();
    format!(
        r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-dasharray="{}" stroke-dashoffset="{}"{style}/>"#,
        escape_xml(input.d),
        escape_xml(&cfg.stroke_color),
        fmt_num(cfg.stroke_width),
        fmt_num(cfg.stroke_dash_array),
        fmt_num(input.dash_offset),
    )
}

fn children_markup(children: &Children) -> String {
    match children {
        Children::Text(text) => escape_xml(text),
        Children::Html(html) => html.clone(),
    }
}

fn px_or_auto(v: f64) -> String {
    if v > 0.0 {
        format!("{}px", fmt_num(v))
    } else {
        "auto".to_string()
    }
}

/// CSS rendition of a running transition.
///
/// A negative `animation-delay` equal to the elapsed time keeps re-rendered markup in step with
/// the controller instead of replaying from the start.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CssAnimation {
    name: String,
    from: f64,
    duration_secs: f64,
    elapsed_secs: f64,
    timing: &'static str,
}

impl CssAnimation {
    pub(crate) fn new(span: TransitionSpan, ease: Ease) -> Self {
        Self {
            name: keyframes_name(span.from),
            from: span.from,
            duration_secs: span.duration.as_secs_f64(),
            elapsed_secs: span.elapsed.as_secs_f64(),
            timing: ease.css_timing_function(),
        }
    }

    pub(crate) fn keyframes(&self) -> String {
        format!(
            "@keyframes {}{{from{{stroke-dashoffset:{}}}to{{stroke-dashoffset:0}}}}",
            self.name,
            fmt_num(self.from)
        )
    }

    pub(crate) fn declaration(&self) -> String {
        let mut decl = format!(
            "animation:{} {}s {} both",
            self.name,
            fmt_num(self.duration_secs),
            self.timing
        );
        if self.elapsed_secs > 0.0 {
            let _ = write!(decl, ";animation-delay:-{}s", fmt_num(self.elapsed_secs));
        }
        decl
    }
}

/// Deterministic keyframes name for a transition starting at `from`.
pub(crate) fn keyframes_name(from: f64) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"hs-draw");
    h.write_u64(from.to_bits());
    format!("hs-draw-{:016x}", h.finish())
}

/// Escape text for use in XML/HTML content and double-quoted attributes.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/markup.rs"]
mod tests;
