use std::path::Path;

use anyhow::Context;

use crate::{
    animation::{ease::Ease, stroke::validate_dash_array},
    foundation::{
        error::{HandscriptError, HandscriptResult},
        math::MARKUP_RESOLUTION,
    },
    geometry::sizing::SizingMode,
    path::resolve::PathSpec,
};

/// Content rendered inside the hidden sizing placeholder.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Children {
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Html(String),
}

impl Children {
    /// Plain-text children.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

/// Tag name of the wrapper element.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WrapperTag(String);

impl WrapperTag {
    /// Validate a tag name: ASCII letter first, then letters, digits or `-`.
    pub fn new(tag: impl Into<String>) -> HandscriptResult<Self> {
        let tag = tag.into();
        let mut chars = tag.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(HandscriptError::validation(format!(
                "invalid wrapper tag '{tag}'"
            )));
        }
        Ok(Self(tag.to_ascii_lowercase()))
    }

    /// Tag name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WrapperTag {
    fn default() -> Self {
        Self("div".to_string())
    }
}

impl TryFrom<String> for WrapperTag {
    type Error = HandscriptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WrapperTag> for String {
    fn from(value: WrapperTag) -> Self {
        value.0
    }
}

/// How the animation is expressed in emitted markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationOutput {
    /// Scoped CSS keyframes so the markup animates on its own in a browser.
    #[default]
    Css,
    /// Static `stroke-dashoffset` sampled at render time.
    Snapshot,
}

/// Visual configuration shared by every render pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Stroke color (any CSS color).
    pub stroke_color: String,
    /// Stroke width in user units.
    pub stroke_width: f64,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Dash-array length; also the initial (hidden) dash offset.
    pub stroke_dash_array: f64,
    /// Easing of the draw transition.
    pub ease: Ease,
    /// Wrapper element tag.
    pub wrapper: WrapperTag,
    /// Viewport sizing policy.
    pub sizing: SizingMode,
    /// Animation rendition in markup.
    pub animation_output: AnimationOutput,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stroke_color: "#000".to_string(),
            stroke_width: 2.0,
            duration: 3.0,
            stroke_dash_array: 2000.0,
            ease: Ease::InOut,
            wrapper: WrapperTag::default(),
            sizing: SizingMode::default(),
            animation_output: AnimationOutput::default(),
        }
    }
}

impl RenderConfig {
    /// Reject values that cannot be rendered.
    pub fn validate(&self) -> HandscriptResult<()> {
        if self.stroke_color.trim().is_empty() {
            return Err(HandscriptError::validation("stroke_color must be non-empty"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(HandscriptError::validation(
                "stroke_width must be finite and >= 0",
            ));
        }
        if self.stroke_width > 0.0 && self.stroke_width < MARKUP_RESOLUTION {
            return Err(HandscriptError::validation(format!(
                "stroke_width must be 0 or >= {MARKUP_RESOLUTION}"
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(HandscriptError::validation(
                "duration must be finite and >= 0",
            ));
        }
        validate_dash_array(self.stroke_dash_array)?;
        self.sizing.validate()
    }
}

/// Instantiation props of the handwriting widget.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Props {
    /// Real content carried by the hidden placeholder.
    pub children: Children,
    /// Literal SVG path data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// External SVG document (URL or file path) to take the path from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_file: Option<String>,
    /// Visual configuration.
    #[serde(flatten)]
    pub config: RenderConfig,
}

impl Props {
    /// Props with default configuration and the built-in path.
    pub fn new(children: Children) -> Self {
        Self {
            children,
            path: None,
            svg_file: None,
            config: RenderConfig::default(),
        }
    }

    /// Set the literal path.
    pub fn with_path(mut self, d: impl Into<String>) -> Self {
        self.path = Some(d.into());
        self
    }

    /// Set the external SVG reference.
    pub fn with_svg_file(mut self, reference: impl Into<String>) -> Self {
        self.svg_file = Some(reference.into());
        self
    }

    /// Replace the visual configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Path inputs for the resolver. A blank `svg_file` counts as not supplied.
    pub fn path_spec(&self) -> PathSpec {
        PathSpec {
            literal: self.path.clone(),
            external: self.svg_file.clone().filter(|s| !s.trim().is_empty()),
        }
    }

    /// Validate the whole prop set.
    pub fn validate(&self) -> HandscriptResult<()> {
        self.config.validate()
    }

    /// Parse props from JSON text.
    pub fn from_json_str(json: &str) -> HandscriptResult<Self> {
        serde_json::from_str(json).map_err(|e| HandscriptError::serde(e.to_string()))
    }

    /// Read props from a JSON file.
    pub fn from_path(path: &Path) -> HandscriptResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read props '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/props.rs"]
mod tests;
