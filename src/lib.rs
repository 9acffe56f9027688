//! handscript renders handwriting-style text: an SVG stroke that draws itself over time on top of
//! an invisible copy of the real text.
//!
//! # Pipeline overview
//!
//! Every render pass of a [`HandwritingText`] runs the same linear pipeline:
//!
//! 1. **Resolve**: literal path, built-in [`DEFAULT_PATH`], or the `d` of the first `<path>` of
//!    an external SVG fetched in the background ([`PathResolver`])
//! 2. **Measure**: bounding box and `viewBox` of the active path ([`measure_path`], memoized)
//! 3. **Animate**: stroke-dash-offset from the dash-array length to zero ([`StrokeAnimation`])
//! 4. **Render**: wrapper, absolute SVG overlay and hidden sizing placeholder ([`render_html`])
//!
//! The crate also ships the dist packaging step ([`merge_dist`]) and a CLI (`handscript`).
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-driven**: the widget never reads a clock; callers pass timeline offsets.
//! - **Degrade, don't fail**: external SVG failures are logged and the fallback path stays active.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod component;
mod fetch;
mod foundation;
mod geometry;
mod package;
mod path;
mod render;

pub use animation::ease::Ease;
pub use animation::stroke::{Phase, StrokeAnimation, TransitionSpan, duration_from_secs};
pub use component::props::{AnimationOutput, Children, Props, RenderConfig, WrapperTag};
pub use component::widget::{HandwritingText, UpdateEffects};
pub use fetch::fetcher::{AutoFetcher, FileFetcher, HttpFetcher, SvgFetcher};
pub use fetch::task::{FetchOutcome, FetchQueue};
pub use foundation::error::{HandscriptError, HandscriptResult};
pub use geometry::dimensions::{DimensionCache, Dimensions, ViewBox, measure_path};
pub use geometry::sizing::{Length, SizingMode};
pub use package::merge::{PackageLayout, PackageReport, merge_dist};
pub use path::default::DEFAULT_PATH;
pub use path::extract::extract_first_path_d;
pub use path::resolve::{ActivePath, PathResolver, PathSource, PathSpec};
pub use render::markup::{MarkupInput, render_html, render_svg_document};
pub use render::raster::{Raster, rasterize_svg};
