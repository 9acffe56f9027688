use std::time::Duration;

use super::*;
use crate::geometry::sizing::Length;

fn input<'a>(cfg: &'a RenderConfig, children: &'a Children) -> MarkupInput<'a> {
    MarkupInput {
        d: "M0 0 L100 100",
        dimensions: Dimensions::new(100.0, 100.0),
        config: cfg,
        children,
        dash_offset: 2000.0,
        transition: None,
    }
}

#[test]
fn fixed_mode_sizes_wrapper_and_placeholder() {
    let cfg = RenderConfig {
        animation_output: AnimationOutput::Snapshot,
        ..RenderConfig::default()
    };
    let children = Children::text("Hello");
    let html = render_html(&input(&cfg, &children));

    assert!(html.starts_with(r#"<div style="position:relative;display:inline-block;width:100px;height:100px;min-width:100px;min-height:50px">"#));
    assert!(html.contains(r#"viewBox="0 0 100 100""#));
    assert!(html.contains("overflow:visible"));
    assert!(html.contains(
        r##"stroke="#000" stroke-width="2" fill="none" stroke-dasharray="2000" stroke-dashoffset="2000""##
    ));
    assert!(html.contains(
        r#"<span style="visibility:hidden;display:block;width:100px;height:100px">Hello</span>"#
    ));
    assert!(html.ends_with("</div>"));
    assert!(!html.contains("<style>"));
}

#[test]
fn degenerate_box_falls_back_to_auto() {
    let cfg = RenderConfig::default();
    let children = Children::text("x");
    let mut inp = input(&cfg, &children);
    inp.dimensions = Dimensions::ZERO;
    let html = render_html(&inp);
    assert!(html.contains("width:auto;height:auto;min-width:100px;min-height:50px"));
    assert!(html.contains(r#"viewBox="0 0 0 0""#));
}

#[test]
fn fill_mode_uses_caller_lengths_and_unsized_placeholder() {
    let cfg = RenderConfig {
        sizing: SizingMode::Fill {
            width: Length::Px(320.0),
            height: Length::FULL,
        },
        wrapper: crate::component::props::WrapperTag::new("h1").unwrap(),
        ..RenderConfig::default()
    };
    let children = Children::text("Title");
    let html = render_html(&input(&cfg, &children));
    assert!(html.starts_with(r#"<h1 style="position:relative;display:inline-block">"#));
    assert!(html.contains("position:absolute;top:0;left:0;width:320px;height:100%;overflow:visible"));
    assert!(html.contains(r#"<span style="visibility:hidden;display:block">Title</span>"#));
    assert!(html.ends_with("</h1>"));
    assert!(!html.contains("min-width"));
}

#[test]
fn children_and_attributes_are_escaped() {
    let cfg = RenderConfig {
        stroke_color: r#"red" onload="x"#.to_string(),
        ..RenderConfig::default()
    };
    let children = Children::text("<b>Tom & Jerry</b>");
    let html = render_html(&input(&cfg, &children));
    assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
    assert!(html.contains(r#"stroke="red&quot; onload=&quot;x""#));

    let trusted = Children::Html("<em>ok</em>".to_string());
    assert!(render_html(&input(&cfg, &trusted)).contains("<em>ok</em>"));
}

#[test]
fn css_output_replays_running_transition() {
    let cfg = RenderConfig::default();
    let children = Children::text("Hello");
    let mut inp = input(&cfg, &children);
    inp.transition = Some(TransitionSpan {
        from: 2000.0,
        duration: Duration::from_secs(3),
        elapsed: Duration::from_millis(500),
    });
    let html = render_html(&inp);
    let name = keyframes_name(2000.0);
    assert!(html.contains(&format!(
        "<style>@keyframes {name}{{from{{stroke-dashoffset:2000}}to{{stroke-dashoffset:0}}}}</style>"
    )));
    assert!(html.contains(&format!(
        "animation:{name} 3s ease-in-out both;animation-delay:-0.5s"
    )));
}

#[test]
fn keyframes_name_is_deterministic() {
    assert_eq!(keyframes_name(2000.0), keyframes_name(2000.0));
    assert_ne!(keyframes_name(2000.0), keyframes_name(1000.0));
    assert!(keyframes_name(1.0).starts_with("hs-draw-"));
}

#[test]
fn svg_document_is_padded_and_floored() {
    let cfg = RenderConfig::default();
    let children = Children::text("x");
    let mut inp = input(&cfg, &children);
    inp.dimensions = Dimensions::new(40.0, 10.0);
    inp.dash_offset = 0.0;
    let svg = render_svg_document(&inp);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="102" height="52" viewBox="-1 -1 102 52""#));
    assert!(svg.contains(r#"stroke-dashoffset="0""#));
    assert!(!svg.contains("style="));
}
