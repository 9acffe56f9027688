use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "handscript", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the widget as an HTML fragment.
    Render(RenderArgs),
    /// Rasterize one frame of the draw animation as a PNG.
    Frame(FrameArgs),
    /// Merge the cjs/esm build outputs of a dist directory into one flat layout.
    Package(PackageArgs),
}

#[derive(Parser, Debug)]
struct WidgetArgs {
    /// Props JSON (children, path, svg_file, stroke_color, ...).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plain-text children; overrides the config.
    #[arg(long)]
    text: Option<String>,

    /// Literal SVG path data; overrides the config.
    #[arg(long)]
    path: Option<String>,

    /// External SVG (URL or file path relative to the config); overrides the config.
    #[arg(long)]
    svg_file: Option<String>,

    /// Timeline offset in seconds to sample the animation at.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// How long to wait for an external SVG before rendering with the fallback path.
    #[arg(long, default_value_t = 5000)]
    wait_ms: u64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    widget: WidgetArgs,

    /// Output HTML path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    widget: WidgetArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixel scale applied to the SVG size.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct PackageArgs {
    /// Dist directory holding the cjs/ and esm/ build outputs.
    #[arg(long, default_value = "dist")]
    dist: PathBuf,

    /// Optional layout JSON overriding directory and file names.
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Package(args) => cmd_package(args),
    }
}

fn load_props(args: &WidgetArgs) -> anyhow::Result<(handscript::Props, PathBuf)> {
    let (mut props, root) = match &args.config {
        Some(path) => {
            let props = handscript::Props::from_path(path)?;
            let root = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            (props, root)
        }
        None => {
            let text = args
                .text
                .clone()
                .context("either --config or --text is required")?;
            (
                handscript::Props::new(handscript::Children::Text(text)),
                PathBuf::from("."),
            )
        }
    };

    if let Some(text) = &args.text {
        props.children = handscript::Children::Text(text.clone());
    }
    if let Some(path) = &args.path {
        props.path = Some(path.clone());
    }
    if let Some(svg_file) = &args.svg_file {
        props.svg_file = Some(svg_file.clone());
    }
    Ok((props, root))
}

fn mounted_widget(args: &WidgetArgs) -> anyhow::Result<handscript::HandwritingText> {
    let (props, root) = load_props(args)?;
    let mut widget = handscript::HandwritingText::with_root(props, root)?;
    widget.mount(Duration::ZERO)?;
    if widget.pending_fetches() > 0 {
        widget.wait_for_fetch(Duration::from_millis(args.wait_ms));
    }
    Ok(widget)
}

fn sample_at(args: &WidgetArgs) -> anyhow::Result<Duration> {
    Ok(handscript::duration_from_secs(args.at)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let at = sample_at(&args.widget)?;
    let mut widget = mounted_widget(&args.widget)?;
    let html = widget.render(at);

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, format!("{html}\n"))
                .with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").context("write html to stdout")?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let at = sample_at(&args.widget)?;
    let mut widget = mounted_widget(&args.widget)?;
    let svg = widget.render_svg(at);
    let raster = handscript::rasterize_svg(&svg, args.scale)?;
    raster.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_package(args: PackageArgs) -> anyhow::Result<()> {
    let layout = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read layout '{}'", path.display()))?;
            serde_json::from_str::<handscript::PackageLayout>(&text)
                .with_context(|| format!("parse layout '{}'", path.display()))?
        }
        None => handscript::PackageLayout::default(),
    };
    let report = handscript::merge_dist(&args.dist, &layout)?;

    eprintln!(
        "packaged {} ({} files)",
        args.dist.display(),
        report.files_copied
    );
    Ok(())
}
