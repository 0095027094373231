use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use roundview_engine::coords::Vec2;
use roundview_engine::logging::{LoggingConfig, init_logging};
use roundview_engine::paint::Color;
use roundview_ui::dsl::{DslBindings, DslLoader, FileAssets};
use roundview_ui::metrics::DisplayMetrics;
use roundview_ui::scene::UiScene;

/// Render every top-level view of a `.mkml` layout to a PNG file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Layout to render
    #[arg(name = "layout")]
    layout: PathBuf,

    /// Viewport width in device pixels
    #[arg(long, default_value_t = 1080.0)]
    width: f32,

    /// Viewport height in device pixels
    #[arg(long, default_value_t = 1920.0)]
    height: f32,

    /// Device pixels per dp
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Directory image sources are resolved against [default: the layout's directory]
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long = "out", default_value = "out")]
    out: PathBuf,

    /// Debug logging for the roundview crates
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    if cli.density.is_nan() || cli.density <= 0.0 {
        bail!("--density must be positive, got {}", cli.density);
    }

    let src = fs::read_to_string(&cli.layout)
        .with_context(|| format!("failed to read {}", cli.layout.display()))?;
    let assets = cli
        .assets
        .clone()
        .unwrap_or_else(|| cli.layout.parent().map(Path::to_path_buf).unwrap_or_default());

    let bindings = DslBindings::new(FileAssets::new(assets)).with_metrics(DisplayMetrics::new(cli.density));
    let views = DslLoader::new()
        .load(&src, &bindings)
        .with_context(|| format!("failed to build {}", cli.layout.display()))?;

    fs::create_dir_all(&cli.out).with_context(|| format!("failed to create {}", cli.out.display()))?;
    let stem = cli.layout.file_stem().and_then(|s| s.to_str()).unwrap_or("view");
    let viewport = Vec2::new(cli.width, cli.height);

    let mut scene = UiScene::new();
    for (i, view) in views.iter().enumerate() {
        let name = view.id.clone().unwrap_or_else(|| format!("{stem}-{i}"));
        let Some(canvas) = scene.render(&view.element, viewport, Color::transparent()) else {
            log::warn!("{name}: laid out to an empty box, nothing written");
            continue;
        };
        let path = cli.out.join(format!("{name}.png"));
        canvas.save_png(&path)?;
        log::info!("wrote {} ({}x{})", path.display(), canvas.width(), canvas.height());
    }

    Ok(())
}
