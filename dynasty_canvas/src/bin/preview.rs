//! Headless preview of the dynasty timeline background.
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load the built-in catalog and theme registry, plus an optional particle config
//! 3. Print the card layout and year markers as JSON
//! 4. Hover through every dynasty with a running animator at 60 fps
//! 5. Write the final frame as SVG
//!
//! Usage: `preview [OUTPUT.svg] [PARTICLES.toml]`

use std::sync::Arc;

use dynasty_canvas::{FrameLoop, LocalHost, ParticleAnimator, ParticleConfig, SvgSurface};
use dynasty_rules::{
    compute_layout_parameters, content_width, place_cards, year_ticks, DynastyCatalog,
    LayoutConfig, ThemeRegistry, ThemeSelection,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

const VIEWPORT: (u32, u32) = (1280, 720);
const FRAMES_PER_DYNASTY: u64 = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "preview.svg".to_string());
    let config = match args.next() {
        Some(path) => ParticleConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => ParticleConfig::default(),
    };

    let catalog = DynastyCatalog::builtin();
    let registry = Arc::new(ThemeRegistry::builtin());
    let layout_config = LayoutConfig::default();

    let spans = catalog.spans();
    let params = compute_layout_parameters(&spans)?;
    let cards = place_cards(&spans, &params, layout_config.min_card_width_px);
    let ticks = year_ticks(&params, layout_config.tick_interval_years)?;
    let layout = json!({
        "parameters": params,
        "content_width_px": content_width(&params, f64::from(VIEWPORT.0), &layout_config),
        "cards": cards,
        "ticks": ticks,
    });
    println!("{}", serde_json::to_string_pretty(&layout)?);

    let host = LocalHost::new(VIEWPORT.0, VIEWPORT.1);
    let frame_loop = FrameLoop::at_fps(host.clone(), 60);
    let mut selection = ThemeSelection::new();
    let mut animator = ParticleAnimator::new(registry, config);
    animator.start(
        SvgSurface::new(VIEWPORT.0, VIEWPORT.1),
        host,
        selection.current_key(),
    );

    for dynasty in catalog.dynasties() {
        selection.hover(Some(dynasty.id.clone()));
        animator.set_theme(selection.current_key());
        let delivered = frame_loop.run(&mut animator, FRAMES_PER_DYNASTY);
        info!(dynasty = %dynasty.title(), frames = delivered, "previewed theme");
    }

    let stats = animator.stats();
    info!(stats = %serde_json::to_string(&stats)?, "preview finished");

    if let Some(surface) = animator.into_surface() {
        std::fs::write(&output, surface.to_svg())?;
        info!(path = %output, "wrote final frame");
    }
    Ok(())
}
