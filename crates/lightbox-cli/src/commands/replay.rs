use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lightbox_core::config::LightboxConfig;
use lightbox_core::gesture::{GestureController, PointerEvent, Surface};
use lightbox_core::io::image_size;

use super::parse_size;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON array of pointer events
    pub events: PathBuf,

    /// Natural image size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, conflicts_with = "image_file")]
    pub image: Option<(f64, f64)>,

    /// Read the natural image size from this file
    #[arg(long)]
    pub image_file: Option<PathBuf>,

    /// Viewport size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "1280x800")]
    pub viewport: (f64, f64),
}

pub fn run(args: &ReplayArgs, config: &LightboxConfig) -> Result<()> {
    let contents = std::fs::read_to_string(&args.events)
        .with_context(|| format!("Failed to read events {}", args.events.display()))?;
    let events: Vec<PointerEvent> =
        serde_json::from_str(&contents).context("Invalid pointer event trace")?;

    let image = match (&args.image, &args.image_file) {
        (Some(size), _) => *size,
        (None, Some(path)) => {
            let (w, h) = image_size(path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            (w as f64, h as f64)
        }
        (None, None) => args.viewport,
    };

    let surface = Surface::new(image, args.viewport);
    let mut controller = GestureController::new(config.gesture.clone(), surface);

    println!("{:>8}  {:>3}  {:<6}  {}", "Time", "Id", "Kind", "Effect");
    println!("{}", "-".repeat(60));
    for event in &events {
        let effect = controller.handle(event);
        if !effect.is_none() {
            println!(
                "{:>8}  {:>3}  {:<6}  {}",
                event.time_ms, event.id, event.kind, effect
            );
        }
    }

    let t = controller.transform();
    println!("\nFinal transform: {}", t.css());

    Ok(())
}
