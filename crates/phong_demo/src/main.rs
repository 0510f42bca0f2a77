use std::path::PathBuf;

use anyhow::{Context, Result};
use phong_tracer::render_image;

mod scenes;

use scenes::DemoScene;

/// Render one demo scene into `out_dir`.
fn run(demo: &DemoScene, out_dir: &std::path::Path) -> Result<()> {
    let path = out_dir.join(demo.output);
    let scene = (demo.build)(demo.width, demo.height);

    render_image(&path, &scene, &demo.config)
        .with_context(|| format!("{} could not be rendered to {}", demo.name, path.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let demos = scenes::all();
    let mut failed = 0;

    for demo in &demos {
        log::info!("Render {}...", demo.name);
        match run(demo, &out_dir) {
            Ok(()) => log::info!("{} completed.", demo.name),
            Err(e) => {
                failed += 1;
                log::error!("{:#}", e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} scenes failed", failed, demos.len());
    }

    log::info!("All done.");
    Ok(())
}
