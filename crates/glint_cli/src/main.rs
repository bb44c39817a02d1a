//! Glint command-line renderer.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;
mod config;
mod logger;

use cli::Args;
use config::ProjectFile;
use glint_renderer::{render, render_parallel, save, RenderJob};
use logger::init_logger;

fn main() {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Glint {}", env!("CARGO_PKG_VERSION"));

    let project = ProjectFile::from_args(args)?;
    if args.print_config {
        println!("{}", project.to_json_string()?);
        return Ok(());
    }

    let setup = project.scene.build().context("Failed to build scene")?;
    info!(
        "Scene: {} spheres, light direction {:?}",
        setup.scene.len(),
        setup.light.direction()
    );

    let job = RenderJob::new(&setup, &project.render);
    let image = if args.parallel {
        render_parallel(&job)
    } else {
        render(&job)
    };

    save(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    Ok(())
}
