use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use sectio_cli::config::SectioConfig;
use sectio_cli::import::import_figure;
use sectio_cli::io;
use sectio_cli::io::cli::Cli;
use sectio_cli::io::output::SectioOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SectioConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed SectioConfig: {config:?}");

    let ext_figure = io::read_figure(args.input_file.as_path())?;
    let (centroid_engine, inertia_engine) = import_figure(&config, &ext_figure);

    let centroid = centroid_engine.calculate_centroid();
    match centroid.valid {
        true => info!(
            "centroid at ({:.2}, {:.2}), net area {:.2}",
            centroid.x, centroid.y, centroid.area
        ),
        false => warn!("figure has zero net area, centroid is undefined"),
    }

    let inertia = inertia_engine.calculate_inertia_about_reference();
    info!(
        "moments about the reference axis: ixx {:.2}, iyy {:.2}",
        inertia.ixx, inertia.iyy
    );

    let output = SectioOutput {
        config,
        centroid,
        inertia,
    };
    io::write_json(&output, args.output_file.as_path())?;

    Ok(())
}
