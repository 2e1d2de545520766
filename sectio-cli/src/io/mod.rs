use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::io::ext_repr::ExtFigure;

pub mod cli;
pub mod ext_repr;
pub mod output;

pub fn read_figure(path: &Path) -> Result<ExtFigure> {
    let file =
        File::open(path).with_context(|| format!("could not open figure file: {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect figure file format")
}

pub fn write_json<T: Serialize>(item: &T, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not create output file: {path:?}"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, item)?;
    info!("output written to {path:?}");
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
