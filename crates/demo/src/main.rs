// File: crates/demo/src/main.rs
// Summary: Demo loads a time,value CSV and prints the wrapped partitions as a text table.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use timewrap_core::span::{self, TimeUnit};
use timewrap_core::{process_data, series_names};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to a generated sample series
    let (time_series, values) = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_csv(&path).with_context(|| format!("failed to load CSV '{path}'"))?
        }
        None => {
            println!("No input file given; using a generated sample series");
            sample_series()
        }
    };
    println!("Loaded {} points", time_series.len());

    if time_series.is_empty() {
        anyhow::bail!("no rows loaded - check headers/delimiter.");
    }

    let partitions = process_data(&time_series, &values, "value", None);
    let names = series_names(&partitions, None);

    // Header row: position labels from the first partition (all partitions
    // share the same positions after gap-filling)
    let labels = partitions[0]
        .iter()
        .map(|point| point.label.clone().unwrap_or_default())
        .collect::<Vec<_>>();
    let name_width = names.iter().map(String::len).max().unwrap_or(0).max(6);
    let cell_width = labels.iter().map(String::len).max().unwrap_or(0).max(6);

    print!("{:name_width$}", "");
    for label in &labels {
        print!(" {label:>cell_width$}");
    }
    println!();

    for (partition, name) in partitions.iter().zip(&names) {
        print!("{name:name_width$}");
        for point in partition {
            match point.field_value {
                Some(value) => print!(" {value:>cell_width$.1}"),
                None => print!(" {:>cell_width$}", "-"),
            }
        }
        println!();
    }
    Ok(())
}

/// Load `time,value` rows; timestamps are `YYYY-MM-DD HH:MM:SS`.
fn load_csv(path: &str) -> Result<(Vec<NaiveDateTime>, Vec<f64>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut time_series = Vec::new();
    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let time = record.get(0).context("missing time column")?.trim();
        let date = NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S")
            .with_context(|| format!("unparseable timestamp '{time}'"))?;
        let value = record
            .get(1)
            .context("missing value column")?
            .trim()
            .parse::<f64>()?;
        time_series.push(date);
        values.push(value);
    }
    Ok((time_series, values))
}

/// Two days of hourly points with a simple waveform.
fn sample_series() -> (Vec<NaiveDateTime>, Vec<f64>) {
    let start = NaiveDateTime::parse_from_str("1981-08-18 00:00:00", "%Y-%m-%d %H:%M:%S")
        .expect("valid sample start");
    let dates = (0..48)
        .map(|i| span::add(start, i, TimeUnit::Hours))
        .collect::<Vec<_>>();
    let values = (0..48)
        .map(|i| ((i as f64) * 0.5).sin() * 50.0 + 50.0)
        .collect();
    (dates, values)
}
