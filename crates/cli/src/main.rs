//! # driftwatch
//!
//! Command-line driver for sensor time-series anomaly detection:
//! generates the synthetic multi-sensor fixture dataset and runs
//! rolling z-score detection over one sensor's series from a CSV.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use detection_facade::{detect, SensorReading};
use synthgen::default_fleet;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "driftwatch")]
#[command(about = "Sensor time-series anomaly detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the synthetic multi-sensor fixture dataset
    Generate {
        /// Samples per sensor
        #[arg(short, long, default_value = "6000")]
        n: usize,

        /// Output CSV path
        #[arg(short, long, default_value = "data/sensor_data.csv")]
        output: PathBuf,
    },

    /// Detect anomalies in one sensor's series from a CSV file
    Detect {
        /// Input CSV with timestamp,sensor,value rows
        #[arg(short, long)]
        input: PathBuf,

        /// Sensor to analyze (default: first sensor in sorted order)
        #[arg(short, long)]
        sensor: Option<String>,

        /// Rolling window length in samples
        #[arg(short, long, default_value = "50")]
        window: usize,

        /// Z-score threshold
        #[arg(short, long, default_value = "3.0")]
        threshold: f64,

        /// Number of ranked anomalies to report
        #[arg(short = 'k', long, default_value = "10")]
        top_k: usize,

        /// Output JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load readings grouped per sensor, each group sorted by timestamp.
///
/// Rows with unparsable fields are skipped; ordering problems in the
/// input are fixed here so the engine sees a sorted series.
fn load_readings(path: &PathBuf) -> CliResult<BTreeMap<String, Vec<SensorReading>>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let column =
        |name: &str, fallback: usize| headers.iter().position(|h| h == name).unwrap_or(fallback);
    let ts_idx = column("timestamp", 0);
    let sensor_idx = column("sensor", 1);
    let value_idx = column("value", 2);

    let mut by_sensor: BTreeMap<String, Vec<SensorReading>> = BTreeMap::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let fields = (
            record.get(ts_idx).and_then(|f| f.trim().parse::<i64>().ok()),
            record.get(sensor_idx),
            record.get(value_idx).and_then(|f| f.trim().parse::<f64>().ok()),
        );
        if let (Some(timestamp), Some(sensor), Some(value)) = fields {
            by_sensor
                .entry(sensor.to_string())
                .or_default()
                .push(SensorReading::new(timestamp, sensor, value));
        }
    }

    if by_sensor.is_empty() {
        return Err("No readings found in input".to_string());
    }

    for series in by_sensor.values_mut() {
        series.sort_by_key(|r| r.timestamp);
    }

    Ok(by_sensor)
}

fn run_generate(n: usize, output: PathBuf) -> CliResult<()> {
    let readings = default_fleet(n).map_err(|e| e.to_string())?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    let mut writer =
        csv::Writer::from_path(&output).map_err(|e| format!("Failed to create output: {}", e))?;
    writer
        .write_record(["timestamp", "sensor", "value"])
        .map_err(|e| format!("Failed to write header: {}", e))?;
    for r in &readings {
        writer
            .write_record(&[
                r.timestamp.to_string(),
                r.sensor_id.clone(),
                r.value.to_string(),
            ])
            .map_err(|e| format!("Failed to write record: {}", e))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    let sensors: std::collections::BTreeSet<&str> =
        readings.iter().map(|r| r.sensor_id.as_str()).collect();
    println!(
        "Generated {} rows across {} sensors -> {:?}",
        readings.len(),
        sensors.len(),
        output
    );
    Ok(())
}

fn run_detect(
    input: PathBuf,
    sensor: Option<String>,
    window: usize,
    threshold: f64,
    top_k: usize,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let by_sensor = load_readings(&input)?;
    let sensor = match sensor {
        Some(s) => s,
        None => by_sensor
            .keys()
            .next()
            .cloned()
            .ok_or_else(|| "No sensors in input".to_string())?,
    };
    let readings = by_sensor
        .get(&sensor)
        .ok_or_else(|| format!("Sensor '{}' not found in input", sensor))?;

    let (scored, summary) = detect(readings, window, threshold, top_k).map_err(|e| e.to_string())?;

    println!(
        "Anomalies detected: {} | Max score: {:.2} | Sensor: {}",
        summary.count, summary.max_score, sensor
    );
    if !summary.top.is_empty() {
        println!();
        println!("Top anomalies:");
        println!("{:>12}  {:>12}  {:>8}", "timestamp", "value", "score");
        for r in &summary.top {
            println!("{:>12}  {:>12.4}  {:>8.2}", r.timestamp, r.value, r.score);
        }
    }

    if let Some(path) = output {
        let json = serde_json::json!({
            "sensor": sensor,
            "window": window,
            "threshold": threshold,
            "count": summary.count,
            "max_score": summary.max_score,
            "top": summary.top,
            "flags": scored.iter().map(|r| r.is_anomaly).collect::<Vec<_>>(),
        });
        let mut file = File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Report written to {:?}", path);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { n, output } => run_generate(n, output),

        Commands::Detect {
            input,
            sensor,
            window,
            threshold,
            top_k,
            output,
        } => run_detect(input, sensor, window, threshold, top_k, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
