//! aixm2openair.
//!
//! Kommandozeilen-Konverter: AIXM-4.5-Luftraumgrenzen nach OpenAir und GeoJSON.

use std::path::PathBuf;

use aixm2openair::{load_aixm_file, write_outputs, Converter, ConverterOptions};
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "aixm2openair", version)]
#[command(about = "Konvertiert AIXM-Luftraumgrenzen nach OpenAir und GeoJSON", long_about = None)]
struct Args {
    /// AIXM-4.5-Snapshot (XML)
    input: PathBuf,

    /// Optionen-Datei (Standard: aixm2openair.toml neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Zielverzeichnis der Ausgabedateien
    #[arg(long, short = 'o', default_value = ".")]
    output_dir: PathBuf,

    /// Hilfspunkte (Stützpunkte, Bogenzentren) als Marker ausgeben
    #[arg(long)]
    markers: bool,

    /// Winkelschritt der Bogen-Tessellierung in Grad
    #[arg(long)]
    arc_step: Option<f64>,

    /// Keine GeoJSON-Datei schreiben
    #[arg(long)]
    no_geojson: bool,

    /// Keine OpenAir-Dateien schreiben
    #[arg(long)]
    no_openair: bool,

    /// Debug-Logging aktivieren
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// CLI-Flags überschreiben die Werte aus der Optionen-Datei.
    fn apply_to(&self, options: &mut ConverterOptions) {
        if self.markers {
            options.make_map_markers = true;
        }
        if let Some(step) = self.arc_step {
            options.arc_step_degrees = step;
        }
        if self.no_geojson {
            options.export_geojson = false;
        }
        if self.no_openair {
            options.export_openair = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    AppRunner::run(Args::parse())
}

struct AppRunner;

impl AppRunner {
    fn run(args: Args) -> anyhow::Result<()> {
        // Logger initialisieren
        let level = if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();

        log::info!("aixm2openair v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = args
            .config
            .clone()
            .unwrap_or_else(ConverterOptions::config_path);
        let mut options = ConverterOptions::load_from_file(&config_path);
        args.apply_to(&mut options);

        let catalog = load_aixm_file(&args.input)?;

        let output = Converter::new(options.clone())
            .run(&catalog)
            .with_context(|| format!("Konvertierung abgebrochen: {}", args.input.display()))?;

        let stem = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("aixm");
        write_outputs(&output, &args.output_dir, stem, &options)?;

        output.summary.log();
        Ok(())
    }
}
