//! Command implementations for the pond CLI.
//!
//! Provides subcommands to inspect a monthly pond dataset, export its class
//! counts and pond summaries as CSV, and print the map style and legend.

use clap::Subcommand;
use etang_core::palette::Palette;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub mod export;
pub mod input;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print record, pond and date counts of a dataset
    Summary {
        /// GeoJSON dataset (.geojson or .geojson.gz)
        #[arg(short = 'i', long)]
        input: String,
    },

    /// Export ponds per class and date as CSV
    Counts {
        /// GeoJSON dataset (.geojson or .geojson.gz)
        #[arg(short = 'i', long)]
        input: String,

        /// Output CSV path
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Write the MapLibre paint properties of the pond layers as JSON
    Style {
        /// Color palette (etangs or stevens)
        #[arg(long, default_value = "etangs")]
        palette: Palette,

        /// Output JSON path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print the 3×3 legend sized by the class counts of one date
    Legend {
        /// GeoJSON dataset (.geojson or .geojson.gz)
        #[arg(short = 'i', long)]
        input: String,

        /// Date to size the legend for (first date when omitted)
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Color palette (etangs or stevens)
        #[arg(long, default_value = "etangs")]
        palette: Palette,
    },

    /// Export per-pond season summaries as CSV
    Ponds {
        /// GeoJSON dataset (.geojson or .geojson.gz)
        #[arg(short = 'i', long)]
        input: String,

        /// Output CSV path
        #[arg(short = 'o', long)]
        output: String,
    },
}

fn create_output(path: &str) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("cannot create {}: {}", path, e))?;
    Ok(BufWriter::new(file))
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { input } => {
            let dataset = input::open_dataset(&input)?;
            report::write_summary(&dataset, &mut io::stdout().lock())
        }
        Command::Counts { input, output } => {
            let dataset = input::open_dataset(&input)?;
            let rows = export::write_counts(&dataset.records, create_output(&output)?)?;
            log::info!("Wrote {} dates to {}", rows, output);
            Ok(())
        }
        Command::Style { palette, output } => match output {
            Some(path) => {
                let mut out = create_output(&path)?;
                report::write_style(palette, &mut out)?;
                out.flush()?;
                log::info!("Wrote {} style to {}", palette.name(), path);
                Ok(())
            }
            None => report::write_style(palette, &mut io::stdout().lock()),
        },
        Command::Legend {
            input,
            date,
            palette,
        } => {
            let dataset = input::open_dataset(&input)?;
            report::write_legend(&dataset.records, date.as_deref(), palette, &mut io::stdout().lock())
        }
        Command::Ponds { input, output } => {
            let dataset = input::open_dataset(&input)?;
            let rows = export::write_ponds(&dataset.records, create_output(&output)?)?;
            log::info!("Wrote {} ponds to {}", rows, output);
            Ok(())
        }
    }
}
