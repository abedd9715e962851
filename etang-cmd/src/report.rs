//! Plain-text and JSON reports printed by the CLI.

use anyhow::bail;
use etang_core::dryness::DrynessWindow;
use etang_core::geojson::Dataset;
use etang_core::palette::Palette;
use etang_core::record::{Record, Timestamp};
use etang_core::style::LayerPaints;
use etang_data::aggregate::aggregate;
use etang_data::legend::{layout_legend, LegendSizing};
use etang_data::series::PondIndex;
use std::collections::BTreeMap;
use std::io::Write;

/// Dry records inside `window`, per date, in one pass.
fn dry_counts<'a>(records: &'a [Record], window: &DrynessWindow) -> BTreeMap<&'a Timestamp, usize> {
    let mut counts = BTreeMap::new();
    for record in records.iter().filter(|r| window.matches(r)) {
        *counts.entry(&record.date).or_insert(0) += 1;
    }
    counts
}

/// Dataset overview followed by one line per date.
pub fn write_summary<W: Write>(dataset: &Dataset, out: &mut W) -> anyhow::Result<()> {
    let table = aggregate(&dataset.records);
    let ponds = PondIndex::build(&dataset.records);
    let dry = dry_counts(&dataset.records, &DrynessWindow::default());

    writeln!(out, "records: {}", dataset.records.len())?;
    writeln!(out, "skipped: {}", dataset.skipped)?;
    writeln!(out, "ponds:   {}", ponds.len())?;
    writeln!(out, "dates:   {}", table.len())?;
    writeln!(out)?;
    writeln!(out, "{:<12} {:>8} {:>8}", "date", "ponds", "dry")?;
    for (date, counts) in table.iter() {
        let dry_count = dry.get(date).copied().unwrap_or(0);
        writeln!(out, "{:<12} {:>8} {:>8}", date, counts.total(), dry_count)?;
    }
    Ok(())
}

/// Paint properties of the fill, outline and dryness layers.
pub fn write_style<W: Write>(palette: Palette, out: &mut W) -> anyhow::Result<()> {
    let paints = LayerPaints::for_table(palette.table());
    serde_json::to_writer_pretty(&mut *out, &paints)?;
    writeln!(out)?;
    Ok(())
}

/// 3×3 legend of `date` (or the first date), wettest row first.
pub fn write_legend<W: Write>(
    records: &[Record],
    date: Option<&str>,
    palette: Palette,
    out: &mut W,
) -> anyhow::Result<()> {
    let table = aggregate(records);
    let timeline = table.timeline();
    let date = match date {
        Some(d) => Timestamp::from(d),
        None => match timeline.first() {
            Some(first) => first.clone(),
            None => bail!("dataset has no dates"),
        },
    };
    let Some(counts) = table.get(&date) else {
        bail!("no records on {}", date);
    };
    let layout = layout_legend(palette.table(), Some(counts), &LegendSizing::default());

    writeln!(out, "{} ({} palette)", date, palette.name())?;
    writeln!(out, "water ↑ / vegetation →")?;
    for row in layout.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                format!(
                    "{} {} {:>4} {:>5.1}px",
                    cell.code,
                    cell.color,
                    cell.count.unwrap_or(0),
                    cell.size_px
                )
            })
            .collect();
        writeln!(out, "{}", cells.join("  |  "))?;
    }
    Ok(())
}
