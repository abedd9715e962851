//! CSV exports.

use etang_core::class_code::ClassCode;
use etang_core::record::Record;
use etang_data::aggregate::aggregate;
use etang_data::series::PondIndex;
use std::io::Write;

fn format_mean(value: Option<f64>) -> String {
    value.map_or(String::new(), |v| format!("{:.4}", v))
}

/// Ponds per class and date, one row per date: `date,class_1..class_9,total`.
///
/// Returns the number of rows written.
pub fn write_counts<W: Write>(records: &[Record], out: W) -> anyhow::Result<usize> {
    let table = aggregate(records);
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["date".to_string()];
    header.extend(ClassCode::ALL.iter().map(|code| format!("class_{}", code)));
    header.push("total".to_string());
    wtr.write_record(&header)?;

    for (date, counts) in table.iter() {
        let mut row = vec![date.to_string()];
        row.extend(counts.iter().map(|(_, n)| n.to_string()));
        row.push(counts.total().to_string());
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(table.len())
}

/// One row per pond, sorted by pond id.
///
/// Returns the number of rows written.
pub fn write_ponds<W: Write>(records: &[Record], out: W) -> anyhow::Result<usize> {
    let summaries = PondIndex::build(records).summaries();
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "pond_id",
        "observations",
        "dry_count",
        "mean_ndvi",
        "mean_water_frequency",
        "class_changes",
        "dynamics",
    ])?;
    for summary in &summaries {
        wtr.write_record([
            summary.pond_id.to_string(),
            summary.observations.to_string(),
            summary.dry_count.to_string(),
            format_mean(summary.mean_ndvi),
            format_mean(summary.mean_water_frequency),
            summary.class_changes.to_string(),
            summary
                .dynamics
                .map_or(String::new(), |d| format!("{:?}", d).to_lowercase()),
        ])?;
    }
    wtr.flush()?;
    Ok(summaries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("2018-03-01", "1", Some(5)),
            Record::new("2018-03-01", "2", Some(5)),
            Record::new("2018-03-01", "3", Some(9)),
            Record::new("2018-03-01", "4", None),
            Record::new("2018-04-01", "1", Some(1)).with_dry(true),
        ]
    }

    #[test]
    fn test_counts_csv() {
        let mut buf = Vec::new();
        let rows = write_counts(&records(), &mut buf).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "date,class_1,class_2,class_3,class_4,class_5,class_6,class_7,class_8,class_9,total"
        );
        assert_eq!(lines[1], "2018-03-01,0,0,0,0,2,0,0,0,1,3");
        assert_eq!(lines[2], "2018-04-01,1,0,0,0,0,0,0,0,0,1");
    }

    #[test]
    fn test_ponds_csv() {
        let records = vec![
            Record::new("2018-03-01", "b", Some(5)).with_metrics(Some(0.5), Some(0.25)),
            Record::new("2018-04-01", "b", Some(2)).with_dry(true),
            Record::new("2018-03-01", "a", Some(1)),
        ];
        let mut buf = Vec::new();
        let rows = write_ponds(&records, &mut buf).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a,1,0,,,0,stable");
        assert_eq!(lines[2], "b,2,1,0.5000,0.2500,1,transition");
    }
}
