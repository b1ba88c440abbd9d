use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf}
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::info;

use crate::{
    error::Result,
    model::{config::RatingConfig, structures::rating_result::RatingResult}
};

/// One exported table per collection of the result bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Sheet {
    FinalRatings,
    History,
    Snapshots,
    ScalingDetails
}

impl Sheet {
    pub fn file_name(&self) -> String {
        format!("{}.csv", self)
    }
}

#[derive(Serialize)]
struct ExportBundle<'a> {
    generated_at: DateTime<Utc>,
    config: &'a RatingConfig,
    rounds: Vec<&'a str>,
    #[serde(flatten)]
    result: &'a RatingResult
}

/// Writes one CSV file per sheet into `dir`, creating it if needed. The
/// scaling sheet is only written when some round was actually scaled.
/// Returns the paths written.
pub fn write_csv_sheets(result: &RatingResult, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for sheet in Sheet::iter() {
        let path = dir.join(sheet.file_name());

        match sheet {
            Sheet::FinalRatings => write_sheet(&path, &result.final_ratings)?,
            Sheet::History => write_sheet(&path, &result.history)?,
            Sheet::Snapshots => write_sheet(&path, &result.snapshots)?,
            Sheet::ScalingDetails => {
                if !result.was_scaled() {
                    continue;
                }
                write_sheet(&path, &result.scaling_records)?
            }
        }

        written.push(path);
    }

    info!("Wrote {} sheets to {}", written.len(), dir.display());
    Ok(written)
}

fn write_sheet<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the whole bundle, plus the settings it was computed with, as JSON.
pub fn write_json(result: &RatingResult, config: &RatingConfig, path: &Path) -> Result<()> {
    let bundle = ExportBundle {
        generated_at: Utc::now(),
        config,
        rounds: result.rounds(),
        result
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &bundle)?;

    info!("Wrote results to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{compute_ratings, config::RatingConfig},
        sheets::writer::{write_csv_sheets, write_json, Sheet},
        utils::test_utils::generate_round
    };
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_sheet_file_names() {
        assert_eq!(Sheet::FinalRatings.file_name(), "final_ratings.csv");
        assert_eq!(Sheet::ScalingDetails.file_name(), "scaling_details.csv");
    }

    #[test]
    fn test_write_csv_sheets_without_scaling() {
        let dir = tempdir().unwrap();
        let records = generate_round(0, "TR-1", &[50.0, 52.0]);
        let result = compute_ratings(&records, &RatingConfig::default()).unwrap();

        let written = write_csv_sheets(&result, dir.path()).unwrap();

        assert_eq!(written.len(), 3);
        assert!(!dir.path().join("scaling_details.csv").exists());

        let history = fs::read_to_string(dir.path().join("history.csv")).unwrap();
        let mut lines = history.lines();
        assert_eq!(
            lines.next(),
            Some("round_seq,round_label,round_type,player,score,rating_before,rating_after,delta,k_effective")
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_write_csv_sheets_with_scaling() {
        let dir = tempdir().unwrap();
        let config = RatingConfig {
            base_k: 1000.0,
            delta_cap_start_round: 1,
            ..Default::default()
        };
        let records = generate_round(0, "TN-1", &[50.0, 52.0, 58.0]);
        let result = compute_ratings(&records, &config).unwrap();

        let written = write_csv_sheets(&result, dir.path()).unwrap();

        assert_eq!(written.len(), 4);
        let scaling = fs::read_to_string(dir.path().join("scaling_details.csv")).unwrap();
        assert_eq!(scaling.lines().count(), 4);
    }

    #[test]
    fn test_write_json_bundle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        let config = RatingConfig::default();
        let records = generate_round(0, "TR-1", &[50.0, 52.0]);
        let result = compute_ratings(&records, &config).unwrap();

        write_json(&result, &config, &path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["rounds"][0], "TR-1");
        assert_eq!(json["final_ratings"][0]["player"], "P1");
        assert_eq!(json["config"]["base_k"], 36.0);
        assert_eq!(json["config"]["delta_caps"]["TR"], serde_json::Value::Null);
        assert_eq!(json["history"].as_array().map(|h| h.len()), Some(2));
        assert!(json["generated_at"].is_string());
    }
}
