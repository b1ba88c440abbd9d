use std::{fs::File, io::Read, path::Path};

use tracing::{debug, info, warn};

use crate::{
    error::{RatingError, Result},
    model::structures::score_record::ScoreRecord
};

/// Headers accepted as the player name column, in order of preference.
pub const NAME_COLUMNS: [&str; 4] = ["Name", "name", "Player", "player"];

pub fn read_wide_csv(path: &Path) -> Result<Vec<ScoreRecord>> {
    info!("Reading scores from {}", path.display());
    let file = File::open(path)?;

    parse_wide_table(file)
}

/// Flattens a wide score table (one row per player, one column per round)
/// into one record per played round.
///
/// Every column other than the name columns and spreadsheet filler columns
/// (headers starting with "unnamed") is a round, numbered by its position
/// among the round columns. Blank or non-numeric cells mean the player sat
/// that round out.
pub fn parse_wide_table<R: Read>(reader: R) -> Result<Vec<ScoreRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let name_columns: Vec<usize> = NAME_COLUMNS
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == *name))
        .collect();
    let rounds: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| !name_columns.contains(i) && !h.to_lowercase().starts_with("unnamed"))
        .collect();

    debug!("Round columns: {:?}", rounds.iter().map(|(_, h)| h).collect::<Vec<_>>());

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row?;

        let player = name_columns
            .iter()
            .filter_map(|i| row.get(*i))
            .map(str::trim)
            .find(|name| !name.is_empty());

        let player = match player {
            Some(p) => p,
            None => {
                warn!("Row {} is missing a player name, skipping", line + 2);
                continue;
            }
        };

        for (round_seq, (column, label)) in rounds.iter().enumerate() {
            let score = row
                .get(*column)
                .and_then(|cell| cell.trim().parse::<f64>().ok())
                .filter(|score| score.is_finite());

            if let Some(score) = score {
                records.push(ScoreRecord::new(player, round_seq as i64, label, score)?);
            }
        }
    }

    if records.is_empty() {
        return Err(RatingError::empty_input());
    }

    info!("Read {} scores across {} round columns", records.len(), rounds.len());
    Ok(records)
}
