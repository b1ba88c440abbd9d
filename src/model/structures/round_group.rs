use itertools::Itertools;
use tracing::warn;

use crate::model::structures::score_record::ScoreRecord;

/// All records sharing one round sequence number, in input order.
#[derive(Debug, Clone)]
pub struct RoundGroup<'a> {
    pub round_seq: i64,
    pub round_label: &'a str,
    pub records: Vec<&'a ScoreRecord>
}

impl RoundGroup<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Groups records by round sequence, ascending. The sort is stable, so
/// players keep their input order inside a round.
pub fn group_rounds(records: &[ScoreRecord]) -> Vec<RoundGroup<'_>> {
    let chunks = records
        .iter()
        .sorted_by_key(|r| r.round_seq())
        .chunk_by(|r| r.round_seq());

    let groups: Vec<RoundGroup> = chunks
        .into_iter()
        .map(|(round_seq, members)| {
            let records: Vec<&ScoreRecord> = members.collect();
            let first: &ScoreRecord = records[0];
            let round_label = first.round_label();

            for r in records.iter().filter(|r| r.round_label() != round_label) {
                warn!(
                    "Round {} has mixed labels ({:?} vs {:?}), using {:?}",
                    round_seq,
                    round_label,
                    r.round_label(),
                    round_label
                );
            }

            RoundGroup {
                round_seq,
                round_label,
                records
            }
        })
        .collect();

    groups
}
