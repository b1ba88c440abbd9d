use crate::model::structures::{round_type::RoundType, score_record::ScoreRecord};
use rand::{seq::IndexedRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

pub fn generate_record(player: &str, round_seq: i64, round_label: &str, score: f64) -> ScoreRecord {
    ScoreRecord::new(player, round_seq, round_label, score)
        .unwrap_or_else(|e| panic!("Expected a valid test record: {}", e))
}

/// One round where player `P{i + 1}` shot `scores[i]`.
pub fn generate_round(round_seq: i64, round_label: &str, scores: &[f64]) -> Vec<ScoreRecord> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| generate_record(&format!("P{}", i + 1), round_seq, round_label, *score))
        .collect()
}

/// A random but reproducible series: `n_rounds` rounds drawn from a pool of
/// `n_players`, where each player skips roughly one round in five.
pub fn generate_tournament(seed: u64, n_players: usize, n_rounds: i64) -> Vec<ScoreRecord> {
    if n_players < 1 {
        panic!("Number of players must be at least 1");
    }

    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let round_types: Vec<RoundType> = RoundType::iter().collect();
    let mut records = Vec::new();

    for seq in 0..n_rounds {
        let round_type = round_types
            .choose(&mut rng)
            .copied()
            .unwrap_or(RoundType::TR);
        let label = format!("{}-{}", round_type, seq + 1);

        for p in 1..=n_players {
            if rng.random_bool(0.2) {
                continue;
            }

            let score = rng.random_range(45..=75) as f64;
            records.push(generate_record(&format!("P{}", p), seq, &label, score));
        }
    }

    records
}
