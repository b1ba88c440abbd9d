use tracing::{debug, info};

use crate::{
    error::{RatingError, Result},
    model::{
        config::RatingConfig,
        constants::EXPECTED_SCORE_CLAMP,
        elo::{expected_score, mov_multiplier},
        rating_tracker::RatingTracker,
        round_classifier::round_type_from_label,
        structures::{
            history_record::HistoryRecord,
            rating_result::RatingResult,
            round_group::{group_rounds, RoundGroup},
            scaling_record::ScalingRecord,
            score_record::ScoreRecord,
            snapshot_record::SnapshotRecord
        }
    },
    utils::progress_utils::progress_bar
};

pub struct EloModel {
    pub config: RatingConfig,
    show_progress: bool
}

/// Per-player sums over every opponent in a round.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PairwiseTotals {
    expected: f64,
    actual: f64,
    mov_weight: f64
}

/// A round-wide shrink applied because the largest delta exceeded the cap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scaling {
    factor: f64,
    max_abs_delta: f64,
    cap: f64
}

/// Mutable state of a single pass. Nothing here outlives `EloModel::process`.
#[derive(Default)]
struct RatingPass {
    tracker: RatingTracker,
    history: Vec<HistoryRecord>,
    snapshots: Vec<SnapshotRecord>,
    scaling_records: Vec<ScalingRecord>,
    rounds_processed: u32
}

impl EloModel {
    pub fn new(config: RatingConfig) -> EloModel {
        EloModel {
            config,
            show_progress: false
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> EloModel {
        self.show_progress = show_progress;
        self
    }

    /// # Round processing
    ///
    /// Rounds are folded in ascending sequence order, each one seeing the
    /// ratings left behind by all earlier rounds.
    ///
    /// Per round:
    /// 1. Seat any new players at the starting rating, before any math runs.
    /// 2. Compare every ordered pair of players, summing expected score,
    ///     actual score and margin-of-victory weight per player.
    /// 3. Turn those sums into raw deltas using the round type's K-factor.
    /// 4. Once enough rounds have been processed, shrink every delta by the
    ///     same factor if the largest one exceeds the round type's cap.
    /// 5. Apply the deltas and record history and a leaderboard snapshot.
    ///
    /// A round's deltas are all computed and checked before any rating moves,
    /// so a failing round leaves no partial update behind and stops the pass.
    pub fn process(&self, records: &[ScoreRecord]) -> Result<RatingResult> {
        if records.is_empty() {
            return Err(RatingError::empty_input());
        }

        self.config.validate()?;

        let rounds = group_rounds(records);
        let bar = progress_bar(rounds.len() as u64, "Processing rounds".to_string(), self.show_progress);
        let mut pass = RatingPass::default();

        for round in &rounds {
            self.process_round(round, &mut pass)?;
            bar.inc(1);
        }
        bar.finish();

        info!(
            "Processed {} rounds for {} players ({} scaled rows)",
            pass.rounds_processed,
            pass.tracker.len(),
            pass.scaling_records.len()
        );

        Ok(RatingResult {
            final_ratings: pass.tracker.leaderboard(),
            history: pass.history,
            snapshots: pass.snapshots,
            scaling_records: pass.scaling_records
        })
    }

    fn process_round(&self, round: &RoundGroup, pass: &mut RatingPass) -> Result<()> {
        pass.rounds_processed += 1;

        let round_type = round_type_from_label(round.round_label, &self.config.weights);
        let k_round = self.config.base_k * self.config.weight_for(&round_type);

        for record in &round.records {
            if pass.tracker.ensure_player(record.player(), self.config.start_rating) {
                debug!(
                    "{} enters in round {} at {}",
                    record.player(),
                    round.round_seq,
                    self.config.start_rating
                );
            }
        }

        debug!(
            "Round {} ({}): type {}, K {}, {} players",
            round.round_seq,
            round.round_label,
            round_type,
            k_round,
            round.len()
        );

        if round.len() <= 1 {
            self.record_unchanged(round, &round_type, pass)?;
            pass.snapshots
                .extend(pass.tracker.snapshot(round.round_seq, round.round_label, &round_type));
            return Ok(());
        }

        let ratings = round
            .records
            .iter()
            .map(|r| {
                pass.tracker
                    .get_rating(r.player())
                    .ok_or_else(|| failure(round, format!("no rating for {}", r.player())))
            })
            .collect::<Result<Vec<f64>>>()?;
        let scores: Vec<f64> = round.records.iter().map(|r| r.score()).collect();

        let totals = pairwise_totals(&ratings, &scores, self.config.use_mov);
        let deltas_original = self.raw_deltas(&totals, k_round);

        let scaling = if pass.rounds_processed >= self.config.delta_cap_start_round {
            self.config
                .delta_cap_for(&round_type)
                .and_then(|cap| scaling_for_cap(&deltas_original, cap))
        } else {
            None
        };

        let deltas: Vec<f64> = match scaling {
            Some(s) => deltas_original.iter().map(|d| d * s.factor).collect(),
            None => deltas_original.clone()
        };

        if let Some(i) = (0..deltas.len()).find(|&i| !(ratings[i] + deltas[i]).is_finite()) {
            return Err(failure(
                round,
                format!(
                    "rating change for {} is not a finite number ({} + {})",
                    round.records[i].player(),
                    ratings[i],
                    deltas[i]
                )
            ));
        }

        if let Some(s) = scaling {
            info!(
                "Round {} ({}): max |delta| {:.2} exceeds cap {}, scaling all deltas by {:.4}",
                round.round_seq, round.round_label, s.max_abs_delta, s.cap, s.factor
            );

            for (i, record) in round.records.iter().enumerate() {
                pass.scaling_records.push(ScalingRecord {
                    round_seq: round.round_seq,
                    round_label: round.round_label.to_string(),
                    round_type: round_type.clone(),
                    player: record.player().to_string(),
                    score: record.score(),
                    delta_original: deltas_original[i],
                    delta_scaled: deltas[i],
                    reduction: deltas_original[i] - deltas[i],
                    scale_factor: s.factor,
                    max_abs_delta_original: s.max_abs_delta,
                    delta_cap: s.cap
                });
            }
        }

        for (record, delta) in round.records.iter().zip(&deltas) {
            let (rating_before, rating_after) = pass
                .tracker
                .apply_delta(record.player(), *delta)
                .ok_or_else(|| failure(round, format!("no rating for {}", record.player())))?;

            pass.history.push(HistoryRecord {
                round_seq: round.round_seq,
                round_label: round.round_label.to_string(),
                round_type: round_type.clone(),
                player: record.player().to_string(),
                score: record.score(),
                rating_before,
                rating_after,
                delta: *delta,
                k_effective: k_round
            });
        }

        pass.snapshots
            .extend(pass.tracker.snapshot(round.round_seq, round.round_label, &round_type));

        Ok(())
    }

    /// A round with a single player moves nobody's rating.
    fn record_unchanged(&self, round: &RoundGroup, round_type: &str, pass: &mut RatingPass) -> Result<()> {
        for record in &round.records {
            let rating = pass
                .tracker
                .get_rating(record.player())
                .ok_or_else(|| failure(round, format!("no rating for {}", record.player())))?;

            pass.history.push(HistoryRecord {
                round_seq: round.round_seq,
                round_label: round.round_label.to_string(),
                round_type: round_type.to_string(),
                player: record.player().to_string(),
                score: record.score(),
                rating_before: rating,
                rating_after: rating,
                delta: 0.0,
                k_effective: 0.0
            });
        }

        Ok(())
    }

    /// `K * (W / (n - 1)) * (S - E)` per player, where the MOV term is
    /// dropped when margin of victory is disabled.
    fn raw_deltas(&self, totals: &[PairwiseTotals], k_round: f64) -> Vec<f64> {
        let opponents = (totals.len() - 1) as f64;

        totals
            .iter()
            .map(|t| {
                let mov_weight = if self.config.use_mov && opponents > 0.0 {
                    t.mov_weight / opponents
                } else {
                    1.0
                };

                k_round * mov_weight * (t.actual - t.expected)
            })
            .collect()
    }
}

/// Runs one full pass over `records` with `config`.
pub fn compute_ratings(records: &[ScoreRecord], config: &RatingConfig) -> Result<RatingResult> {
    EloModel::new(config.clone()).process(records)
}

/// Compares every ordered pair (i, j), i != j. Lower score wins; equal
/// scores are a half point each. Only the winner of a pair sees a margin,
/// the loser's weight is always 1.0.
fn pairwise_totals(ratings: &[f64], scores: &[f64], use_mov: bool) -> Vec<PairwiseTotals> {
    let n = ratings.len();
    let mut totals = vec![PairwiseTotals::default(); n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            totals[i].expected += expected_score(ratings[i], ratings[j], EXPECTED_SCORE_CLAMP);

            let (actual, margin) = if scores[i] < scores[j] {
                (1.0, scores[j] - scores[i])
            } else if scores[i] > scores[j] {
                (0.0, scores[j] - scores[i])
            } else {
                (0.5, 0.0)
            };
            totals[i].actual += actual;

            totals[i].mov_weight += if use_mov {
                mov_multiplier(margin.max(0.0), ratings[i] - ratings[j])
            } else {
                1.0
            };
        }
    }

    totals
}

/// Returns the round-wide scaling needed to bring the largest delta down to
/// `cap`, or `None` if no delta exceeds it.
fn scaling_for_cap(deltas: &[f64], cap: f64) -> Option<Scaling> {
    let max_abs_delta = deltas.iter().map(|d| d.abs()).fold(0.0, f64::max);

    if max_abs_delta > cap {
        Some(Scaling {
            factor: cap / max_abs_delta,
            max_abs_delta,
            cap
        })
    } else {
        None
    }
}

fn failure(round: &RoundGroup, reason: String) -> RatingError {
    RatingError::ComputationFailure {
        round_seq: round.round_seq,
        reason
    }
}
