mod common;

use approx::assert_abs_diff_eq;
use common::{init_test_env, write_table, SEASON_TABLE};
use disc_golf_elo::{
    compute_ratings,
    model::structures::score_record::ScoreRecord,
    sheets::read_wide_csv,
    utils::test_utils::{generate_record, generate_round, generate_tournament},
    EloModel, RatingConfig, RatingError
};

#[test]
fn test_season_from_table() {
    init_test_env();
    let file = write_table(SEASON_TABLE);

    let records = read_wide_csv(file.path()).unwrap();
    let result = compute_ratings(&records, &RatingConfig::default()).unwrap();

    assert_eq!(records.len(), 16);
    assert_eq!(result.history.len(), 16);
    assert_eq!(result.final_ratings.len(), 4);
    assert_eq!(result.rounds(), vec!["TR-1", "TR-2", "CM-Doubles", "TN-Worlds", "CR-Finals"]);

    // Devon first appears in round 2, so the first snapshot only has three rows
    let first: Vec<_> = result.snapshots.iter().filter(|s| s.round_seq == 0).collect();
    assert_eq!(first.len(), 3);
    assert_eq!(result.snapshots.len(), 3 + 4 * 4);

    let devon = result.player_history("Devon");
    assert_eq!(devon[0].round_label, "TR-2");
    assert_eq!(devon[0].rating_before, 1500.0);
}

#[test]
fn test_history_chains_ratings() {
    init_test_env();
    let records = generate_tournament(11, 15, 30);

    let result = compute_ratings(&records, &RatingConfig::default()).unwrap();

    for player in result.final_ratings.iter() {
        let history = result.player_history(&player.player);

        for pair in history.windows(2) {
            assert_eq!(pair[0].rating_after, pair[1].rating_before);
        }
        for h in &history {
            assert_abs_diff_eq!(h.rating_after, h.rating_before + h.delta, epsilon = 1e-9);
        }
        assert_eq!(history.last().map(|h| h.rating_after), Some(player.rating));
    }
}

#[test]
fn test_history_is_in_round_order() {
    init_test_env();
    let records = generate_tournament(5, 10, 25);

    let result = compute_ratings(&records, &RatingConfig::default()).unwrap();

    assert_eq!(result.history.len(), records.len());
    assert!(result.history.windows(2).all(|w| w[0].round_seq <= w[1].round_seq));
    assert!(result.snapshots.windows(2).all(|w| w[0].round_seq <= w[1].round_seq));
}

#[test]
fn test_every_capped_round_scales_uniformly() {
    init_test_env();
    let config = RatingConfig {
        base_k: 400.0,
        ..Default::default()
    };
    let records = generate_tournament(3, 12, 20);

    let result = compute_ratings(&records, &config).unwrap();

    assert!(result.was_scaled());
    for s in &result.scaling_records {
        assert_abs_diff_eq!(s.scale_factor, s.delta_cap / s.max_abs_delta_original, epsilon = 1e-12);
        assert!(s.delta_scaled.abs() <= s.delta_cap + 1e-9);

        let round_players = result.history.iter().filter(|h| h.round_seq == s.round_seq).count();
        let round_scaled = result
            .scaling_records
            .iter()
            .filter(|r| r.round_seq == s.round_seq)
            .count();
        assert_eq!(round_players, round_scaled);
    }
}

#[test]
fn test_tournament_cap_scales_400_to_300() {
    init_test_env();
    let config = RatingConfig {
        base_k: 200.0,
        use_mov: false,
        delta_cap_start_round: 1,
        ..Default::default()
    };
    // Five players: the winner scores 4 against an expectation of 2, so 200 * 2 = 400
    let records = generate_round(0, "TN-Worlds", &[48.0, 50.0, 52.0, 54.0, 56.0]);

    let result = compute_ratings(&records, &config).unwrap();

    assert_eq!(result.scaling_records.len(), 5);
    assert_abs_diff_eq!(result.scaling_records[0].delta_original, 400.0);
    assert_abs_diff_eq!(result.scaling_records[0].scale_factor, 0.75);
    assert_abs_diff_eq!(result.history[0].delta, 300.0);
    assert_abs_diff_eq!(result.history[1].delta, 150.0);
    assert_abs_diff_eq!(result.history[2].delta, 0.0);
}

#[test]
fn test_reruns_are_identical() {
    init_test_env();
    let records = generate_tournament(99, 20, 40);
    let config = RatingConfig::default();

    let first = EloModel::new(config.clone()).process(&records).unwrap();
    let second = EloModel::new(config).process(&records).unwrap();

    assert_eq!(first, second);
    for (a, b) in first.final_ratings.iter().zip(&second.final_ratings) {
        assert_eq!(a.rating.to_bits(), b.rating.to_bits());
    }
}

#[test]
fn test_recompute_with_new_config() {
    init_test_env();
    let records = generate_tournament(8, 10, 10);

    let default = compute_ratings(&records, &RatingConfig::default()).unwrap();
    let gentle = compute_ratings(
        &records,
        &RatingConfig {
            base_k: 10.0,
            ..Default::default()
        }
    )
    .unwrap();

    let spread = |r: &[disc_golf_elo::model::structures::player_rating::PlayerRating]| {
        r.first().map(|p| p.rating).unwrap_or_default() - r.last().map(|p| p.rating).unwrap_or_default()
    };
    assert!(spread(gentle.final_ratings.as_slice()) < spread(default.final_ratings.as_slice()));
}

#[test]
fn test_empty_input() {
    let records: Vec<ScoreRecord> = Vec::new();

    let result = compute_ratings(&records, &RatingConfig::default());
    assert!(matches!(result, Err(RatingError::EmptyInput { .. })));
}

#[test]
fn test_late_entrant_uses_start_rating() {
    init_test_env();
    let config = RatingConfig {
        start_rating: 1200.0,
        ..Default::default()
    };
    let mut records = Vec::new();
    for seq in 0..4 {
        records.extend(generate_round(seq, "TR-Weekly", &[50.0, 53.0]));
    }
    records.push(generate_record("Late", 4, "TR-Weekly", 51.0));
    records.push(generate_record("P1", 4, "TR-Weekly", 50.0));

    let result = compute_ratings(&records, &config).unwrap();

    let late = result.player_history("Late");
    assert_eq!(late[0].round_seq, 4);
    assert_eq!(late[0].rating_before, 1200.0);
}
