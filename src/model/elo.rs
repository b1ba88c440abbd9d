use super::constants::{ELO_SCALE, MOV_DAMPENING, MOV_RATING_COEFFICIENT};

/// Logistic expected score of a player rated `r_i` against one rated `r_j`.
///
/// The `_clamp` bound on the rating difference is accepted but not applied:
/// the exponent always uses the raw difference, and every rating computed so
/// far depends on that.
pub fn expected_score(r_i: f64, r_j: f64, _clamp: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((r_j - r_i) / ELO_SCALE))
}

/// Margin of victory weight. Blowouts between closely rated players count for
/// more than blowouts the rating gap already predicted.
pub fn mov_multiplier(margin: f64, rating_diff: f64) -> f64 {
    if margin <= 0.0 {
        return 1.0;
    }

    (1.0 + margin).ln() * (MOV_DAMPENING / (MOV_RATING_COEFFICIENT * rating_diff.abs() + MOV_DAMPENING))
}
