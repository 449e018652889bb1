/// Personality-weighted move scoring
use rand::Rng;

use super::evaluator::{evaluate, headquarters_threat};
use crate::constants::*;
use crate::error::EngineError;
use crate::types::{headquarters_of, manhattan, Evaluation, GameView, Move, Personality};

/// Optional scoring terms on top of the plain weighted sum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    pub immediate_explosion_bonus: bool,
}

/// Plain weighted sum of the six channels.
pub fn weighted_total(evaluation: &Evaluation, personality: &Personality) -> f64 {
    personality.aggressiveness * evaluation.aggressive
        + personality.defensiveness * evaluation.defensive
        + personality.greed * evaluation.power_up
        + personality.chain_affinity * evaluation.chain_reaction
        + personality.territoriality * evaluation.territory
        + personality.base_hunting * evaluation.base_threat
}

/// Final score for one placement, including rival focus, jitter and chaos.
///
/// A personality with a rival counts that rival's share of the base-threat
/// channel twice and earns a flat bonus when the move lands within
/// base-threat range of the rival's living headquarters.
pub fn score_move<R: Rng>(
    view: &GameView<'_>,
    row: i32,
    col: i32,
    personality: &Personality,
    options: ScoringOptions,
    rng: &mut R,
) -> Result<f64, EngineError> {
    let evaluation = evaluate(view, row, col, rng)?;
    let mut total = weighted_total(&evaluation, personality);

    if let Some(rival) = personality.rival {
        let rival_hq = headquarters_of(view.headquarters, rival)
            .filter(|hq| hq.is_alive() && hq.owner != view.player)
            .filter(|hq| manhattan(row, col, hq.row, hq.col) <= BASE_THREAT_RADIUS);
        if let Some(hq) = rival_hq {
            // Only the rival's share of the base-threat channel counts twice
            let explodes = view.would_explode(row, col)?;
            let rival_threat = headquarters_threat(row, col, hq, explodes);
            total += personality.base_hunting * rival_threat;
            total += RIVAL_FOCUS_BONUS * personality.base_hunting;
        }
    }

    if options.immediate_explosion_bonus && view.would_explode(row, col)? {
        total += IMMEDIATE_EXPLOSION_BONUS * personality.aggressiveness;
    }

    let jitter = total.abs() * SCORE_JITTER_FRACTION * personality.risk_tolerance;
    total += jitter * rng.gen_range(-1.0..=1.0);
    total += CHAOS_SCALE * personality.chaos * rng.gen::<f64>();

    if !total.is_finite() {
        return Err(EngineError::NonFiniteScore { row, col });
    }
    Ok(total)
}

/// Score every coordinate in `candidates`, preserving their order.
pub fn score_moves<R: Rng>(
    view: &GameView<'_>,
    candidates: &[(i32, i32)],
    personality: &Personality,
    options: ScoringOptions,
    rng: &mut R,
) -> Result<Vec<Move>, EngineError> {
    let mut scored = Vec::with_capacity(candidates.len());
    for &(row, col) in candidates {
        let score = score_move(view, row, col, personality, options, rng)?;
        scored.push(Move::new(row, col, score));
    }
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::StandardGeometry;
    use crate::types::{Cell, GameMode, Grid, Headquarters, PlayerId};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn hq_view<'a>(grid: &'a Grid, hqs: &'a [Headquarters], geometry: &'a StandardGeometry) -> GameView<'a> {
        GameView {
            grid,
            player: PlayerId::Red,
            mode: GameMode::Headquarters,
            headquarters: hqs,
            power_ups: &[],
            geometry,
        }
    }

    #[test]
    fn test_weighted_total() {
        let evaluation = Evaluation {
            aggressive: 10.0,
            defensive: 4.0,
            power_up: 0.0,
            chain_reaction: 3.0,
            territory: 2.0,
            base_threat: 1.0,
        };
        let mut personality = Personality::balanced(PlayerId::Red);
        personality.aggressiveness = 2.0;
        personality.territoriality = 0.5;

        // 2*10 + 4 + 0 + 3 + 0.5*2 + 1 = 29
        assert!((weighted_total(&evaluation, &personality) - 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_calm_personality_scores_plain_sum() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Cell::with_owner(PlayerId::Red, 3)).unwrap();
        grid.set(1, 2, Cell::with_owner(PlayerId::Blue, 2)).unwrap();
        let geometry = StandardGeometry;
        let view = GameView::classic(&grid, PlayerId::Red, &geometry);
        let personality = Personality::balanced(PlayerId::Red);

        let evaluation = evaluate(&view, 1, 1, &mut SmallRng::seed_from_u64(9)).unwrap();
        let score = score_move(
            &view,
            1,
            1,
            &personality,
            ScoringOptions::default(),
            &mut SmallRng::seed_from_u64(9),
        )
        .unwrap();
        assert_eq!(score, weighted_total(&evaluation, &personality));
    }

    #[test]
    fn test_rival_focus_near_rival_headquarters() {
        let grid = Grid::new(7, 7);
        let hqs = [
            Headquarters::new(0, 0, PlayerId::Red, 5),
            Headquarters::new(4, 4, PlayerId::Blue, 5),
        ];
        let geometry = StandardGeometry;
        let view = hq_view(&grid, &hqs, &geometry);

        let plain = Personality::balanced(PlayerId::Red);
        let mut hunter = plain;
        hunter.rival = Some(PlayerId::Blue);

        let evaluation = evaluate(&view, 4, 2, &mut SmallRng::seed_from_u64(3)).unwrap();
        let options = ScoringOptions::default();
        let base = score_move(&view, 4, 2, &plain, options, &mut SmallRng::seed_from_u64(3)).unwrap();
        let focused = score_move(&view, 4, 2, &hunter, options, &mut SmallRng::seed_from_u64(3)).unwrap();

        assert!(evaluation.base_threat > 0.0);
        let expected = base + evaluation.base_threat + RIVAL_FOCUS_BONUS;
        assert!((focused - expected).abs() < 1e-9);

        // Far from the rival nothing changes
        let far_plain = score_move(&view, 0, 2, &plain, options, &mut SmallRng::seed_from_u64(3)).unwrap();
        let far_hunter = score_move(&view, 0, 2, &hunter, options, &mut SmallRng::seed_from_u64(3)).unwrap();
        assert_eq!(far_plain, far_hunter);
    }

    #[test]
    fn test_rival_focus_doubles_only_rival_share() {
        let mut grid = Grid::new(7, 7);
        grid.set(3, 3, Cell::with_owner(PlayerId::Red, 1)).unwrap();
        let hqs = [
            Headquarters::new(0, 0, PlayerId::Red, 5),
            Headquarters::new(3, 2, PlayerId::Blue, 5),
            Headquarters::new(3, 4, PlayerId::Green, 5),
        ];
        let geometry = StandardGeometry;
        let view = hq_view(&grid, &hqs, &geometry);

        let plain = Personality::balanced(PlayerId::Red);
        let mut hunter = plain;
        hunter.rival = Some(PlayerId::Blue);

        let evaluation = evaluate(&view, 3, 3, &mut SmallRng::seed_from_u64(8)).unwrap();
        // Both headquarters sit one step away: 45 each
        assert_eq!(evaluation.base_threat, BASE_THREAT_WEIGHT * 6.0);

        let options = ScoringOptions::default();
        let base = score_move(&view, 3, 3, &plain, options, &mut SmallRng::seed_from_u64(8)).unwrap();
        let focused = score_move(&view, 3, 3, &hunter, options, &mut SmallRng::seed_from_u64(8)).unwrap();
        let rival_share = BASE_THREAT_WEIGHT * 3.0;
        assert!((focused - base - (rival_share + RIVAL_FOCUS_BONUS)).abs() < 1e-9);
    }

    #[test]
    fn test_rival_focus_skips_dead_rival() {
        let grid = Grid::new(7, 7);
        let hqs = [
            Headquarters::new(0, 0, PlayerId::Red, 5),
            Headquarters::new(4, 4, PlayerId::Blue, 0),
        ];
        let geometry = StandardGeometry;
        let view = hq_view(&grid, &hqs, &geometry);
        let plain = Personality::balanced(PlayerId::Red);
        let mut hunter = plain;
        hunter.rival = Some(PlayerId::Blue);

        let options = ScoringOptions::default();
        let a = score_move(&view, 4, 3, &plain, options, &mut SmallRng::seed_from_u64(1)).unwrap();
        let b = score_move(&view, 4, 3, &hunter, options, &mut SmallRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_immediate_explosion_bonus_is_opt_in() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, Cell::with_owner(PlayerId::Red, 1)).unwrap();
        let geometry = StandardGeometry;
        let view = GameView::classic(&grid, PlayerId::Red, &geometry);
        let mut personality = Personality::balanced(PlayerId::Red);
        personality.aggressiveness = 2.0;

        let off = score_move(&view, 0, 0, &personality, ScoringOptions::default(), &mut SmallRng::seed_from_u64(6)).unwrap();
        let on_options = ScoringOptions {
            immediate_explosion_bonus: true,
        };
        let on = score_move(&view, 0, 0, &personality, on_options, &mut SmallRng::seed_from_u64(6)).unwrap();
        assert!((on - off - IMMEDIATE_EXPLOSION_BONUS * 2.0).abs() < 1e-9);

        // (2, 2) is empty and stays below critical mass
        let quiet_off = score_move(&view, 2, 2, &personality, ScoringOptions::default(), &mut SmallRng::seed_from_u64(6)).unwrap();
        let quiet_on = score_move(&view, 2, 2, &personality, on_options, &mut SmallRng::seed_from_u64(6)).unwrap();
        assert_eq!(quiet_off, quiet_on);
    }

    #[test]
    fn test_chaos_and_jitter_bounds() {
        let grid = Grid::new(5, 5);
        let geometry = StandardGeometry;
        let view = GameView::classic(&grid, PlayerId::Red, &geometry);
        let calm = Personality::balanced(PlayerId::Red);
        let mut wild = calm;
        wild.chaos = 1.0;
        wild.risk_tolerance = 1.0;

        for seed in 0..50 {
            let evaluation = evaluate(&view, 2, 2, &mut SmallRng::seed_from_u64(seed)).unwrap();
            let base = weighted_total(&evaluation, &calm);
            let score = score_move(&view, 2, 2, &wild, ScoringOptions::default(), &mut SmallRng::seed_from_u64(seed)).unwrap();
            let spread = base.abs() * SCORE_JITTER_FRACTION;
            assert!(score >= base - spread - 1e-9);
            assert!(score <= base + spread + CHAOS_SCALE + 1e-9);
        }
    }

    #[test]
    fn test_score_moves_preserves_order() {
        let grid = Grid::new(3, 3);
        let geometry = StandardGeometry;
        let view = GameView::classic(&grid, PlayerId::Red, &geometry);
        let personality = Personality::balanced(PlayerId::Red);
        let candidates = [(2, 2), (0, 0), (1, 1)];
        let mut rng = SmallRng::seed_from_u64(0);

        let scored = score_moves(&view, &candidates, &personality, ScoringOptions::default(), &mut rng).unwrap();
        assert_eq!(scored.len(), 3);
        for (scored, &(row, col)) in scored.iter().zip(candidates.iter()) {
            assert!(scored.same_cell(row, col));
        }
    }
}
