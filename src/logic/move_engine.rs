use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::decision_scoring::{is_legal_move, select};
use crate::dependency::{measure, Geometry, PersonalityStore, StandardGeometry};
use crate::error::EngineError;
use crate::types::{GameMode, GameView, Grid, Headquarters, Move, PlayerId, PowerUp, SearchMetrics};

/// One opponent engine per match.
///
/// Owns the personality table and the random source, so two matches never
/// share state.
pub struct MoveEngine {
    config: EngineConfig,
    personalities: PersonalityStore,
    rng: SmallRng,
    geometry: Box<dyn Geometry>,
    metrics: SearchMetrics,
}

impl MoveEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_geometry(config, Box::new(StandardGeometry))
    }

    pub fn with_geometry(config: EngineConfig, geometry: Box<dyn Geometry>) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let personalities =
            PersonalityStore::new(config.player_count.roster(), config.rival_targeting);
        Self {
            config,
            personalities,
            rng,
            geometry,
            metrics: SearchMetrics::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> SearchMetrics {
        self.metrics
    }

    pub fn personalities(&self) -> &PersonalityStore {
        &self.personalities
    }

    pub fn is_legal_move(
        &self,
        grid: &Grid,
        row: i32,
        col: i32,
        player: PlayerId,
        mode: GameMode,
        hqs: &[Headquarters],
    ) -> bool {
        is_legal_move(grid, row, col, player, mode, hqs, self.geometry.as_ref())
    }

    /// Choose a move for `player`, or `None` when there is nothing to play.
    ///
    /// Internal faults are logged and reported as `None`.
    pub fn get_move(
        &mut self,
        grid: &Grid,
        player: PlayerId,
        mode: GameMode,
        hqs: &[Headquarters],
        power_ups: &[PowerUp],
    ) -> Option<Move> {
        match self.try_get_move(grid, player, mode, hqs, power_ups) {
            Ok(chosen) => chosen,
            Err(err) => {
                warn!(?player, error = %err, "move selection failed");
                None
            }
        }
    }

    /// Same as [`MoveEngine::get_move`] but surfaces the error.
    pub fn try_get_move(
        &mut self,
        grid: &Grid,
        player: PlayerId,
        mode: GameMode,
        hqs: &[Headquarters],
        power_ups: &[PowerUp],
    ) -> Result<Option<Move>, EngineError> {
        let personality = self.personalities.personality_of(player, &mut self.rng);
        let view = GameView {
            grid,
            player,
            mode,
            headquarters: hqs,
            power_ups,
            geometry: self.geometry.as_ref(),
        };

        let config = &self.config;
        let rng = &mut self.rng;
        let (selection, duration) = measure(|| select(&view, &personality, config, rng));
        let selection = selection?;

        self.metrics
            .update_search(duration, selection.candidate_count);
        if let Some(stats) = selection.search {
            trace!(
                nodes = stats.nodes_visited,
                leaves = stats.leaf_evaluations,
                "search statistics"
            );
        }
        debug!(
            ?player,
            ?mode,
            candidates = selection.candidate_count,
            duration_ms = duration,
            chosen = ?selection.chosen,
            "turn decided"
        );

        Ok(selection.chosen)
    }

    /// Forget every personality; the next request for each player draws a new one.
    pub fn reset_personalities(&mut self) {
        debug!(count = self.personalities.len(), "resetting personalities");
        self.personalities.reset();
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchStrategy;
    use crate::decision_scoring::{evaluate, legal_moves};
    use crate::types::{Cell, PlayerCount, PowerUpKind};

    fn seeded(seed: u64) -> MoveEngine {
        MoveEngine::new(EngineConfig {
            seed: Some(seed),
            ..EngineConfig::new()
        })
    }

    #[test]
    fn test_three_by_three_capture_example() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::with_owner(PlayerId::Red, 3)).unwrap();
        grid.set(0, 0, Cell::with_owner(PlayerId::Blue, 1)).unwrap();
        let geometry = StandardGeometry;
        let engine = seeded(1);

        assert!(engine.is_legal_move(&grid, 1, 1, PlayerId::Red, GameMode::Classic, &[]));
        assert!(!engine.is_legal_move(&grid, 0, 0, PlayerId::Red, GameMode::Classic, &[]));
        let view = GameView::classic(&grid, PlayerId::Red, &geometry);
        assert!(legal_moves(&view).contains(&(1, 1)));
        assert!(view.would_explode(1, 1).unwrap());
        // Classic mode scores aggressive = 0 here: (0, 0) is diagonal to (1, 1)
        assert_eq!(evaluate(&view, 1, 1, &mut SmallRng::seed_from_u64(0)).unwrap().aggressive, 0.0);

        // The diagonal enemy only registers through the headquarters-mode
        // proximity window
        let hqs = [
            Headquarters::new(2, 0, PlayerId::Red, 5),
            Headquarters::new(0, 2, PlayerId::Blue, 5),
        ];
        let hq_view = GameView {
            mode: GameMode::Headquarters,
            headquarters: &hqs,
            ..view
        };
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(evaluate(&hq_view, 1, 1, &mut rng).unwrap().aggressive > 0.0);

        // An orthogonal enemy is a capture in either mode
        grid.set(0, 1, Cell::with_owner(PlayerId::Blue, 1)).unwrap();
        let view = GameView::classic(&grid, PlayerId::Red, &geometry);
        let evaluation = evaluate(&view, 1, 1, &mut rng).unwrap();
        assert!(evaluation.aggressive > 0.0);
    }

    #[test]
    fn test_get_move_returns_legal_move() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::with_owner(PlayerId::Red, 3)).unwrap();
        grid.set(0, 0, Cell::with_owner(PlayerId::Blue, 1)).unwrap();

        for strategy in [SearchStrategy::Direct, SearchStrategy::Minimax] {
            let mut engine = MoveEngine::new(EngineConfig {
                strategy,
                seed: Some(4),
                ..EngineConfig::new()
            });
            let chosen = engine
                .get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[])
                .unwrap();
            assert!(engine.is_legal_move(
                &grid,
                chosen.row,
                chosen.col,
                PlayerId::Red,
                GameMode::Classic,
                &[]
            ));
            assert_eq!(engine.metrics().last_candidate_count, 8);
        }
    }

    #[test]
    fn test_get_move_none_on_full_grid() {
        let mut grid = Grid::new(2, 2);
        for (row, col, _) in Grid::new(2, 2).iter() {
            grid.set(row, col, Cell::with_owner(PlayerId::Blue, 1)).unwrap();
        }
        let mut engine = seeded(0);
        assert_eq!(engine.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[]), None);
    }

    #[test]
    fn test_get_move_survives_saturated_cell() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, Cell::with_owner(PlayerId::Red, u32::MAX)).unwrap();
        grid.set(2, 2, Cell::with_owner(PlayerId::Blue, u32::MAX)).unwrap();

        for strategy in [SearchStrategy::Direct, SearchStrategy::Minimax] {
            let mut engine = MoveEngine::new(EngineConfig {
                strategy,
                seed: Some(6),
                ..EngineConfig::new()
            });
            let chosen = engine.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[]);
            assert!(chosen.is_some());
        }
    }

    #[test]
    fn test_headquarters_mode_grabs_power_up() {
        let grid = Grid::new(5, 5);
        let hqs = [
            Headquarters::new(0, 0, PlayerId::Red, 5),
            Headquarters::new(4, 4, PlayerId::Blue, 5),
        ];
        let power_ups = [PowerUp::new(0, 3, PowerUpKind::Diamond)];
        let mut engine = seeded(9);

        let chosen = engine
            .get_move(&grid, PlayerId::Red, GameMode::Headquarters, &hqs, &power_ups)
            .unwrap();
        assert!(chosen.same_cell(0, 3));
    }

    #[test]
    fn test_personality_stable_until_reset() {
        let grid = Grid::new(3, 3);
        let mut engine = seeded(21);

        engine.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[]);
        let first = *engine.personalities().get(PlayerId::Red).unwrap();
        engine.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[]);
        assert_eq!(*engine.personalities().get(PlayerId::Red).unwrap(), first);

        engine.reset_personalities();
        assert!(engine.personalities().is_empty());
        engine.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[]);
        assert_ne!(*engine.personalities().get(PlayerId::Red).unwrap(), first);
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Cell::with_owner(PlayerId::Red, 2)).unwrap();
        grid.set(2, 2, Cell::with_owner(PlayerId::Blue, 2)).unwrap();

        let mut a = seeded(77);
        let mut b = seeded(77);
        for _ in 0..5 {
            assert_eq!(
                a.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[]),
                b.get_move(&grid, PlayerId::Red, GameMode::Classic, &[], &[])
            );
        }
    }

    #[test]
    fn test_rival_targeting_assigns_rival() {
        let grid = Grid::new(3, 3);
        let mut engine = MoveEngine::new(EngineConfig {
            seed: Some(3),
            ..EngineConfig::extended(PlayerCount::Four)
        });
        engine.get_move(&grid, PlayerId::Green, GameMode::Classic, &[], &[]);
        let rival = engine.personalities().get(PlayerId::Green).unwrap().rival;
        assert!(rival.is_some());
        assert_ne!(rival, Some(PlayerId::Green));
    }
}
