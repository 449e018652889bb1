use serde::de::DeserializeOwned;
use serde_wasm_bindgen;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::logic::MoveEngine;
use crate::types::{GameMode, Grid, Headquarters, PlayerCount, PlayerId, PowerUp};

/// Browser-facing opponent for one match
#[wasm_bindgen]
pub struct AiOpponent {
    engine: MoveEngine,
}

#[wasm_bindgen]
impl AiOpponent {
    #[wasm_bindgen(constructor)]
    pub fn new(player_count: u32) -> Self {
        let player_count = PlayerCount::try_from(player_count).unwrap_or_else(|reason| {
            warn!(%reason, "falling back to two players");
            PlayerCount::default()
        });
        Self {
            engine: MoveEngine::new(EngineConfig::with_player_count(player_count)),
        }
    }

    /// Build from a `{ player_count, strategy, rival_targeting, ... }` object.
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Self {
        let config = decode::<EngineConfig>(config, "config").unwrap_or_else(|err| {
            warn!(error = %err, "using default engine config");
            EngineConfig::default()
        });
        Self::from_config(config)
    }

    #[wasm_bindgen]
    pub fn is_legal_move(
        &self,
        grid: JsValue,
        row: i32,
        col: i32,
        player: JsValue,
        mode: JsValue,
        hqs: JsValue,
    ) -> bool {
        let decoded = (|| -> Result<_, EngineError> {
            Ok((
                decode::<Grid>(grid, "grid")?,
                decode::<PlayerId>(player, "player")?,
                decode::<GameMode>(mode, "mode")?,
                decode_list::<Headquarters>(hqs, "hqs")?,
            ))
        })();

        match decoded {
            Ok((grid, player, mode, hqs)) => {
                self.engine.is_legal_move(&grid, row, col, player, mode, &hqs)
            }
            Err(err) => {
                warn!(error = %err, "rejecting move with unreadable input");
                false
            }
        }
    }

    /// Chosen `{ row, col, score }`, or `null` when there is no move.
    #[wasm_bindgen]
    pub fn get_move(
        &mut self,
        grid: JsValue,
        player: JsValue,
        mode: JsValue,
        hqs: JsValue,
        power_ups: JsValue,
    ) -> JsValue {
        let decoded = (|| -> Result<_, EngineError> {
            Ok((
                decode::<Grid>(grid, "grid")?,
                decode::<PlayerId>(player, "player")?,
                decode::<GameMode>(mode, "mode")?,
                decode_list::<Headquarters>(hqs, "hqs")?,
                decode_list::<PowerUp>(power_ups, "power_ups")?,
            ))
        })();

        let (grid, player, mode, hqs, power_ups) = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(error = %err, "no move for unreadable input");
                return JsValue::NULL;
            }
        };

        match self.engine.get_move(&grid, player, mode, &hqs, &power_ups) {
            Some(chosen) => serde_wasm_bindgen::to_value(&chosen).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen]
    pub fn reset_personalities(&mut self) {
        self.engine.reset_personalities();
    }

    #[wasm_bindgen]
    pub fn get_last_search_duration(&self) -> f64 {
        self.engine.metrics().last_search_duration_ms
    }

    #[wasm_bindgen]
    pub fn get_last_candidate_count(&self) -> usize {
        self.engine.metrics().last_candidate_count
    }

    #[wasm_bindgen]
    pub fn get_player_count(&self) -> u32 {
        self.engine.config().player_count.into()
    }
}

impl AiOpponent {
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            engine: MoveEngine::new(config),
        }
    }

    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut MoveEngine {
        &mut self.engine
    }
}

fn decode<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, EngineError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| EngineError::InvalidInput(format!("{}: {}", what, err)))
}

/// `null` and `undefined` read as an empty list.
fn decode_list<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<Vec<T>, EngineError> {
    if value.is_null() || value.is_undefined() {
        return Ok(Vec::new());
    }
    decode(value, what)
}
