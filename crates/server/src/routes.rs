//! HTTP routes: a greeting probe and the move-prediction endpoint.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use checkers_core::{parse_placements, pos_to_coord, Board, Engine, Side, BOARD_SIZE};
use minimax_engine::MinimaxEngine;

use crate::config::ServerConfig;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

pub fn app(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict_move", post(predict_move))
        .with_state(AppState { config })
}

async fn home() -> &'static str {
    "Hello, checkers!"
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub filename: Option<String>,
    pub depth: Option<u8>,
    pub side: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoveDto {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub best_move: MoveDto,
    /// Board after the predicted move, one string per row: '.', 'o', 'x'.
    pub board: Vec<String>,
    pub score: i32,
}

async fn predict_move(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!(?req, "received prediction request");

    let filename = req
        .filename
        .as_deref()
        .filter(|f| !f.is_empty())
        .ok_or(ApiError::MissingFilename)?;
    let depth = req.depth.unwrap_or(state.config.depth);
    let side_str = req.side.as_deref().unwrap_or(&state.config.side);
    let side = parse_side(side_str).ok_or_else(|| ApiError::InvalidSide(side_str.to_string()))?;

    let text = tokio::fs::read_to_string(filename)
        .await
        .map_err(|_| ApiError::FileNotFound(filename.to_string()))?;
    let mut board = parse_placements(&text)?;

    let mut engine = MinimaxEngine::new();
    let result = engine.search(&board, side, depth)?;
    let mv = result.best_move.ok_or(ApiError::NoMove)?;

    board.apply_move(mv)?;
    info!(
        from = %pos_to_coord(mv.from),
        to = %pos_to_coord(mv.to),
        score = result.score,
        nodes = result.nodes,
        "prediction served"
    );

    Ok(Json(PredictResponse {
        best_move: MoveDto {
            from: pos_to_coord(mv.from),
            to: pos_to_coord(mv.to),
        },
        board: board_rows(&board),
        score: result.score,
    }))
}

fn parse_side(s: &str) -> Option<Side> {
    match s {
        "o" | "O" => Some(Side::One),
        "x" | "X" => Some(Side::Two),
        _ => None,
    }
}

fn board_rows(board: &Board) -> Vec<String> {
    let cells: Vec<Option<Side>> = board.cells().collect();
    (0..BOARD_SIZE as usize)
        .map(|row| {
            (0..BOARD_SIZE as usize)
                .map(|col| match cells[row * BOARD_SIZE as usize + col] {
                    Some(Side::One) => 'o',
                    Some(Side::Two) => 'x',
                    None => '.',
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod routes_tests;
