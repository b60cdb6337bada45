//! Match runner for playing games between strategies

use chess_core::{Color, FenError, Game, GameStatus};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strategy::{Players, Strategy};
use tracing::{debug, info};

use crate::config::MatchConfig;

/// How a single game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// Ply limit reached with the game still running
    Unfinished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: Strategy,
    pub black: Strategy,
    pub outcome: GameOutcome,
    pub plies: usize,
    pub moves: Vec<String>,
    pub final_fen: String,
}

/// Result of a match (multiple games), from the first player's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first player's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

/// Runs matches between two strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Plays every configured game. Fails only on a bad starting FEN.
    pub fn run(&self) -> Result<MatchSummary, FenError> {
        let start = self.start_game()?;
        let mut result = MatchResult::default();
        let mut games = Vec::with_capacity(self.config.games as usize);

        for game_num in 0..self.config.games {
            // Alternate colors if configured
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;
            let (white, black) = if first_white {
                (self.config.white, self.config.black)
            } else {
                (self.config.black, self.config.white)
            };

            let seed = self.config.seed.wrapping_add(game_num as u64);
            let record = self.play_game(start.clone(), white, black, seed);

            let first_won = match record.outcome {
                GameOutcome::WhiteWins => Some(first_white),
                GameOutcome::BlackWins => Some(!first_white),
                GameOutcome::Stalemate | GameOutcome::Unfinished => None,
            };
            match first_won {
                Some(true) => result.wins += 1,
                Some(false) => result.losses += 1,
                None => result.draws += 1,
            }

            info!(
                game = game_num + 1,
                of = self.config.games,
                %white,
                %black,
                outcome = ?record.outcome,
                plies = record.plies,
                score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                "game finished"
            );
            games.push(record);
        }

        Ok(MatchSummary {
            config: self.config.clone(),
            result,
            games,
        })
    }

    fn start_game(&self) -> Result<Game, FenError> {
        match &self.config.start_fen {
            Some(fen) => Game::from_fen(fen),
            None => Ok(Game::new()),
        }
    }

    /// Play a single game between the two strategies
    fn play_game(&self, mut game: Game, white: Strategy, black: Strategy, seed: u64) -> GameRecord {
        let players = Players::new(Some(white), Some(black));
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..self.config.max_plies {
            if !players.make_strategy_move(&mut game, &mut rng) {
                break;
            }
        }

        let status = game.status();
        let outcome = match status {
            GameStatus::Checkmate => match game.side_to_move() {
                Color::White => GameOutcome::BlackWins,
                Color::Black => GameOutcome::WhiteWins,
            },
            GameStatus::Stalemate => GameOutcome::Stalemate,
            GameStatus::Active | GameStatus::Check => GameOutcome::Unfinished,
        };
        debug!(fen = %game.fen(), ?status, "final position");

        GameRecord {
            white,
            black,
            outcome,
            plies: game.moves().len(),
            moves: game.history(),
            final_fen: game.fen(),
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
