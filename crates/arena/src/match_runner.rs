//! Match runner for playing games between engines

use draughts_core::{Board, Color, Engine, GameStatus};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Hard per-game ply cap; reaching it scores the game as a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 400,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines. Engines carry their color, so a fresh
/// pair is built for every game through the factory closures.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines.
    ///
    /// Returns the result from engine1's perspective.
    pub fn run_match<F1, F2>(&self, make_engine1: F1, make_engine2: F2) -> MatchResult
    where
        F1: Fn(Color) -> Box<dyn Engine>,
        F2: Fn(Color) -> Box<dyn Engine>,
    {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (mut white, mut black) = if engine1_white {
                (make_engine1(Color::White), make_engine2(Color::Black))
            } else {
                (make_engine2(Color::White), make_engine1(Color::Black))
            };

            let mut game_result = self.play_game(white.as_mut(), black.as_mut());
            if !engine1_white {
                game_result = game_result.flip();
            }
            result.add(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from White's perspective.
    fn play_game<'a>(&self, white: &'a mut dyn Engine, black: &'a mut dyn Engine) -> GameResult {
        let mut board = Board::new();

        for _ply in 0..self.config.max_plies {
            let side = board.side_to_move();
            let engine = if side == Color::White {
                &mut *white
            } else {
                &mut *black
            };

            match engine.best_move(&mut board) {
                Some(mv) => {
                    board.apply(&mv);
                    board.set_side_to_move(side.other());
                }
                None => {
                    // No legal moves: the side to move loses
                    return if side == Color::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    };
                }
            }

            match board.winner() {
                GameStatus::InProgress => {}
                GameStatus::Draw => return GameResult::Draw,
                GameStatus::Won(Color::White) => return GameResult::Win,
                GameStatus::Won(Color::Black) => return GameResult::Loss,
            }
        }

        // Ply cap reached
        GameResult::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MinimaxSearcher;

    #[test]
    fn test_self_play_completes() {
        let config = MatchConfig {
            num_games: 2,
            max_plies: 150,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(
            |color| Box::new(MinimaxSearcher::with_seed(color, 1, "Losing", 21)) as Box<dyn Engine>,
            |color| Box::new(MinimaxSearcher::with_seed(color, 1, "Losing", 22)) as Box<dyn Engine>,
        );

        assert_eq!(result.total_games(), 2);
    }
}
