//! Session: one player's run of games against the leaderboard.
//!
//! The board engine has no idea scores are persisted. The session watches
//! for the Playing -> GameOver transition and hands `(player, score)` to the
//! store exactly once per game. A game abandoned with quit, or with restart
//! after scoring, is handed off at that point instead.

use log::{info, warn};

use crate::core::{Board, BoardResult, BoardSnapshot, MoveOutcome, RandomSource, SimpleRng};
use crate::scores::{RecordOutcome, ScoreStore};
use crate::types::GameAction;

/// What a single [`Session::apply`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The board changed and the game continues.
    Moved(MoveOutcome),
    /// The move changed nothing (including any move after game over).
    Ignored,
    /// This move ended the game; the score has been handed to the store.
    GameOver {
        score: u64,
        /// `None` if the store failed; the failure is logged.
        saved: Option<RecordOutcome>,
    },
    /// A fresh board replaced the current one.
    Restarted { seed: u32 },
}

pub struct Session {
    board: Board,
    player: String,
    best: Option<u64>,
    seed: u32,
    recorded: bool,
}

impl Session {
    /// Start the first game. Fails if `size` is not a valid board size.
    pub fn new(
        size: usize,
        seed: u32,
        player: impl Into<String>,
        store: &dyn ScoreStore,
    ) -> BoardResult<Self> {
        let board = Board::with_seed(size, seed)?;
        Ok(Self::from_board(board, seed, player, store))
    }

    /// Continue from an existing board. `seed` is where restarts derive
    /// their seeds from.
    pub fn from_board(
        board: Board,
        seed: u32,
        player: impl Into<String>,
        store: &dyn ScoreStore,
    ) -> Self {
        let player = player.into();
        let best = match store.best(&player) {
            Ok(entry) => entry.map(|e| e.score),
            Err(e) => {
                warn!("could not read best score for '{}': {}", player, e);
                None
            }
        };
        let n = board.size();
        info!("game started: {}x{} board, seed {}, player '{}'", n, n, seed, player);

        Self {
            board,
            player,
            best,
            seed,
            recorded: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Best score known for the player, including games from this session.
    pub fn best(&self) -> Option<u64> {
        self.best
    }

    /// Seed of the current board.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Whether the current game has already been handed to the store.
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    pub fn apply(
        &mut self,
        action: GameAction,
        store: &mut dyn ScoreStore,
    ) -> BoardResult<SessionEvent> {
        let Some(direction) = action.direction() else {
            let seed = self.restart(store)?;
            return Ok(SessionEvent::Restarted { seed });
        };

        let outcome = self.board.apply_move(direction);
        if !outcome.changed {
            return Ok(SessionEvent::Ignored);
        }

        if self.board.is_game_over() {
            let score = self.board.score();
            info!(
                "game over: score {}, max tile {}",
                score,
                self.board.max_tile()
            );
            let saved = self.hand_off(store);
            return Ok(SessionEvent::GameOver { score, saved });
        }

        Ok(SessionEvent::Moved(outcome))
    }

    /// Hand off the current game if it has not been recorded yet. Called
    /// when the player quits.
    pub fn finish(&mut self, store: &mut dyn ScoreStore) -> Option<RecordOutcome> {
        self.hand_off(store)
    }

    fn restart(&mut self, store: &mut dyn ScoreStore) -> BoardResult<u32> {
        if self.board.score() > 0 {
            self.hand_off(store);
        }

        // Derive the next seed from the current one so a whole session is
        // reproducible from its first seed.
        let seed = SimpleRng::new(self.seed).next_u32();
        self.board = Board::with_seed(self.board.size(), seed)?;
        self.seed = seed;
        self.recorded = false;
        info!("game restarted with seed {}", seed);
        Ok(seed)
    }

    fn hand_off(&mut self, store: &mut dyn ScoreStore) -> Option<RecordOutcome> {
        if self.recorded {
            return None;
        }
        self.recorded = true;

        let score = self.board.score();
        match store.record(&self.player, score) {
            Ok(outcome) => {
                self.best = Some(self.best.map_or(score, |b| b.max(score)));
                info!("score {} for '{}' recorded: {:?}", score, self.player, outcome);
                Some(outcome)
            }
            Err(e) => {
                warn!("failed to save score {} for '{}': {}", score, self.player, e);
                None
            }
        }
    }
}
