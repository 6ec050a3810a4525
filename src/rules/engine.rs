//! The Focus rules engine.
//!
//! `FocusGame` owns both players and the board. Every turn is either a
//! stack move (`move_piece`) or a reserve placement (`reserved_move`).
//! Both run the same pipeline:
//!
//! 1. Validate, short-circuiting on the first failure. Nothing is mutated
//!    until validation passes.
//! 2. Land pieces on the target tile one at a time. Whenever the tile grows
//!    past `max_stack_height`, its bottom piece is ejected: the mover gains
//!    a reserve if it was their own color, a capture otherwise.
//! 3. Report `Won` if the mover reached the capture threshold (the turn
//!    stays with them), otherwise pass the turn and report `Moved`.

use im::Vector;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::error::{MoveError, SetupError};
use crate::board::{Board, Tile};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameConfig;
use crate::core::piece::PieceColor;
use crate::core::player::{Player, PlayerId, PlayerPair};
use crate::core::position::Position;

/// Unit steps for the four orthogonal directions.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied, turn passed to the other player.
    Moved,
    /// Move applied and the named player has won. The turn did not pass.
    Won(String),
}

impl MoveOutcome {
    /// Check if this outcome ended the game.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Won(_))
    }

    /// Name of the winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            MoveOutcome::Won(name) => Some(name),
            MoveOutcome::Moved => None,
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved => write!(f, "successfully moved"),
            MoveOutcome::Won(name) => write!(f, "{} wins!", name),
        }
    }
}

/// What an overflow ejection gave the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overflow {
    Reserve,
    Capture,
}

/// Eject the bottom piece of an over-tall tile and credit the mover.
fn resolve_overflow(tile: &mut Tile, max_height: usize, mover: &mut Player) -> Option<Overflow> {
    if tile.height() <= max_height {
        return None;
    }
    let ejected = tile.pop_bottom()?;
    let gain = if ejected == mover.color() {
        mover.add_reserve();
        Overflow::Reserve
    } else {
        mover.add_capture();
        Overflow::Capture
    };
    trace!(
        "{} overflowed at {}: {} ejected, {} gains a {:?}",
        tile.position(),
        tile.height() + 1,
        ejected,
        mover.name(),
        gain
    );
    Some(gain)
}

fn record_gain(record: &mut ActionRecord, gain: Option<Overflow>) {
    match gain {
        Some(Overflow::Reserve) => record.reserves_gained += 1,
        Some(Overflow::Capture) => record.captures_gained += 1,
        None => {}
    }
}

/// Builder for games with non-standard rules.
///
/// ```
/// use focus_engine::core::PieceColor;
/// use focus_engine::rules::FocusGameBuilder;
///
/// let game = FocusGameBuilder::new()
///     .starting_reserves(2)
///     .captures_to_win(3)
///     .build(("PlayerA", PieceColor::RED), ("PlayerB", PieceColor::GREEN))
///     .unwrap();
///
/// assert_eq!(game.reserve_count("PlayerA"), Ok(2));
/// assert_eq!(game.config().captures_to_win, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FocusGameBuilder {
    config: GameConfig,
}

impl FocusGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn side_length(mut self, side_length: usize) -> Self {
        self.config.side_length = side_length;
        self
    }

    pub fn max_stack_height(mut self, height: usize) -> Self {
        self.config.max_stack_height = height;
        self
    }

    pub fn captures_to_win(mut self, captures: u32) -> Self {
        self.config.captures_to_win = captures;
        self
    }

    pub fn starting_reserves(mut self, reserves: u32) -> Self {
        self.config.starting_reserves = reserves;
        self
    }

    /// Build the game. The first player moves first.
    pub fn build(
        self,
        first: (impl Into<String>, impl Into<PieceColor>),
        second: (impl Into<String>, impl Into<PieceColor>),
    ) -> Result<FocusGame, SetupError> {
        self.config.validate()?;

        let reserves = self.config.starting_reserves;
        let first = Player::new(first.0, first.1.into()).with_reserves(reserves);
        let second = Player::new(second.0, second.1.into()).with_reserves(reserves);

        if first.name() == second.name() {
            return Err(SetupError::DuplicateName(first.name().to_string()));
        }
        if first.color() == second.color() {
            return Err(SetupError::DuplicateColor(first.color()));
        }

        let board = Board::new(self.config.side_length, first.color(), second.color());
        debug!(
            "new game: {} ({}) vs {} ({}) on {}x{}",
            first.name(),
            first.color(),
            second.name(),
            second.color(),
            self.config.side_length,
            self.config.side_length
        );

        Ok(FocusGame {
            config: self.config,
            players: PlayerPair::new(first, second),
            board,
            active: PlayerId::FIRST,
            history: Vector::new(),
        })
    }
}

/// A game of Focus between two named players.
///
/// Each instance is independent; there is no shared or global state.
/// The engine is synchronous and holds no locks, so callers driving one
/// game from several threads must wrap it themselves.
///
/// ## After a win
///
/// The engine does not lock the game once a player wins. A winning move
/// reports `MoveOutcome::Won` and leaves the turn with the winner; further
/// operations are still accepted and evaluated normally. Callers decide
/// when to stop.
///
/// ## Example
///
/// ```
/// use focus_engine::core::PieceColor;
/// use focus_engine::rules::{FocusGame, MoveOutcome};
///
/// let mut game = FocusGame::new(("PlayerA", PieceColor::RED), ("PlayerB", PieceColor::GREEN)).unwrap();
///
/// assert_eq!(game.move_piece("PlayerA", (0, 0), (0, 1), 1), Ok(MoveOutcome::Moved));
/// assert_eq!(game.tile_pieces((0, 1)).unwrap(), &[PieceColor::RED, PieceColor::RED]);
/// assert_eq!(game.active_turn(), "PlayerB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusGame {
    config: GameConfig,
    players: PlayerPair<Player>,
    board: Board,
    active: PlayerId,
    history: Vector<ActionRecord>,
}

impl FocusGame {
    /// Start a standard game. `first` moves first.
    pub fn new(
        first: (impl Into<String>, impl Into<PieceColor>),
        second: (impl Into<String>, impl Into<PieceColor>),
    ) -> Result<Self, SetupError> {
        FocusGameBuilder::new().build(first, second)
    }

    // === Moves ===

    /// Move the top `count` pieces of `start` onto `destination`.
    ///
    /// `destination` must be exactly `count` cells from `start` in a
    /// straight row or column, and the mover must control the start pile.
    pub fn move_piece(
        &mut self,
        name: &str,
        start: impl Into<Position>,
        destination: impl Into<Position>,
        count: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let (start, destination) = (start.into(), destination.into());
        self.try_move_piece(name, start, destination, count)
            .inspect_err(|e| debug!("rejected {} {} -> {} x{}: {}", name, start, destination, count, e))
    }

    fn try_move_piece(
        &mut self,
        name: &str,
        start: Position,
        destination: Position,
        count: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let mover = self.player_id(name)?;
        self.check_turn(mover)?;
        self.check_location(mover, start, destination, count)?;
        self.check_piece_count(start, count)?;

        let action = Action::Stack {
            start,
            destination,
            count,
        };
        let mut record = self.new_record(mover, action);
        let max_height = self.config.max_stack_height;

        let (from, to) = self
            .board
            .tile_pair_mut(start, destination)
            .ok_or_else(|| MoveError::IllegalMove(format!("cannot move from {} to {}", start, destination)))?;
        let player = &mut self.players[mover];

        let run = from.take_top(count);
        for piece in run {
            to.push([piece]);
            record_gain(&mut record, resolve_overflow(to, max_height, player));
        }

        debug!("{} moved {} from {} to {}", name, count, start, destination);
        Ok(self.finish_turn(mover, record))
    }

    /// Place one reserve piece on `location`.
    pub fn reserved_move(&mut self, name: &str, location: impl Into<Position>) -> Result<MoveOutcome, MoveError> {
        let location = location.into();
        self.try_reserved_move(name, location)
            .inspect_err(|e| debug!("rejected {} reserve to {}: {}", name, location, e))
    }

    fn try_reserved_move(&mut self, name: &str, location: Position) -> Result<MoveOutcome, MoveError> {
        let mover = self.player_id(name)?;
        self.check_turn(mover)?;
        if self.players[mover].reserves() < 1 {
            return Err(MoveError::NoReserves(name.to_string()));
        }

        let mut record = self.new_record(mover, Action::Reserve { location });
        let max_height = self.config.max_stack_height;

        let tile = self
            .board
            .tile_mut(location)
            .ok_or_else(|| MoveError::IllegalMove(format!("{} is off the board", location)))?;
        let player = &mut self.players[mover];

        player.spend_reserve();
        tile.push([player.color()]);
        record_gain(&mut record, resolve_overflow(tile, max_height, player));

        debug!("{} placed a reserve at {}", name, location);
        Ok(self.finish_turn(mover, record))
    }

    /// Apply an `Action` for the named player.
    pub fn apply(&mut self, name: &str, action: &Action) -> Result<MoveOutcome, MoveError> {
        match *action {
            Action::Stack {
                start,
                destination,
                count,
            } => self.move_piece(name, start, destination, count),
            Action::Reserve { location } => self.reserved_move(name, location),
        }
    }

    /// Every action the named player could take right now.
    ///
    /// Empty for an unknown player or when it is not their turn.
    #[must_use]
    pub fn legal_actions(&self, name: &str) -> Vec<Action> {
        let Ok(player) = self.player_id(name) else {
            return vec![];
        };
        if player != self.active {
            return vec![];
        }

        let color = self.players[player].color();
        let mut actions = Vec::new();

        for tile in self.board.tiles().filter(|t| t.top() == Some(color)) {
            let start = tile.position();
            for count in 1..=tile.height() {
                for (dr, dc) in DIRECTIONS {
                    let destination = start.offset(dr, dc, count as i32);
                    if self.board.contains(destination) {
                        actions.push(Action::Stack {
                            start,
                            destination,
                            count,
                        });
                    }
                }
            }
        }

        if self.players[player].reserves() > 0 {
            actions.extend(self.board.tiles().map(|t| Action::reserve(t.position())));
        }

        actions
    }

    // === Validation ===

    fn player_id(&self, name: &str) -> Result<PlayerId, MoveError> {
        self.players
            .find(|p| p.name() == name)
            .ok_or_else(|| MoveError::UnknownPlayer(name.to_string()))
    }

    fn check_turn(&self, player: PlayerId) -> Result<(), MoveError> {
        if player == self.active {
            Ok(())
        } else {
            Err(MoveError::OutOfTurn {
                player: self.players[player].name().to_string(),
                active: self.active_turn().to_string(),
            })
        }
    }

    /// Shape and ownership checks for a stack move.
    ///
    /// A zero count passes the distance check (one axis always differs by
    /// zero) and is rejected by `check_piece_count` instead.
    fn check_location(
        &self,
        mover: PlayerId,
        start: Position,
        destination: Position,
        count: usize,
    ) -> Result<(), MoveError> {
        let illegal = |reason: String| Err(MoveError::IllegalMove(reason));

        if !self.board.contains(start) {
            return illegal(format!("start {} is off the board", start));
        }
        if !self.board.contains(destination) {
            return illegal(format!("destination {} is off the board", destination));
        }
        if start == destination {
            return illegal(format!("start and destination are both {}", start));
        }

        let (row_delta, col_delta) = start.deltas(destination);
        if row_delta != 0 && col_delta != 0 {
            return illegal(format!("{} to {} is not in a straight line", start, destination));
        }
        let count = count as u64;
        if u64::from(row_delta) != count && u64::from(col_delta) != count {
            return illegal(format!(
                "{} to {} is {} cells, not {}",
                start,
                destination,
                row_delta.max(col_delta),
                count
            ));
        }

        let color = self.players[mover].color();
        match self.board.tile(start).and_then(Tile::top) {
            Some(top) if top == color => Ok(()),
            Some(top) => illegal(format!("pile at {} is topped by {}, not {}", start, top, color)),
            None => illegal(format!("pile at {} is empty", start)),
        }
    }

    fn check_piece_count(&self, start: Position, count: usize) -> Result<(), MoveError> {
        let available = self.board.tile(start).map_or(0, Tile::height);
        if count == 0 || count > available {
            return Err(MoveError::IllegalPieceCount {
                requested: count,
                available,
            });
        }
        Ok(())
    }

    // === Turn bookkeeping ===

    fn new_record(&self, player: PlayerId, action: Action) -> ActionRecord {
        ActionRecord::new(player, action, self.history.len() as u32 + 1)
    }

    fn finish_turn(&mut self, mover: PlayerId, mut record: ActionRecord) -> MoveOutcome {
        let outcome = if self.is_winner(mover) {
            let name = self.players[mover].name().to_string();
            info!(
                "{} wins with {} captures",
                name,
                self.players[mover].captures()
            );
            record.winning = true;
            MoveOutcome::Won(name)
        } else {
            self.active = mover.other();
            MoveOutcome::Moved
        };
        self.history.push_back(record);
        outcome
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        self.players[player].captures() >= self.config.captures_to_win
    }

    // === Queries ===

    /// The pile at `position`, bottom first.
    pub fn tile_pieces(&self, position: impl Into<Position>) -> Result<&[PieceColor], MoveError> {
        self.tile_at(position).map(Tile::pieces)
    }

    /// The tile at `position`.
    pub fn tile_at(&self, position: impl Into<Position>) -> Result<&Tile, MoveError> {
        let position = position.into();
        self.board
            .tile(position)
            .ok_or_else(|| MoveError::IllegalMove(format!("{} is off the board", position)))
    }

    /// The named player's record.
    pub fn player(&self, name: &str) -> Result<&Player, MoveError> {
        self.player_id(name).map(|id| &self.players[id])
    }

    /// Both players, first mover first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    pub fn reserve_count(&self, name: &str) -> Result<u32, MoveError> {
        self.player(name).map(Player::reserves)
    }

    pub fn capture_count(&self, name: &str) -> Result<u32, MoveError> {
        self.player(name).map(Player::captures)
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn active_turn(&self) -> &str {
        self.players[self.active].name()
    }

    /// Seat of the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Check if the named player has reached the capture threshold.
    pub fn has_won(&self, name: &str) -> Result<bool, MoveError> {
        self.player_id(name).map(|id| self.is_winner(id))
    }

    /// The first player found at or above the capture threshold.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players
            .find(|p| p.captures() >= self.config.captures_to_win)
            .map(|id| &self.players[id])
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rows of piece lists, for debugging and display.
    #[must_use]
    pub fn board_rows(&self) -> Vec<Vec<Vec<PieceColor>>> {
        self.board.rows()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Pieces on the board plus every reserve and capture.
    ///
    /// Constant for the life of a game.
    #[must_use]
    pub fn piece_total(&self) -> usize {
        let held: u32 = self.players().map(|p| p.reserves() + p.captures()).sum();
        self.board.piece_count() + held as usize
    }
}
