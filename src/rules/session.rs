//! The game session: one explicitly constructed object per game.
//!
//! `GameSession` owns the board, the players, the hidden solution, the log,
//! and the single random source. Every command either succeeds and returns
//! an outcome, or fails with a `TurnError` and leaves the session untouched.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingRoll --roll_dice--> Moving --(budget spent)--> OutOfMoves
//!      ^                        |                            |
//!      +--------- end_turn -----+----------------------------+
//! ```
//!
//! `make_suggestion` and `make_accusation` are side actions available in
//! any phase while the current player stands in a room (center or door).
//! Neither consumes move budget or ends the turn.
//!
//! ## Example
//!
//! ```
//! use clue_engine::{GameConfig, SessionBuilder, TurnError};
//!
//! let mut session = SessionBuilder::new(GameConfig::classic())
//!     .characters(&[0, 1, 2])
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let roll = session.roll_dice().unwrap();
//! assert_eq!(session.moves_left(), roll.total());
//! assert_eq!(session.roll_dice(), Err(TurnError::AlreadyRolled));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::disproof::{resolve_disproof, CardReveal, Disproof, Suggestion};
use super::log::GameLog;
use super::outcome::{
    AccusationOutcome, DiceRoll, GameOutcome, MoveOutcome, SuggestionOutcome, TurnPhase,
};
use crate::board::{Board, Moves, Pos, RoomId};
use crate::cards::{build_deck, choose_solution, deal, validate_deck, Card, Solution};
use crate::core::{
    GameConfig, GameRng, Player, PlayerId, PlayerMap, Rgb, SetupError, TurnError,
};

/// Shown to the suggester when nobody could disprove.
pub const UNDISPUTED_NOTICE: &str =
    "No one could disprove your suggestion. This card might be part of the solution!";

/// Builder for a `GameSession`.
pub struct SessionBuilder {
    config: GameConfig,
    characters: Vec<usize>,
    seed: Option<u64>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            characters: Vec::new(),
            seed: None,
        }
    }

    /// Seat the given characters (indices into `config.characters`) in
    /// turn order.
    #[must_use]
    pub fn characters(mut self, indices: &[usize]) -> Self {
        self.characters = indices.to_vec();
        self
    }

    /// Fix the random seed. Without one the seed comes from the OS.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the board, pick the solution, deal, and open the log.
    pub fn build(self) -> Result<GameSession, SetupError> {
        let config = self.config;
        let count = self.characters.len();
        let min = config.min_players.max(1);
        let max = config.max_players.min(usize::from(u8::MAX));
        if !(min..=max).contains(&count) {
            return Err(SetupError::PlayerCount { got: count, min, max });
        }

        for (i, &index) in self.characters.iter().enumerate() {
            if index >= config.characters.len() {
                return Err(SetupError::UnknownCharacter(index));
            }
            if self.characters[..i].contains(&index) {
                return Err(SetupError::DuplicateCharacter(index));
            }
        }

        let board = Board::build(&config.layout);

        let deck = build_deck(
            config.characters.iter().map(|c| c.name.as_str()),
            config.weapons.iter().map(String::as_str),
            board.rooms().iter().map(|r| r.name.as_str()),
        );
        validate_deck(&deck)?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let (solution, remaining) = choose_solution(deck, &mut rng)?;
        let dealt = deal(remaining, count, config.cards_per_player, &mut rng);

        let mut players = PlayerMap::from_vec(
            self.characters
                .iter()
                .zip(PlayerId::all(count))
                .map(|(&index, id)| {
                    let spec = &config.characters[index];
                    Player::new(id, spec.name.clone(), spec.color, spec.start)
                })
                .collect(),
        );
        for (id, hand) in dealt.hands.iter() {
            players[id].set_hand(hand.clone());
        }

        info!(players = count, seed = rng.seed(), "game started");

        let mut session = GameSession {
            log: GameLog::new(config.log_page_size),
            board,
            players,
            current: PlayerId::new(0),
            dice: None,
            moves_left: 0,
            has_rolled: false,
            turn: 1,
            solution,
            undealt: dealt.undealt,
            rng,
            current_suggestion: None,
            pending_reveal: None,
            notification: None,
            outcome: None,
            config,
        };

        session.record(format!("Game started with {count} players."));
        session.record(format!(
            "Each player has been dealt {} cards.",
            session.config.cards_per_player
        ));
        session.record(format!(
            "It's {}'s turn. Roll the dice.",
            session.current_player().name
        ));

        Ok(session)
    }
}

/// A single game in progress.
pub struct GameSession {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    current: PlayerId,
    dice: Option<DiceRoll>,
    moves_left: u32,
    has_rolled: bool,
    turn: u32,
    log: GameLog,
    solution: Solution,
    undealt: Vec<Card>,
    rng: GameRng,
    current_suggestion: Option<Suggestion>,
    pending_reveal: Option<CardReveal>,
    notification: Option<String>,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Last roll of the game, kept across turns for display.
    #[must_use]
    pub fn dice(&self) -> Option<DiceRoll> {
        self.dice
    }

    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.has_rolled
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.outcome.is_some() {
            TurnPhase::GameOver
        } else if !self.has_rolled {
            TurnPhase::AwaitingRoll
        } else if self.moves_left > 0 {
            TurnPhase::Moving
        } else {
            TurnPhase::OutOfMoves
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The solution, once the game is over.
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Solution> {
        self.outcome.map(|_| &self.solution)
    }

    /// Number of cards left out of the deal.
    #[must_use]
    pub fn undealt_count(&self) -> usize {
        self.undealt.len()
    }

    /// The most recent suggestion of the game.
    #[must_use]
    pub fn current_suggestion(&self) -> Option<&Suggestion> {
        self.current_suggestion.as_ref()
    }

    /// A card shown privately and not yet acknowledged.
    #[must_use]
    pub fn pending_reveal(&self) -> Option<&CardReveal> {
        self.pending_reveal.as_ref()
    }

    /// A notice for the current player, such as an undisputed suggestion.
    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// The room the current player is in, if any.
    #[must_use]
    pub fn current_room(&self) -> Option<RoomId> {
        self.board.resolve_room(self.current_player().position)
    }

    /// Legal destinations for the current player right now.
    #[must_use]
    pub fn valid_moves(&self) -> Moves {
        if self.ensure_can_act().is_err() || self.moves_left == 0 {
            return Moves::new();
        }
        self.board.valid_moves(self.current_player().position)
    }

    /// Public view for the presentation layer. Hands are reduced to sizes.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self
                .players
                .values()
                .map(|p| PlayerView {
                    id: p.id,
                    name: p.name.clone(),
                    color: p.color,
                    position: p.position,
                    active: p.active,
                    hand_size: p.hand().len(),
                })
                .collect(),
            current: self.current,
            dice: self.dice,
            moves_left: self.moves_left,
            has_rolled: self.has_rolled,
            phase: self.phase(),
            turn: self.turn,
            log_len: self.log.len(),
            disprover: self.pending_reveal.as_ref().map(|r| r.disprover),
            outcome: self.outcome,
        }
    }

    // === Commands ===

    /// Roll two dice and set the move budget to their sum.
    pub fn roll_dice(&mut self) -> Result<DiceRoll, TurnError> {
        self.ensure_can_act()?;
        if self.has_rolled || self.moves_left > 0 {
            return Err(TurnError::AlreadyRolled);
        }

        let roll = DiceRoll(self.rng.roll_die(), self.rng.roll_die());
        self.dice = Some(roll);
        self.moves_left = roll.total();
        self.has_rolled = true;

        let name = &self.players[self.current].name;
        debug!(player = %name, total = roll.total(), "dice rolled");
        let text = format!("{name} rolled {} ({}, {}).", roll.total(), roll.0, roll.1);
        self.record(text);

        Ok(roll)
    }

    /// Spend one unit of budget moving to `target`.
    ///
    /// Stepping onto a door from outside its room carries the player on to
    /// the room center within the same move.
    pub fn move_player(&mut self, target: Pos) -> Result<MoveOutcome, TurnError> {
        self.ensure_can_act()?;
        if !self.has_rolled {
            return Err(TurnError::MustRollFirst);
        }
        if self.moves_left == 0 {
            return Err(TurnError::NoMovesLeft);
        }

        let from = self.current_player().position;
        if !self.board.valid_moves(from).contains(&target) {
            return Err(TurnError::InvalidMove { target });
        }

        self.moves_left -= 1;
        let moves_left = self.moves_left;
        let name = self.current_player().name.clone();
        debug!(player = %name, %from, to = %target, moves_left, "player moved");

        if let Some(room) = self.board.door_at(target) {
            let (room_name, center) = self.room_name_and_center(room);

            if self.board.center_of(from) == Some(room) {
                self.set_position(target);
                self.record(format!("{name} exited the {room_name} through a door."));
                return Ok(MoveOutcome::ExitedRoom {
                    room,
                    name: room_name,
                    door: target,
                    moves_left,
                });
            }

            self.set_position(target);
            self.record(format!("{name} is at a door to {room_name}."));
            self.set_position(center);
            self.record(format!("{name} moved to the center of {room_name}."));
            return Ok(MoveOutcome::EnteredRoom {
                room,
                name: room_name,
                door: target,
                moves_left,
            });
        }

        self.set_position(target);

        if let Some(room) = self.board.center_of(target) {
            let (room_name, _) = self.room_name_and_center(room);
            self.record(format!("{name} is in the center of {room_name}."));
            return Ok(MoveOutcome::AtCenter {
                room,
                name: room_name,
                moves_left,
            });
        }

        Ok(MoveOutcome::Stepped {
            to: target,
            moves_left,
        })
    }

    /// Finish the turn and pass play to the next active player.
    ///
    /// Returns the new current player, which is the same seat when it is the
    /// only one still active. Eliminated players may still end their own turn.
    pub fn end_turn(&mut self) -> Result<PlayerId, TurnError> {
        self.ensure_ready()?;

        self.moves_left = 0;
        self.has_rolled = false;

        let next = self
            .current
            .following(self.players.player_count())
            .find(|&id| self.players[id].active);

        let Some(next) = next else {
            self.record("Game over! All players have been eliminated.");
            self.finish(None);
            return Ok(self.current);
        };

        self.current = next;
        self.turn += 1;
        let text = format!("It's {}'s turn. Roll the dice.", self.players[next].name);
        self.record(text);
        debug!(player = %next, turn = self.turn, "turn started");

        Ok(next)
    }

    /// Suggest `character` with `weapon` in the room the current player
    /// stands in, and ask the table to disprove it.
    pub fn make_suggestion(
        &mut self,
        character: &str,
        weapon: &str,
    ) -> Result<SuggestionOutcome, TurnError> {
        self.ensure_can_act()?;
        let room = self.current_room().ok_or(TurnError::NotInRoom)?;
        self.ensure_known(character, weapon)?;

        let (room_name, _) = self.room_name_and_center(room);
        let suggestion = Suggestion {
            suggester: self.current,
            character: character.to_string(),
            weapon: weapon.to_string(),
            room: room_name,
        };

        let name = self.current_player().name.clone();
        self.record(format!("{name} suggests: {suggestion}."));

        let disproof = resolve_disproof(&suggestion, &self.players, &mut self.rng);
        match &disproof {
            Disproof::Shown { disprover, card } => {
                let by = self.players[*disprover].name.clone();
                self.record(format!("{by} can disprove the suggestion."));
                self.record(format!("{by} shows {name} a {} card.", card.kind));
                self.pending_reveal =
                    Some(CardReveal::new(self.current, *disprover, card.clone()));
            }
            Disproof::Undisputed => {
                self.record("No one could disprove the suggestion.");
                self.notification = Some(UNDISPUTED_NOTICE.to_string());
            }
        }
        debug!(player = %self.current, disprover = ?disproof.disprover(), "suggestion resolved");

        self.current_suggestion = Some(suggestion.clone());
        Ok(SuggestionOutcome {
            suggestion,
            disproof,
        })
    }

    /// Accuse `character` with `weapon` in `room`.
    ///
    /// A correct accusation wins the game. A wrong one eliminates the
    /// accuser for good; the game ends once nobody active remains.
    pub fn make_accusation(
        &mut self,
        character: &str,
        weapon: &str,
        room: RoomId,
    ) -> Result<AccusationOutcome, TurnError> {
        self.ensure_can_act()?;
        if self.current_room().is_none() {
            return Err(TurnError::NotInRoom);
        }
        self.ensure_known(character, weapon)?;
        let room_name = self
            .board
            .room(room)
            .map(|r| r.name.clone())
            .ok_or(TurnError::UnknownRoom(room))?;

        let name = self.current_player().name.clone();
        self.record(format!(
            "{name} accuses: {character} in the {room_name} with the {weapon}."
        ));

        if self.solution.matches(character, weapon, &room_name) {
            self.record(format!("{name} wins! The accusation was correct."));
            self.finish(Some(self.current));
            return Ok(AccusationOutcome::Correct);
        }

        self.record(format!(
            "{name} made an incorrect accusation and is eliminated."
        ));
        self.players[self.current].eliminate();
        debug!(player = %self.current, "player eliminated");

        let game_over = !self.players.values().any(|p| p.active);
        if game_over {
            self.record("Game over! All players have been eliminated.");
            self.finish(None);
        }

        Ok(AccusationOutcome::Incorrect { game_over })
    }

    /// Dismiss the privately shown card.
    pub fn acknowledge_card(&mut self) -> Result<(), TurnError> {
        let reveal = self
            .pending_reveal
            .take()
            .ok_or(TurnError::NothingToAcknowledge)?;

        let viewer = self.players[reveal.suggester].name.clone();
        let shower = self.players[reveal.disprover].name.clone();
        self.record(format!("{viewer} acknowledges the card shown by {shower}."));
        Ok(())
    }

    /// Dismiss the current notification.
    pub fn acknowledge_notification(&mut self) -> Result<(), TurnError> {
        self.notification
            .take()
            .map(|_| ())
            .ok_or(TurnError::NothingToAcknowledge)
    }

    // === Internals ===

    fn record(&mut self, text: impl Into<String>) {
        self.log.push(self.turn, text);
    }

    fn finish(&mut self, winner: Option<PlayerId>) {
        self.moves_left = 0;
        self.outcome = Some(GameOutcome { winner });
        info!(winner = ?winner, "game over");
    }

    fn set_position(&mut self, pos: Pos) {
        self.players[self.current].position = pos;
    }

    fn room_name_and_center(&self, room: RoomId) -> (String, Pos) {
        self.board
            .room(room)
            .map(|r| (r.name.clone(), r.center))
            .unwrap_or_else(|| (room.to_string(), self.current_player().position))
    }

    fn ensure_ready(&self) -> Result<(), TurnError> {
        if self.outcome.is_some() {
            return Err(TurnError::GameOver);
        }
        if self.pending_reveal.is_some() || self.notification.is_some() {
            return Err(TurnError::AwaitingAcknowledgement);
        }
        Ok(())
    }

    fn ensure_can_act(&self) -> Result<(), TurnError> {
        self.ensure_ready()?;
        if !self.current_player().active {
            return Err(TurnError::PlayerEliminated {
                player: self.current,
            });
        }
        Ok(())
    }

    fn ensure_known(&self, character: &str, weapon: &str) -> Result<(), TurnError> {
        if self.config.character(character).is_none() {
            return Err(TurnError::UnknownCharacter(character.to_string()));
        }
        if !self.config.has_weapon(weapon) {
            return Err(TurnError::UnknownWeapon(weapon.to_string()));
        }
        Ok(())
    }
}

/// A player as everyone at the table sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color: Rgb,
    pub position: Pos,
    pub active: bool,
    pub hand_size: usize,
}

/// Public state of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<PlayerView>,
    pub current: PlayerId,
    pub dice: Option<DiceRoll>,
    pub moves_left: u32,
    pub has_rolled: bool,
    pub phase: TurnPhase,
    pub turn: u32,
    pub log_len: usize,
    /// Who is showing a card right now; never which card.
    pub disprover: Option<PlayerId>,
    pub outcome: Option<GameOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    fn session(seed: u64) -> GameSession {
        SessionBuilder::new(GameConfig::classic())
            .characters(&[0, 1, 2])
            .seed(seed)
            .build()
            .unwrap()
    }

    fn room_id(s: &GameSession, name: &str) -> RoomId {
        s.board().room_by_name(name).unwrap().id
    }

    fn place_in_room(s: &mut GameSession, seat: u8, name: &str) {
        let center = s.board().room_by_name(name).unwrap().center;
        s.players[PlayerId::new(seat)].position = center;
    }

    fn give_budget(s: &mut GameSession, moves: u32) {
        s.has_rolled = true;
        s.moves_left = moves;
    }

    /// A weapon other than the solution's.
    fn wrong_weapon(s: &GameSession) -> String {
        s.config
            .weapons
            .iter()
            .find(|w| **w != s.solution.weapon().name)
            .unwrap()
            .clone()
    }

    fn accuse_solution(s: &mut GameSession) -> Result<AccusationOutcome, TurnError> {
        let murderer = s.solution.murderer().name.clone();
        let weapon = s.solution.weapon().name.clone();
        let room = room_id(s, &s.solution.room().name.clone());
        s.make_accusation(&murderer, &weapon, room)
    }

    #[test]
    fn test_initial_state() {
        let s = session(42);

        assert_eq!(s.current_player_id(), PlayerId::new(0));
        assert_eq!(s.current_player().name, "Colonel Mustard");
        assert_eq!(s.current_player().position, Pos::new(10, 9));
        assert_eq!(s.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(s.moves_left(), 0);
        assert_eq!(s.turn_number(), 1);
        assert!(s.revealed_solution().is_none());

        let texts: Vec<_> = s.log().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Game started with 3 players.",
                "Each player has been dealt 3 cards.",
                "It's Colonel Mustard's turn. Roll the dice.",
            ]
        );
    }

    #[test]
    fn test_deal_matches_three_player_scenario() {
        let s = session(42);

        // 20 cards, 3 in the envelope, 3 players x 3 cards, 8 left over.
        for player in s.players().values() {
            assert_eq!(player.hand().len(), 3);
            for card in player.hand() {
                assert!(!s.solution.contains(card));
            }
        }
        assert_eq!(s.undealt_count(), 8);

        let mut all: Vec<&Card> = s.players().values().flat_map(|p| p.hand().iter()).collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = session(1234);
        let b = session(1234);

        assert_eq!(a.solution, b.solution);
        for (id, player) in a.players().iter() {
            assert_eq!(player.hand(), b.players()[id].hand());
        }
    }

    #[test]
    fn test_roll_dice_once_per_turn() {
        let mut s = session(42);

        let roll = s.roll_dice().unwrap();
        assert!((2..=12).contains(&roll.total()));
        assert_eq!(s.moves_left(), roll.total());
        assert!(s.has_rolled());
        assert_eq!(s.phase(), TurnPhase::Moving);
        assert_eq!(
            s.log().last().map(|e| e.text.clone()),
            Some(format!(
                "Colonel Mustard rolled {} ({}, {}).",
                roll.total(),
                roll.0,
                roll.1
            ))
        );

        let log_len = s.log().len();
        assert_eq!(s.roll_dice(), Err(TurnError::AlreadyRolled));
        assert_eq!(s.moves_left(), roll.total());
        assert_eq!(s.log().len(), log_len);
    }

    #[test]
    fn test_roll_again_after_spending_budget_fails() {
        let mut s = session(42);
        s.roll_dice().unwrap();
        s.moves_left = 0;

        assert_eq!(s.phase(), TurnPhase::OutOfMoves);
        assert_eq!(s.roll_dice(), Err(TurnError::AlreadyRolled));
    }

    #[test]
    fn test_move_requires_roll_and_budget() {
        let mut s = session(42);
        let target = Pos::new(10, 8);

        assert_eq!(s.move_player(target), Err(TurnError::MustRollFirst));
        assert!(s.valid_moves().is_empty());

        give_budget(&mut s, 0);
        assert_eq!(s.move_player(target), Err(TurnError::NoMovesLeft));
    }

    #[test]
    fn test_hallway_step() {
        let mut s = session(42);
        give_budget(&mut s, 3);

        assert_eq!(
            s.move_player(Pos::new(11, 9)),
            Ok(MoveOutcome::Stepped { to: Pos::new(11, 9), moves_left: 2 })
        );
        assert_eq!(s.current_player().position, Pos::new(11, 9));

        assert_eq!(
            s.move_player(Pos::new(13, 9)),
            Err(TurnError::InvalidMove { target: Pos::new(13, 9) })
        );
        assert_eq!(s.moves_left(), 2);
        assert_eq!(s.current_player().position, Pos::new(11, 9));
    }

    #[test]
    fn test_entering_a_door_moves_to_center() {
        let mut s = session(42);
        s.players[PlayerId::new(0)].position = Pos::new(7, 3);
        give_budget(&mut s, 4);

        let outcome = s.move_player(Pos::new(6, 3)).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::EnteredRoom {
                room: room_id(&s, "Study"),
                name: "Study".to_string(),
                door: Pos::new(6, 3),
                moves_left: 3,
            }
        );
        assert_eq!(s.current_player().position, Pos::new(4, 4));
        assert_eq!(s.current_room(), Some(room_id(&s, "Study")));

        let tail: Vec<_> = s.log().iter().rev().take(2).map(|e| e.text.as_str()).collect();
        assert_eq!(
            tail,
            vec![
                "Colonel Mustard moved to the center of Study.",
                "Colonel Mustard is at a door to Study.",
            ]
        );
    }

    #[test]
    fn test_exiting_through_a_door() {
        let mut s = session(42);
        place_in_room(&mut s, 0, "Study");
        give_budget(&mut s, 2);

        let moves = s.valid_moves();
        assert_eq!(moves.as_slice(), &[Pos::new(3, 6), Pos::new(6, 3)]);

        let outcome = s.move_player(Pos::new(3, 6)).unwrap();
        assert!(matches!(outcome, MoveOutcome::ExitedRoom { moves_left: 1, .. }));
        assert_eq!(s.current_player().position, Pos::new(3, 6));
        assert_eq!(
            s.log().last().map(|e| e.text.as_str()),
            Some("Colonel Mustard exited the Study through a door.")
        );

        // From the door: back to the center or down into the hallway.
        assert_eq!(s.valid_moves().as_slice(), &[Pos::new(4, 4), Pos::new(3, 7)]);
        let outcome = s.move_player(Pos::new(4, 4)).unwrap();
        assert!(matches!(outcome, MoveOutcome::AtCenter { moves_left: 0, .. }));
    }

    #[test]
    fn test_suggestion_requires_room() {
        let mut s = session(42);
        assert_eq!(
            s.make_suggestion("Mr. Green", "Rope").unwrap_err(),
            TurnError::NotInRoom
        );
    }

    #[test]
    fn test_suggestion_validates_names() {
        let mut s = session(42);
        place_in_room(&mut s, 0, "Kitchen");

        assert_eq!(
            s.make_suggestion("Dr. Orchid", "Rope").unwrap_err(),
            TurnError::UnknownCharacter("Dr. Orchid".to_string())
        );
        assert_eq!(
            s.make_suggestion("Mr. Green", "Poison").unwrap_err(),
            TurnError::UnknownWeapon("Poison".to_string())
        );
    }

    #[test]
    fn test_suggestion_at_door_uses_doors_room() {
        let mut s = session(42);
        s.players[PlayerId::new(0)].position = Pos::new(17, 6);

        let outcome = s.make_suggestion("Mr. Green", "Rope").unwrap();
        assert_eq!(outcome.suggestion.room, "Kitchen");
    }

    #[test]
    fn test_undisputed_suggestion() {
        let mut s = session(42);
        let room = s.solution.room().name.clone();
        let murderer = s.solution.murderer().name.clone();
        let weapon = s.solution.weapon().name.clone();
        place_in_room(&mut s, 0, &room);

        let outcome = s.make_suggestion(&murderer, &weapon).unwrap();

        assert_eq!(outcome.disproof, Disproof::Undisputed);
        assert_eq!(s.notification(), Some(UNDISPUTED_NOTICE));
        assert_eq!(
            s.log().last().map(|e| e.text.as_str()),
            Some("No one could disprove the suggestion.")
        );

        // The notice blocks play until dismissed.
        assert_eq!(s.roll_dice(), Err(TurnError::AwaitingAcknowledgement));
        s.acknowledge_notification().unwrap();
        assert_eq!(s.acknowledge_notification(), Err(TurnError::NothingToAcknowledge));
        assert!(s.roll_dice().is_ok());
    }

    #[test]
    fn test_disproved_suggestion_is_private() {
        let mut s = session(42);
        // Suggest a card held by seat 1 so someone must disprove.
        let held = s.players[PlayerId::new(1)]
            .hand()
            .iter()
            .find(|c| c.kind == CardKind::Weapon)
            .cloned();
        let weapon = held
            .map(|c| c.name)
            .unwrap_or_else(|| s.config.weapons[0].clone());
        let character = s.config.characters[0].name.clone();
        place_in_room(&mut s, 0, "Bedroom");

        let outcome = s.make_suggestion(&character, &weapon).unwrap();

        let Disproof::Shown { disprover, card } = outcome.disproof.clone() else {
            // Nobody held any of the three; nothing private to check.
            assert!(s.notification().is_some());
            return;
        };
        assert!(s.players[disprover].hand().contains(&card));
        assert!(outcome.suggestion.cards().contains(&card));

        let reveal = s.pending_reveal().unwrap();
        assert_eq!(reveal.card_for(PlayerId::new(0)), Some(&card));
        assert_eq!(reveal.card_for(disprover), Some(&card));
        let bystander = PlayerId::all(3).find(|&p| p != disprover && p != PlayerId::new(0)).unwrap();
        assert_eq!(reveal.card_for(bystander), None);
        assert_eq!(s.snapshot().disprover, Some(disprover));

        // The public log names the kind only.
        let shows = s.log().last().unwrap().text.clone();
        assert_eq!(
            shows,
            format!("{} shows Colonel Mustard a {} card.", s.players[disprover].name, card.kind)
        );

        assert_eq!(s.end_turn(), Err(TurnError::AwaitingAcknowledgement));
        s.acknowledge_card().unwrap();
        assert!(s.pending_reveal().is_none());
        assert_eq!(
            s.log().last().map(|e| e.text.clone()),
            Some(format!(
                "Colonel Mustard acknowledges the card shown by {}.",
                s.players[disprover].name
            ))
        );
        assert!(s.end_turn().is_ok());
    }

    #[test]
    fn test_suggestion_does_not_spend_budget_or_end_turn() {
        let mut s = session(42);
        place_in_room(&mut s, 0, "Garage");
        give_budget(&mut s, 5);

        let outcome = s.make_suggestion("Mr. Green", "Rope").unwrap();
        if outcome.disproof.is_undisputed() {
            s.acknowledge_notification().unwrap();
        } else {
            s.acknowledge_card().unwrap();
        }

        assert_eq!(s.moves_left(), 5);
        assert_eq!(s.current_player_id(), PlayerId::new(0));
        assert_eq!(s.current_suggestion().map(|x| x.room.as_str()), Some("Garage"));
    }

    #[test]
    fn test_correct_accusation_wins() {
        let mut s = session(42);
        place_in_room(&mut s, 0, "Study");

        assert_eq!(accuse_solution(&mut s), Ok(AccusationOutcome::Correct));
        assert_eq!(s.phase(), TurnPhase::GameOver);
        assert_eq!(s.outcome(), Some(GameOutcome { winner: Some(PlayerId::new(0)) }));
        assert_eq!(s.revealed_solution(), Some(&s.solution));
        assert_eq!(
            s.log().last().map(|e| e.text.as_str()),
            Some("Colonel Mustard wins! The accusation was correct.")
        );

        assert_eq!(s.roll_dice(), Err(TurnError::GameOver));
        assert_eq!(s.end_turn(), Err(TurnError::GameOver));
    }

    #[test]
    fn test_accusation_requires_room() {
        let mut s = session(42);
        assert_eq!(accuse_solution(&mut s), Err(TurnError::NotInRoom));
        assert!(s.current_player().active);
    }

    #[test]
    fn test_accusation_unknown_room() {
        let mut s = session(42);
        place_in_room(&mut s, 0, "Study");

        assert_eq!(
            s.make_accusation("Mr. Green", "Rope", RoomId::new(40)),
            Err(TurnError::UnknownRoom(RoomId::new(40)))
        );
        assert!(s.current_player().active);
    }

    #[test]
    fn test_wrong_accusation_eliminates() {
        let mut s = session(42);
        place_in_room(&mut s, 0, "Study");
        let murderer = s.solution.murderer().name.clone();
        let weapon = wrong_weapon(&s);
        let room = room_id(&s, &s.solution.room().name.clone());

        let outcome = s.make_accusation(&murderer, &weapon, room).unwrap();

        assert_eq!(outcome, AccusationOutcome::Incorrect { game_over: false });
        assert!(!s.players[PlayerId::new(0)].active);
        assert!(s.revealed_solution().is_none());
        assert_eq!(s.phase(), TurnPhase::AwaitingRoll);

        // Eliminated: only ending the turn is allowed.
        let eliminated = TurnError::PlayerEliminated { player: PlayerId::new(0) };
        assert_eq!(s.roll_dice(), Err(eliminated.clone()));
        assert_eq!(s.make_suggestion("Mr. Green", "Rope").unwrap_err(), eliminated);
        assert_eq!(s.end_turn(), Ok(PlayerId::new(1)));

        // Seat 0 is skipped from now on.
        assert_eq!(s.end_turn(), Ok(PlayerId::new(2)));
        assert_eq!(s.end_turn(), Ok(PlayerId::new(1)));
        assert!(!s.players[PlayerId::new(0)].active);
    }

    #[test]
    fn test_everyone_eliminated_ends_game_without_winner() {
        let mut s = session(42);
        let murderer = s.solution.murderer().name.clone();
        let weapon = wrong_weapon(&s);

        for seat in 0..3u8 {
            assert_eq!(s.current_player_id(), PlayerId::new(seat));
            place_in_room(&mut s, seat, "Study");
            let room = room_id(&s, "Study");
            let outcome = s.make_accusation(&murderer, &weapon, room).unwrap();
            if seat < 2 {
                assert_eq!(outcome, AccusationOutcome::Incorrect { game_over: false });
                s.end_turn().unwrap();
            } else {
                assert_eq!(outcome, AccusationOutcome::Incorrect { game_over: true });
            }
        }

        assert_eq!(s.outcome(), Some(GameOutcome { winner: None }));
        assert!(s.revealed_solution().is_some());
        assert_eq!(
            s.log().last().map(|e| e.text.as_str()),
            Some("Game over! All players have been eliminated.")
        );
    }

    #[test]
    fn test_sole_survivor_keeps_taking_turns() {
        let mut s = session(42);
        let murderer = s.solution.murderer().name.clone();
        let weapon = wrong_weapon(&s);

        for seat in 0..2u8 {
            place_in_room(&mut s, seat, "Study");
            let room = room_id(&s, "Study");
            s.make_accusation(&murderer, &weapon, room).unwrap();
            s.end_turn().unwrap();
        }

        assert_eq!(s.current_player_id(), PlayerId::new(2));
        assert_eq!(s.end_turn(), Ok(PlayerId::new(2)));
        assert!(!s.is_over());

        place_in_room(&mut s, 2, "Study");
        assert_eq!(accuse_solution(&mut s), Ok(AccusationOutcome::Correct));
        assert_eq!(s.outcome().and_then(|o| o.winner), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_end_turn_resets_budget() {
        let mut s = session(42);
        s.roll_dice().unwrap();

        assert_eq!(s.end_turn(), Ok(PlayerId::new(1)));
        assert_eq!(s.moves_left(), 0);
        assert!(!s.has_rolled());
        assert_eq!(s.turn_number(), 2);
        assert_eq!(s.phase(), TurnPhase::AwaitingRoll);
        assert_eq!(
            s.log().last().map(|e| e.text.as_str()),
            Some("It's Miss Scarlet's turn. Roll the dice.")
        );

        s.end_turn().unwrap();
        assert_eq!(s.end_turn(), Ok(PlayerId::new(0)));
    }

    #[test]
    fn test_setup_errors() {
        let build = |chars: &[usize]| {
            SessionBuilder::new(GameConfig::classic())
                .characters(chars)
                .seed(1)
                .build()
                .err()
        };

        assert_eq!(
            build(&[0, 1]),
            Some(SetupError::PlayerCount { got: 2, min: 3, max: 6 })
        );
        assert_eq!(build(&[0, 1, 9]), Some(SetupError::UnknownCharacter(9)));
        assert_eq!(build(&[0, 1, 1]), Some(SetupError::DuplicateCharacter(1)));
        assert_eq!(build(&[0, 1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_snapshot_hides_hands() {
        let s = session(42);
        let snap = s.snapshot();

        assert_eq!(snap.players.len(), 3);
        assert!(snap.players.iter().all(|p| p.hand_size == 3 && p.active));
        assert_eq!(snap.phase, TurnPhase::AwaitingRoll);
        assert_eq!(snap.log_len, 3);

        let json = serde_json::to_string(&snap).unwrap();
        for card in s.solution.cards() {
            assert!(!json.contains(&format!("\"{}\"", card.name)) || card.kind == CardKind::Character);
        }
    }
}
