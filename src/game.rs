use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::action::{Move, PlayerId};
use crate::card::{Card, MAX_GUESS, MIN_GUESS, TWO_PLAYER_FACE_UP, full_deck};
use crate::error::{GameError, IllegalMove};
use crate::event::{EliminationReason, GameEvent};
use crate::player::{PlayerConfig, PlayerState};
use crate::score::{self, ShowdownEntry};
use crate::state::{
    GameSettings, GameSnapshot, GameStateView, GameStatus, PlayerPublicState, PlayerSnapshot,
    TurnPhase,
};

const DEFAULT_SEED: u64 = 0x10_7E_1E_77_E4_5E_ED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub players: Vec<PlayerConfig>,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(players: Vec<PlayerConfig>, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(players.len())?;
        Ok(Self { players, seed })
    }
}

/// Builder that enables deterministic deck injection for scripted tests.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(players: Vec<PlayerConfig>) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use the given deck for the first round instead of shuffling. The top
    /// of the deck is the end of the vector (draw = pop). Relaxed decks with
    /// nonstandard contents are accepted for testing.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Events appended by a single accepted move, in order.
#[derive(Clone, Debug)]
pub struct MoveOutcome {
    pub events: Vec<GameEvent>,
}

/// Core Love Letter engine: deck, seats, turn engine and effect resolver
/// behind one `apply_move` entry point.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    current_player: PlayerId,
    players: Vec<PlayerState>,
    /// Draw pile; top is the end of the vector.
    deck: Vec<Card>,
    /// Face-down card set aside at round start. Re-enters play only as a
    /// Prince-forced replacement draw once the deck is empty.
    burned: Option<Card>,
    /// Face-up removed cards (two-player rounds only).
    face_up_removed: Vec<Card>,
    turn_phase: TurnPhase,
    events: Vec<GameEvent>,
    /// Cards dealt into this round across every zone; the conservation
    /// invariant checks against it after each move.
    round_card_total: usize,
    rng: StdRng,
}

impl Game {
    pub fn builder(players: Vec<PlayerConfig>) -> Result<GameBuilder, GameError> {
        GameBuilder::new(players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.players.len())?;
        let players = config.players.into_iter().map(PlayerState::new).collect();

        let mut game = Game {
            settings,
            status: GameStatus::Ongoing,
            current_player: 0,
            players,
            deck: Vec::new(),
            burned: None,
            face_up_removed: Vec::new(),
            turn_phase: TurnPhase::Draw,
            events: Vec::new(),
            round_card_total: 0,
            rng: StdRng::seed_from_u64(config.seed),
        };

        match deck {
            Some(deck) => game.start_round_with(deck)?,
            None => game.start_round()?,
        }
        Ok(game)
    }

    // === Accessors ===

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn turn_phase(&self) -> TurnPhase {
        self.turn_phase
    }

    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Full event log since the game was created.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The single winner, when the round produced exactly one.
    pub fn winner(&self) -> Option<PlayerId> {
        match &self.status {
            GameStatus::Finished { winners } if winners.len() == 1 => Some(winners[0]),
            _ => None,
        }
    }

    /// Every winner, including exact showdown ties.
    pub fn winners(&self) -> Option<&[PlayerId]> {
        match &self.status {
            GameStatus::Finished { winners } => Some(winners),
            GameStatus::Ongoing => None,
        }
    }

    // === Round setup ===

    /// Deal a fresh round for the same seats: new shuffled deck, one burned
    /// card, the two-player face-up removals, one card per player, player 0
    /// to act. Usable as a rematch once a round has finished.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        let mut deck = full_deck();
        deck.shuffle(&mut self.rng);
        self.start_round_with(deck)
    }

    fn start_round_with(&mut self, deck: Vec<Card>) -> Result<(), GameError> {
        if deck.len() < self.players.len() + 1 {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to burn and deal",
            ));
        }
        self.round_card_total = deck.len();
        self.deck = deck;
        self.face_up_removed.clear();
        self.status = GameStatus::Ongoing;

        self.burned = self.deck.pop();

        if self.players.len() == 2 {
            for _ in 0..TWO_PLAYER_FACE_UP {
                if let Some(card) = self.deck.pop() {
                    self.face_up_removed.push(card);
                }
            }
        }

        for index in 0..self.players.len() {
            self.players[index].reset_for_round();
            let card = self.deck.pop().ok_or(GameError::InvalidConfiguration(
                "deck exhausted while dealing",
            ))?;
            self.players[index].hand.push(card);
        }

        self.current_player = 0;
        self.turn_phase = TurnPhase::Draw;
        self.begin_turn();
        Ok(())
    }

    // === Turn engine ===

    fn begin_turn(&mut self) {
        if self.status.is_finished() {
            self.turn_phase = TurnPhase::GameOver;
            return;
        }
        let current = self.current_player;
        if self.players[current].out {
            self.advance_turn();
            return;
        }

        // Protection lasts exactly until the start of this seat's own turn.
        self.players[current].protected = false;

        match self.deck.pop() {
            Some(card) => {
                self.players[current].hand.push(card);
                self.turn_phase = TurnPhase::Play;
                self.events.push(GameEvent::TurnStarted { player: current });
            }
            // Deck empty at draw time: no play happens, the round goes
            // straight to the showdown.
            None => self.end_round_by_showdown(),
        }
    }

    fn advance_turn(&mut self) {
        if self.status.is_finished() {
            self.turn_phase = TurnPhase::GameOver;
            return;
        }
        loop {
            self.current_player = (self.current_player + 1) % self.players.len();
            if !self.players[self.current_player].out {
                break;
            }
        }
        self.begin_turn();
    }

    fn check_win_condition(&mut self) {
        let active: Vec<PlayerId> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.out)
            .map(|(id, _)| id)
            .collect();
        match active.as_slice() {
            [sole_survivor] => self.finish(vec![*sole_survivor]),
            _ if self.deck.is_empty() => self.end_round_by_showdown(),
            _ => self.advance_turn(),
        }
    }

    fn end_round_by_showdown(&mut self) {
        self.events.push(GameEvent::DeckExhausted);
        let entries: Vec<ShowdownEntry> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.out)
            .map(|(id, p)| ShowdownEntry {
                player: id,
                hand: p.hand_card(),
                discard_sum: p.discard_sum(),
            })
            .collect();
        let ranking = score::rank(entries);
        let winners = score::winners(&ranking);
        self.events.push(GameEvent::Showdown { ranking });
        self.finish(winners);
    }

    fn finish(&mut self, winners: Vec<PlayerId>) {
        self.events.push(GameEvent::Winner {
            winners: winners.clone(),
        });
        self.status = GameStatus::Finished { winners };
        self.turn_phase = TurnPhase::GameOver;
    }

    // === Moves ===

    /// Every legal move for `player` right now. Empty once the game is over.
    pub fn legal_moves(&self, player: PlayerId) -> Result<Vec<Move>, GameError> {
        if self.status.is_finished() {
            return Ok(Vec::new());
        }
        if player >= self.players.len() {
            return Err(GameError::UnknownPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }

        let hand = &self.players[player].hand;
        let mut moves = Vec::new();
        for index in 0..hand.len() {
            if self.countess_violation(player, index) {
                continue;
            }
            let card = hand[index];
            if !card.needs_target() {
                moves.push(Move::untargeted(index));
                continue;
            }
            let targets: Vec<PlayerId> = self.valid_opponents(player).collect();
            match card {
                Card::Guard => {
                    if targets.is_empty() {
                        moves.push(Move::untargeted(index));
                    } else {
                        for target in targets {
                            for guess in MIN_GUESS..=MAX_GUESS {
                                moves.push(Move::guessing(index, target, guess));
                            }
                        }
                    }
                }
                Card::Prince => {
                    if targets.is_empty() {
                        moves.push(Move::targeted(index, player));
                    } else {
                        for target in targets {
                            moves.push(Move::targeted(index, target));
                        }
                    }
                }
                _ => {
                    if targets.is_empty() {
                        moves.push(Move::untargeted(index));
                    } else {
                        for target in targets {
                            moves.push(Move::targeted(index, target));
                        }
                    }
                }
            }
        }
        Ok(moves)
    }

    /// Validate and apply one move for `player`. Validation is complete
    /// before any mutation, so a rejected move leaves no observable trace.
    pub fn apply_move(&mut self, player: PlayerId, mov: Move) -> Result<MoveOutcome, GameError> {
        if self.status.is_finished() {
            return Err(GameError::GameOver);
        }
        if player >= self.players.len() {
            return Err(GameError::UnknownPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }
        self.validate_move(player, mov)?;

        let first_new_event = self.events.len();
        let card = self.players[player].move_card_to_discard(mov.card_index);
        match mov.target {
            Some(target) => {
                self.events.push(GameEvent::CardPlayed {
                    player,
                    card,
                    target: Some(target),
                });
                self.resolve_targeted(player, card, target, mov.guess);
            }
            None => {
                if card.needs_target() {
                    self.events.push(GameEvent::Fizzled { player, card });
                } else {
                    self.events.push(GameEvent::CardPlayed {
                        player,
                        card,
                        target: None,
                    });
                    self.resolve_untargeted(player, card);
                }
            }
        }

        self.check_win_condition();
        debug_assert_eq!(self.card_total(), self.round_card_total);
        Ok(MoveOutcome {
            events: self.events[first_new_event..].to_vec(),
        })
    }

    fn validate_move(&self, player: PlayerId, mov: Move) -> Result<(), IllegalMove> {
        let hand = &self.players[player].hand;
        if mov.card_index >= hand.len() {
            return Err(IllegalMove::HandIndex(mov.card_index));
        }
        if self.countess_violation(player, mov.card_index) {
            return Err(IllegalMove::MustPlayCountess);
        }
        let card = hand[mov.card_index];

        if !card.needs_target() {
            if mov.target.is_some() {
                return Err(IllegalMove::UnexpectedTarget);
            }
            return Ok(());
        }

        let has_opponent = self.valid_opponents(player).next().is_some();
        match mov.target {
            None => {
                // The Prince always has a target: self is legal exactly when
                // no unprotected opponent remains.
                if card == Card::Prince || has_opponent {
                    return Err(IllegalMove::TargetRequired);
                }
            }
            Some(target) => {
                if target >= self.players.len() {
                    return Err(IllegalMove::UnknownTarget(target));
                }
                if target == player {
                    if !card.may_target_self() || has_opponent {
                        return Err(IllegalMove::SelfTarget);
                    }
                } else {
                    let seat = &self.players[target];
                    if seat.out {
                        return Err(IllegalMove::TargetEliminated);
                    }
                    if seat.protected {
                        return Err(IllegalMove::TargetProtected);
                    }
                }
                if card == Card::Guard {
                    let guess = mov.guess.ok_or(IllegalMove::GuessRequired)?;
                    if !(MIN_GUESS..=MAX_GUESS).contains(&guess) {
                        return Err(IllegalMove::GuessOutOfRange(guess));
                    }
                }
            }
        }
        Ok(())
    }

    /// True when the chosen index dodges a mandatory Countess play.
    fn countess_violation(&self, player: PlayerId, card_index: usize) -> bool {
        let hand = &self.players[player].hand;
        hand.get(card_index).is_some_and(|card| {
            *card != Card::Countess
                && hand.contains(&Card::Countess)
                && hand.iter().any(Card::is_royalty)
        })
    }

    // === Effect resolver ===

    fn resolve_untargeted(&mut self, player: PlayerId, card: Card) {
        match card {
            Card::Handmaid => {
                self.players[player].protected = true;
                self.events.push(GameEvent::Protected { player });
            }
            Card::Princess => {
                self.eliminate(player, EliminationReason::PrincessDiscard);
            }
            // The Countess carries no effect beyond the mandatory-play rule.
            _ => {}
        }
    }

    fn resolve_targeted(&mut self, player: PlayerId, card: Card, target: PlayerId, guess: Option<u8>) {
        match card {
            Card::Guard => {
                let guess = guess.expect("validated Guard move carries a guess");
                let correct = self.players[target]
                    .hand_card()
                    .is_some_and(|held| held.value() == guess);
                self.events.push(GameEvent::GuardGuess {
                    player,
                    target,
                    guess,
                    correct,
                });
                if correct {
                    self.eliminate(target, EliminationReason::GuardGuess);
                }
            }
            Card::Priest => {
                if let Some(seen) = self.players[target].hand_card() {
                    self.events.push(GameEvent::PriestReveal {
                        player,
                        target,
                        card: seen,
                    });
                }
            }
            Card::Baron => {
                // The played Baron is already on the discard pile, so the
                // remaining card is the one compared.
                let mine = self.players[player].hand_card().map_or(0, |c| c.value());
                let theirs = self.players[target].hand_card().map_or(0, |c| c.value());
                let loser = match mine.cmp(&theirs) {
                    std::cmp::Ordering::Greater => Some(target),
                    std::cmp::Ordering::Less => Some(player),
                    std::cmp::Ordering::Equal => None,
                };
                self.events.push(GameEvent::BaronComparison {
                    player,
                    target,
                    loser,
                });
                if let Some(loser) = loser {
                    self.eliminate(loser, EliminationReason::BaronLoss);
                }
            }
            Card::Prince => {
                let Some(discarded) = self.players[target].hand.pop() else {
                    return;
                };
                self.players[target].discard.push(discarded);
                if discarded == Card::Princess {
                    self.events.push(GameEvent::ForcedDiscard {
                        target,
                        card: discarded,
                        replacement_from_burned: false,
                    });
                    self.eliminate(target, EliminationReason::ForcedPrincessDiscard);
                } else {
                    let from_burned = self.deck.is_empty() && self.burned.is_some();
                    let replacement = self.deck.pop().or_else(|| self.burned.take());
                    if let Some(card) = replacement {
                        self.players[target].hand.push(card);
                    }
                    self.events.push(GameEvent::ForcedDiscard {
                        target,
                        card: discarded,
                        replacement_from_burned: from_burned,
                    });
                }
            }
            Card::King => {
                let mine = std::mem::take(&mut self.players[player].hand);
                let theirs = std::mem::replace(&mut self.players[target].hand, mine);
                self.players[player].hand = theirs;
                self.events.push(GameEvent::HandsSwapped { player, target });
            }
            // Untargeted kinds never reach here; validation forbids a target.
            _ => unreachable!("card {card} does not take a target"),
        }
    }

    fn eliminate(&mut self, player: PlayerId, reason: EliminationReason) {
        let revealed = self.players[player].eliminate();
        self.events.push(GameEvent::Eliminated {
            player,
            reason,
            revealed,
        });
    }

    fn valid_opponents(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |(id, p)| *id != player && !p.out && !p.protected)
            .map(|(id, _)| id)
    }

    fn card_total(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        let in_discards: usize = self.players.iter().map(|p| p.discard.len()).sum();
        self.deck.len()
            + usize::from(self.burned.is_some())
            + self.face_up_removed.len()
            + in_hands
            + in_discards
    }

    // === Views ===

    /// Snapshot from one seat's perspective: own hand visible, opponents
    /// reduced to public information.
    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        if perspective >= self.players.len() {
            return Err(GameError::UnknownPlayer(perspective));
        }
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(id, p)| PlayerPublicState {
                id,
                name: p.name.clone(),
                controller: p.controller,
                hand_size: p.hand.len(),
                discard: p.discard.clone(),
                protected: p.protected,
                out: p.out,
                is_current: id == self.current_player,
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            phase: self.turn_phase,
            status: self.status.clone(),
            self_player: perspective,
            current_player: self.current_player,
            deck_count: self.deck.len(),
            burned_remaining: self.burned.is_some(),
            face_up_removed: self.face_up_removed.clone(),
            players,
            hand: self.players[perspective].hand.clone(),
        })
    }

    /// Full-information record for the authoritative host to broadcast.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            settings: self.settings,
            phase: self.turn_phase,
            status: self.status.clone(),
            current_player: self.current_player,
            deck_count: self.deck.len(),
            burned_remaining: self.burned.is_some(),
            face_up_removed: self.face_up_removed.clone(),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(id, p)| PlayerSnapshot {
                    id,
                    name: p.name.clone(),
                    controller: p.controller,
                    hand: p.hand.clone(),
                    discard: p.discard.clone(),
                    protected: p.protected,
                    out: p.out,
                })
                .collect(),
        }
    }
}
