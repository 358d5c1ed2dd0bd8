use loveletter::{
    Bot, Card, Controller, Difficulty, GameEvent, GameSettings, GameStateView, GameStatus, Move,
    PlayerPublicState, TrackerBot, TurnPhase,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seat(id: usize, discard: Vec<Card>) -> PlayerPublicState {
    PlayerPublicState {
        id,
        name: format!("P{id}"),
        controller: Controller::Bot(Difficulty::Hard),
        hand_size: 1,
        discard,
        protected: false,
        out: false,
        is_current: id == 0,
    }
}

fn base_state(hand: Vec<Card>) -> GameStateView {
    let mut self_seat = seat(0, Vec::new());
    self_seat.hand_size = hand.len();
    GameStateView {
        settings: GameSettings::new(2).unwrap(),
        phase: TurnPhase::Play,
        status: GameStatus::Ongoing,
        self_player: 0,
        current_player: 0,
        deck_count: 5,
        burned_remaining: true,
        face_up_removed: Vec::new(),
        players: vec![self_seat, seat(1, Vec::new())],
        hand,
    }
}

fn guard_moves(card_index: usize, target: usize) -> Vec<Move> {
    (2..=8).map(|v| Move::guessing(card_index, target, v)).collect()
}

#[test]
fn priest_reveal_turns_into_an_exact_guard_guess() {
    let mut bot = TrackerBot::new(0, StdRng::seed_from_u64(1));
    bot.observe(
        &base_state(vec![Card::Priest]),
        &[GameEvent::PriestReveal {
            player: 0,
            target: 1,
            card: Card::Baron,
        }],
    );

    let state = base_state(vec![Card::Guard, Card::Handmaid]);
    let mut legal = guard_moves(0, 1);
    legal.push(Move::untargeted(1));
    let mov = bot.select_move(&state, &legal);
    assert_eq!(mov, Move::guessing(0, 1, 3));
}

#[test]
fn reveals_meant_for_other_seats_are_ignored() {
    let mut bot = TrackerBot::new(0, StdRng::seed_from_u64(1));
    bot.observe(
        &base_state(vec![Card::Guard]),
        &[GameEvent::PriestReveal {
            player: 2,
            target: 1,
            card: Card::Princess,
        }],
    );

    // Without knowledge of its own, the bot cannot produce an informed
    // guess; it still returns a legal move.
    let state = base_state(vec![Card::Guard, Card::Handmaid]);
    let legal = guard_moves(0, 1);
    let mov = bot.select_move(&state, &legal);
    assert!(legal.contains(&mov));
}

#[test]
fn being_swapped_against_reveals_the_attackers_new_hand() {
    let mut bot = TrackerBot::new(0, StdRng::seed_from_u64(1));
    // The bot held a Prince before an opponent's King swap took it.
    bot.observe(&base_state(vec![Card::Prince]), &[]);
    bot.observe(
        &base_state(vec![Card::Guard]),
        &[GameEvent::HandsSwapped {
            player: 1,
            target: 0,
        }],
    );

    let state = base_state(vec![Card::Guard, Card::Baron]);
    let legal = guard_moves(0, 1);
    let mov = bot.select_move(&state, &legal);
    assert_eq!(mov, Move::guessing(0, 1, 5));
}

#[test]
fn known_weaker_hand_invites_a_baron_comparison() {
    let mut bot = TrackerBot::new(0, StdRng::seed_from_u64(1));
    bot.observe(
        &base_state(vec![Card::Baron]),
        &[GameEvent::PriestReveal {
            player: 0,
            target: 1,
            card: Card::Priest,
        }],
    );

    let state = base_state(vec![Card::Baron, Card::Prince]);
    let legal = vec![Move::targeted(0, 1), Move::targeted(1, 1)];
    let mov = bot.select_move(&state, &legal);
    assert_eq!(mov, Move::targeted(0, 1));
}

#[test]
fn elimination_clears_stale_knowledge() {
    let mut bot = TrackerBot::new(0, StdRng::seed_from_u64(1));
    bot.observe(
        &base_state(vec![Card::Guard]),
        &[
            GameEvent::PriestReveal {
                player: 0,
                target: 1,
                card: Card::Countess,
            },
            GameEvent::Eliminated {
                player: 1,
                reason: loveletter::EliminationReason::BaronLoss,
                revealed: Some(Card::Countess),
            },
        ],
    );

    // The only memory entry died with the seat; the bot falls back to a
    // plausibility guess and stays legal.
    let state = base_state(vec![Card::Guard, Card::Handmaid]);
    let legal = guard_moves(0, 1);
    let mov = bot.select_move(&state, &legal);
    assert!(legal.contains(&mov));
}

#[test]
fn fallback_guesses_come_from_unseen_values() {
    // Every copy of values 2-7 is accounted for in discards and face-up
    // removals, so the only plausible guess left is the Princess.
    let mut state = base_state(vec![Card::Guard, Card::Guard]);
    state.players[0].discard = vec![Card::Priest, Card::Baron, Card::Handmaid, Card::Prince];
    state.players[1].discard = vec![Card::Prince, Card::King, Card::Countess];
    state.face_up_removed = vec![Card::Priest, Card::Baron, Card::Handmaid];

    let mut legal = guard_moves(0, 1);
    legal.extend(guard_moves(1, 1));
    for seed in 0..10 {
        let mut bot = TrackerBot::new(0, StdRng::seed_from_u64(seed));
        let mov = bot.select_move(&state, &legal);
        assert_eq!(mov.guess, Some(8), "seed {seed}");
        assert_eq!(mov.target, Some(1));
    }
}
