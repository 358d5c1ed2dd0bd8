use loveletter::{
    Bot, Card, CautiousBot, Controller, Difficulty, GameSettings, GameStateView, GameStatus, Move,
    PlayerPublicState, TurnPhase,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn base_state(hand: Vec<Card>, opponent_discard: Vec<Card>) -> GameStateView {
    let settings = GameSettings::new(2).unwrap();
    let self_player = PlayerPublicState {
        id: 0,
        name: String::from("Bot"),
        controller: Controller::Bot(Difficulty::Medium),
        hand_size: hand.len(),
        discard: Vec::new(),
        protected: false,
        out: false,
        is_current: true,
    };
    let other_player = PlayerPublicState {
        id: 1,
        name: String::from("Rival"),
        controller: Controller::Bot(Difficulty::Easy),
        hand_size: 1,
        discard: opponent_discard,
        protected: false,
        out: false,
        is_current: false,
    };
    GameStateView {
        settings,
        phase: TurnPhase::Play,
        status: GameStatus::Ongoing,
        self_player: 0,
        current_player: 0,
        deck_count: 5,
        burned_remaining: true,
        face_up_removed: Vec::new(),
        players: vec![self_player, other_player],
        hand,
    }
}

fn guard_moves(card_index: usize, target: usize) -> Vec<Move> {
    (2..=8).map(|v| Move::guessing(card_index, target, v)).collect()
}

#[test]
fn cautious_prefers_banking_the_handmaid() {
    let state = base_state(vec![Card::Guard, Card::Handmaid], Vec::new());
    let mut legal = guard_moves(0, 1);
    legal.push(Move::untargeted(1));

    for seed in 0..10 {
        let mut bot = CautiousBot::new(StdRng::seed_from_u64(seed));
        assert_eq!(bot.select_move(&state, &legal), Move::untargeted(1));
    }
}

#[test]
fn cautious_never_plays_the_princess_while_an_alternative_exists() {
    let state = base_state(vec![Card::Princess, Card::Guard], Vec::new());
    let mut legal = vec![Move::untargeted(0)];
    legal.extend(guard_moves(1, 1));

    for seed in 0..10 {
        let mut bot = CautiousBot::new(StdRng::seed_from_u64(seed));
        assert_eq!(bot.select_move(&state, &legal).card_index, 1);
    }
}

#[test]
fn cautious_plays_the_princess_when_it_is_the_only_option() {
    let state = base_state(vec![Card::Guard, Card::Princess], Vec::new());
    let legal = vec![Move::untargeted(1)];

    let mut bot = CautiousBot::new(StdRng::seed_from_u64(3));
    assert_eq!(bot.select_move(&state, &legal), Move::untargeted(1));
}

#[test]
fn cautious_picks_only_legal_targets_and_guesses() {
    let state = base_state(vec![Card::Guard, Card::Priest], Vec::new());
    let mut legal = guard_moves(0, 1);
    legal.push(Move::targeted(1, 1));

    for seed in 0..20 {
        let mut bot = CautiousBot::new(StdRng::seed_from_u64(seed));
        let mov = bot.select_move(&state, &legal);
        assert!(legal.contains(&mov));
        if let Some(guess) = mov.guess {
            assert!((2..=8).contains(&guess));
        }
    }
}
