//! Game integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    Card, DECK_SIZE, DealOutcome, Deck, DrawError, Game, GameOptions, Hand, PlayerOutcome,
    RoundError, RoundPhase, ScoreError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn stack_deck(game: &mut Game, draws: &[Card]) {
    let mut pile: Vec<Card> = draws.to_vec();
    pile.reverse();
    game.deck = Deck::stacked(pile);
}

#[test]
fn soft_ace_scoring_is_maximal() {
    let mut hand = Hand::new();
    hand.deal(card(Suit::Hearts, 1)).unwrap();
    hand.deal(card(Suit::Spades, 1)).unwrap();
    let outcome = hand.deal(card(Suit::Clubs, 9)).unwrap();
    // One ace at 11, one demoted to 1.
    assert_eq!(hand.score(), Ok(21));
    assert_eq!(outcome, DealOutcome::TwentyOne);
    assert_eq!(hand.is_soft(), Ok(true));

    let mut aces = Hand::new();
    aces.deal(card(Suit::Hearts, 1)).unwrap();
    aces.deal(card(Suit::Spades, 1)).unwrap();
    aces.deal(card(Suit::Diamonds, 1)).unwrap();
    assert_eq!(aces.score(), Ok(13));

    let mut natural = Hand::new();
    natural.deal(card(Suit::Hearts, 1)).unwrap();
    let outcome = natural.deal(card(Suit::Spades, 13)).unwrap();
    assert_eq!(outcome, DealOutcome::TwentyOne);
    assert_eq!(natural.score(), Ok(21));
}

#[test]
fn invalid_face_fails_fast() {
    let bad = card(Suit::Hearts, 14);
    assert_eq!(bad.score(), Err(ScoreError::InvalidCardFace(14)));
    assert_eq!(bad.face_name(), None);

    let mut hand = Hand::new();
    hand.deal(card(Suit::Hearts, 5)).unwrap();
    assert_eq!(
        hand.deal(bad),
        Err(ScoreError::InvalidCardFace(14)),
    );
}

#[test]
fn card_display_uses_face_names() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Queen of Diamonds");
    assert_eq!(card(Suit::Clubs, 10).to_string(), "10 of Clubs");
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::new(1);
    deck.shuffle(&mut rng);
    assert_eq!(deck.cards_remaining(), DECK_SIZE);

    let mut drawn = Vec::new();
    for _ in 0..DECK_SIZE {
        drawn.push(deck.draw(&mut rng).unwrap());
    }
    assert_eq!(deck.discarded(), DECK_SIZE);

    // Every one of the 52 cards appears exactly once.
    for suit in [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds] {
        for rank in 1..=13 {
            let count = drawn.iter().filter(|c| **c == card(suit, rank)).count();
            assert_eq!(count, 1, "{} appeared {count} times", card(suit, rank));
        }
    }
}

#[test]
fn shuffle_positions_are_roughly_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck = Deck::stacked(vec![
        card(Suit::Spades, 2),
        card(Suit::Spades, 3),
        card(Suit::Spades, 4),
        card(Suit::Spades, 5),
    ]);

    let trials = 400;
    let mut first_draw_counts = [0usize; 4];
    for _ in 0..trials {
        deck.shuffle(&mut rng);
        let first = deck.draw(&mut rng).unwrap();
        first_draw_counts[(first.rank - 2) as usize] += 1;
    }

    // Expected 100 per card; generous bounds for a statistical check.
    for count in first_draw_counts {
        assert!((40..=180).contains(&count), "skewed count {count}");
    }
}

#[test]
fn magic_deck_never_consumes_supply() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new(0);
    assert!(deck.is_magic());
    assert_eq!(deck.size(), 0);

    deck.shuffle(&mut rng);
    for _ in 0..200 {
        let drawn = deck.draw(&mut rng).unwrap();
        assert!((1..=13).contains(&drawn.rank));
    }
    assert_eq!(deck.size(), 0);
    assert_eq!(deck.cards_remaining(), 0);

    assert!(!Deck::new(2).is_magic());
    assert_eq!(Deck::new(2).size(), 2 * DECK_SIZE);
}

#[test]
fn drawing_past_the_pile_is_an_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut deck = Deck::stacked(vec![card(Suit::Hearts, 7)]);
    assert!(!deck.is_magic());

    assert_eq!(deck.draw(&mut rng).unwrap(), card(Suit::Hearts, 7));
    assert_eq!(deck.cards_remaining(), 0);
    assert_eq!(deck.discarded(), 1);

    assert_eq!(deck.draw(&mut rng), Err(DrawError::DeckExhausted));

    // Shuffling folds the discard pile back in.
    deck.shuffle(&mut rng);
    assert_eq!(deck.cards_remaining(), 1);
    assert_eq!(deck.discarded(), 0);
}

#[test]
fn dealer_stops_at_eighteen_and_player_wins() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 10),  // player
            card(Suit::Hearts, 10), // dealer
            card(Suit::Clubs, 10),  // player
            card(Suit::Diamonds, 8), // dealer -> 18, stands
        ],
    );

    game.new_round().unwrap();
    assert_eq!(game.phase(), RoundPhase::Acting);
    assert!(!game.dealer().is_revealed());
    assert_eq!(game.player(0).unwrap().hand.score(), Ok(20));

    game.stand(0).unwrap();
    assert_eq!(game.phase(), RoundPhase::Resolved);
    assert!(game.dealer().is_revealed());

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_score, 18);
    assert!(!result.dealer_bust);
    assert_eq!(result.players[0].outcome, PlayerOutcome::Won);
    assert_eq!(result.players[0].score, 20);
    assert_eq!(game.winners(), [0]);
    assert_eq!(game.player(0).unwrap().wins(), 1);
}

#[test]
fn dealer_draws_below_eighteen_and_can_bust() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 9),   // player
            card(Suit::Hearts, 10), // dealer
            card(Suit::Clubs, 9),   // player
            card(Suit::Diamonds, 6), // dealer -> 16, must draw
            card(Suit::Hearts, 13), // dealer draw -> 26, bust
        ],
    );

    game.new_round().unwrap();
    game.stand(0).unwrap();

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_score, 26);
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].outcome, PlayerOutcome::Won);
    assert_eq!(game.player(0).unwrap().wins(), 1);
}

#[test]
fn tie_with_the_dealer_counts_as_a_win() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 10),  // player
            card(Suit::Hearts, 10), // dealer
            card(Suit::Clubs, 9),   // player -> 19
            card(Suit::Diamonds, 9), // dealer -> 19
        ],
    );

    game.new_round().unwrap();
    game.stand(0).unwrap();

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_score, 19);
    assert_eq!(result.players[0].outcome, PlayerOutcome::Won);
}

#[test]
fn busting_forces_the_player_out() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 13),  // player King
            card(Suit::Hearts, 10), // dealer
            card(Suit::Clubs, 12),  // player Queen
            card(Suit::Diamonds, 9), // dealer -> 19
            card(Suit::Hearts, 5),  // player hit -> 25, bust
        ],
    );

    game.new_round().unwrap();
    let hit_card = game.hit(0).unwrap();
    assert_eq!(hit_card, Some(card(Suit::Hearts, 5)));

    // The bust forced the last player to stand, so the round resolved.
    assert_eq!(game.phase(), RoundPhase::Resolved);
    assert_eq!(game.busted(), [0]);
    assert_eq!(game.standing(), [0]);
    assert!(game.winners().is_empty());

    let result = game.round_result().unwrap();
    assert_eq!(result.players[0].outcome, PlayerOutcome::Busted);
    assert_eq!(result.players[0].score, 25);
    assert_eq!(game.player(0).unwrap().wins(), 0);
}

#[test]
fn natural_twenty_one_wins_before_any_input() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 1),   // player Ace
            card(Suit::Hearts, 9),  // dealer
            card(Suit::Clubs, 13),  // player King -> natural 21
            card(Suit::Diamonds, 9), // dealer -> 18, stands
        ],
    );

    // The only player is dealt a natural, so the round resolves in the deal.
    game.new_round().unwrap();
    assert_eq!(game.phase(), RoundPhase::Resolved);

    // The player qualifies on both the natural path and the dealer
    // comparison, but is counted once.
    assert_eq!(game.winners(), [0]);
    assert_eq!(game.player(0).unwrap().wins(), 1);

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_score, 18);
    assert_eq!(result.players[0].outcome, PlayerOutcome::Won);
}

#[test]
fn hit_and_stand_on_a_standing_player_are_no_ops() {
    let mut game = Game::new(GameOptions::default().with_players(2).with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 5),   // player 0
            card(Suit::Hearts, 6),  // player 1
            card(Suit::Clubs, 10),  // dealer
            card(Suit::Diamonds, 5), // player 0
            card(Suit::Spades, 6),  // player 1
            card(Suit::Hearts, 9),  // dealer -> 19
        ],
    );

    game.new_round().unwrap();
    game.stand(0).unwrap();
    assert_eq!(game.phase(), RoundPhase::Acting);

    // Hitting or standing again changes nothing.
    assert_eq!(game.hit(0), Ok(None));
    game.stand(0).unwrap();
    assert_eq!(game.standing(), [0]);
    assert_eq!(game.player(0).unwrap().hand.len(), 2);

    game.stand(1).unwrap();
    assert_eq!(game.phase(), RoundPhase::Resolved);
}

#[test]
fn commands_reject_the_wrong_phase() {
    let mut game = Game::new(GameOptions::default(), 1);

    // No round is running yet.
    assert_eq!(game.hit(0), Err(RoundError::InvalidState));
    assert_eq!(game.stand(0), Err(RoundError::InvalidState));

    game.new_round().unwrap();
    assert_eq!(game.new_round(), Err(RoundError::InvalidState));
    assert_eq!(game.add_player(), Err(RoundError::InvalidState));
    assert_eq!(game.reshuffle(), Err(RoundError::InvalidState));

    assert_eq!(game.hit(9), Err(RoundError::PlayerNotFound));
    assert_eq!(game.stand(9), Err(RoundError::PlayerNotFound));
}

#[test]
fn deck_exhaustion_mid_round_is_reported() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 5),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );

    game.new_round().unwrap();
    assert_eq!(
        game.hit(0),
        Err(RoundError::Draw(DrawError::DeckExhausted))
    );
}

#[test]
fn dealer_turn_exhaustion_aborts_to_a_recoverable_round() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 10),  // player
            card(Suit::Hearts, 10), // dealer
            card(Suit::Clubs, 9),   // player -> 19
            card(Suit::Diamonds, 6), // dealer -> 16, must draw from nothing
        ],
    );

    game.new_round().unwrap();
    assert_eq!(
        game.stand(0),
        Err(RoundError::Draw(DrawError::DeckExhausted))
    );

    // The abandoned round leaves no result, and every recovery command
    // still works.
    assert_eq!(game.phase(), RoundPhase::Resolved);
    assert!(game.round_result().is_none());

    game.reshuffle().unwrap();
    assert_eq!(game.deck.cards_remaining(), 4);
    game.new_round().unwrap();
    assert_eq!(game.phase(), RoundPhase::Acting);
}

#[test]
fn failed_deal_aborts_to_a_recoverable_round() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 5),  // player
            card(Suit::Hearts, 14), // dealer, unrecognized rank
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );

    assert_eq!(
        game.new_round(),
        Err(RoundError::Score(ScoreError::InvalidCardFace(14)))
    );
    assert_eq!(game.phase(), RoundPhase::Resolved);

    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 5),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
        ],
    );
    game.new_round().unwrap();
    assert_eq!(game.phase(), RoundPhase::Acting);
}

#[test]
fn seats_are_refused_once_the_id_counter_is_spent() {
    let mut game = Game::new(GameOptions::default().with_players(255), 42);
    assert_eq!(game.players().len(), 255);

    assert_eq!(game.add_player(), Err(RoundError::TableFull));
    assert_eq!(game.players().len(), 255);
}

#[test]
fn new_round_refuses_a_short_deck_until_reshuffled() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 1),   // player Ace
            card(Suit::Hearts, 9),  // dealer
            card(Suit::Clubs, 13),  // player King -> natural, round resolves
            card(Suit::Diamonds, 9), // dealer -> 18
        ],
    );

    game.new_round().unwrap();
    assert_eq!(game.phase(), RoundPhase::Resolved);
    assert_eq!(game.deck.cards_remaining(), 0);

    // All four cards sit in the discard pile; a new round needs them back.
    assert_eq!(
        game.new_round(),
        Err(RoundError::Draw(DrawError::DeckExhausted))
    );

    game.reshuffle().unwrap();
    assert_eq!(game.deck.cards_remaining(), 4);
    game.new_round().unwrap();
}

#[test]
fn players_persist_across_rounds_and_ids_grow() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 42);
    stack_deck(
        &mut game,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 9),
        ],
    );

    game.new_round().unwrap();
    assert_eq!(game.player(0).unwrap().wins(), 1);

    let new_id = game.add_player().unwrap();
    assert_eq!(new_id, 1);
    assert_eq!(game.players().len(), 2);

    // The earlier win survives the reset of per-round state.
    assert_eq!(game.player(0).unwrap().wins(), 1);
}

#[test]
fn same_seed_replays_the_same_round() {
    let options = GameOptions::default().with_players(2);
    let mut first = Game::new(options, 1234);
    let mut second = Game::new(options, 1234);

    first.new_round().unwrap();
    second.new_round().unwrap();

    for (a, b) in first.players().iter().zip(second.players()) {
        assert_eq!(a.hand.cards(), b.hand.cards());
    }
    assert_eq!(first.dealer().cards(), second.dealer().cards());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default().with_players(4).with_decks(6);
    assert_eq!(options.players, 4);
    assert_eq!(options.decks, 6);

    let defaults = GameOptions::default();
    assert_eq!(defaults.players, 1);
    assert_eq!(defaults.decks, 0);
}

#[test]
fn rng_helpers_respect_their_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let mut seen = [false; 3];
    for _ in 0..100 {
        let n = twentyone::rng::random_integer(&mut rng, 0usize, 2);
        assert!(n <= 2);
        seen[n] = true;
    }
    assert_eq!(seen, [true, true, true]);

    for _ in 0..100 {
        assert!(twentyone::rng::random_integer_up_to(&mut rng, 3) < 3);
    }
}
