//! Property tests for the shoe, hand scoring and round flow.

use std::collections::HashMap;

use bjround::{
    BLACKJACK, Card, DECK_SIZE, Game, GameOptions, GameState, Hand, Rank, Shoe, Suit,
    dealer_should_hit,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (
        prop::sample::select(Suit::ALL.to_vec()),
        prop::sample::select(Rank::ALL.to_vec()),
    )
        .prop_map(|(suit, rank)| Card::new(suit, rank))
}

/// Straightforward reference: best total not over 21 if one exists.
fn reference_score(cards: &[Card]) -> u32 {
    let hard: u32 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { u32::from(c.value()) })
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
    (0..=aces)
        .rev()
        .map(|soft| hard + soft * 10)
        .find(|&total| total <= 21)
        .unwrap_or(hard)
}

proptest! {
    #[test]
    fn shoe_holds_each_card_once_per_deck(decks in 1_u8..=2, seed in any::<u64>()) {
        let mut shoe = Shoe::new(decks, &mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(shoe.remaining(), DECK_SIZE * decks as usize);

        let mut seen: HashMap<Card, usize> = HashMap::new();
        let mut remaining = shoe.remaining();
        while let Ok(card) = shoe.draw() {
            remaining -= 1;
            prop_assert_eq!(shoe.remaining(), remaining);
            let count = seen.entry(card).or_default();
            *count += 1;
            prop_assert!(*count <= decks as usize);
        }

        prop_assert_eq!(seen.len(), DECK_SIZE);
        prop_assert!(seen.values().all(|&n| n == decks as usize));
        prop_assert!(shoe.draw().is_err());
    }

    #[test]
    fn hand_score_matches_reference(cards in prop::collection::vec(any_card(), 0..=104)) {
        let hand = Hand::from_cards(cards.clone());
        prop_assert_eq!(u32::from(hand.score()), reference_score(&cards));
    }

    #[test]
    fn round_flow_invariants(seed in any::<u64>(), decks in 1_u8..=2, hits in 0_usize..4) {
        let mut game = Game::new(GameOptions::default().with_decks(decks), seed);
        game.start_round().unwrap();
        prop_assert_eq!(game.player_hand().len(), 2);
        prop_assert_eq!(game.dealer_hand().len(), 2);
        prop_assert_eq!(game.cards_remaining(), DECK_SIZE * decks as usize - 4);

        if game.player_score() == BLACKJACK {
            prop_assert_eq!(game.state(), GameState::Resolved);
        }

        for _ in 0..hits {
            game.hit().unwrap();
        }
        game.stand().unwrap();

        prop_assert!(game.is_over());
        prop_assert_eq!(game.history().len(), 1);
        if game.player_score() <= BLACKJACK && game.dealer_hand().len() > 2 {
            prop_assert!(!dealer_should_hit(game.dealer_score()));
        }
    }
}
