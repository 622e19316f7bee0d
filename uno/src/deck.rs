use std::slice::Iter;

use rand::{seq::SliceRandom, thread_rng, Rng};
use tracing::{debug, trace};

use crate::{
    card::{Card, CardColor, CardValue},
    constants::*,
    error::{Result, UnoError},
    player::Player,
};

/// A pile of cards. The top of the pile is the end of the vector, so `draw`
/// returns whatever was placed last.
#[derive(Clone, Debug, Default)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Creates the standard 108 card deck when `populate` is set, otherwise an
    /// empty pile.
    pub fn new(populate: bool) -> Self {
        if !populate {
            return Self::default();
        }

        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::SUITS {
            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::colored(color, CardValue::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::colored(color, CardValue::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::colored(color, CardValue::DrawTwo));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::colored(color, CardValue::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        Self(cards)
    }

    pub fn standard() -> Self {
        Self::new(true)
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut thread_rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
        debug!(cards = self.0.len(), "Shuffled deck");
    }

    pub fn draw(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::EmptyDeck)
    }

    /// Draws `count` cards off the top, or none at all if the deck is too
    /// small.
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>> {
        let available = self.0.len();
        if count > available {
            return Err(UnoError::NotEnoughCards {
                requested: count,
                available,
            });
        }

        let mut cards = self.0.split_off(available - count);
        cards.reverse();
        Ok(cards)
    }

    pub fn place(&mut self, card: Card) {
        trace!(%card, "Placed card on deck");
        self.0.push(card);
    }

    pub fn deal(&mut self, player: &mut Player, count: usize) -> Result<()> {
        let cards = self.draw_cards(count)?;
        debug!(player = player.name(), count, "Dealt cards");
        for card in cards {
            player.add_card(card);
        }
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn red_5() -> Card {
        Card::new(CardColor::Red, CardValue::Number(5)).unwrap()
    }

    fn card_counts(deck: &Deck) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in deck.iter() {
            *counts.entry(card.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(Deck::new(true).len(), TOTAL_CARDS_IN_DECK as usize);
        assert_eq!(Deck::standard().len(), 108);
    }

    #[test]
    fn unpopulated_deck_is_empty() {
        let deck = Deck::new(false);
        assert_eq!(deck.len(), 0);
        assert!(deck.is_empty());
    }

    #[test]
    fn standard_deck_has_the_uno_distribution() {
        let counts = card_counts(&Deck::standard());

        for color in CardColor::SUITS {
            assert_eq!(counts[&Card::colored(color, CardValue::Number(0))], 1);
            for number in 1..=9 {
                assert_eq!(counts[&Card::colored(color, CardValue::Number(number))], 2);
            }
            assert_eq!(counts[&Card::colored(color, CardValue::Skip)], 2);
            assert_eq!(counts[&Card::colored(color, CardValue::Reverse)], 2);
            assert_eq!(counts[&Card::colored(color, CardValue::DrawTwo)], 2);
        }
        assert_eq!(counts[&Card::wild()], 4);
        assert_eq!(counts[&Card::wild_draw_four()], 4);
    }

    #[test]
    fn unshuffled_order_is_deterministic() {
        let first = Deck::standard().iter().cloned().collect::<Vec<_>>();
        let second = Deck::standard().iter().cloned().collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn draw_removes_one_card() {
        let mut deck = Deck::standard();
        let initial_count = deck.len();

        deck.draw().unwrap();

        assert_eq!(deck.len(), initial_count - 1);
    }

    #[test]
    fn draw_from_empty_deck_fails() {
        let mut deck = Deck::new(false);
        assert_eq!(deck.draw(), Err(UnoError::EmptyDeck));
    }

    #[test]
    fn place_then_draw_returns_the_placed_card() {
        let mut deck = Deck::new(false);
        deck.place(red_5());
        assert_eq!(deck.len(), 1);

        assert_eq!(deck.draw().unwrap(), red_5());
        assert!(deck.is_empty());
    }

    #[test]
    fn draw_cards_takes_from_the_top_in_draw_order() {
        let mut deck = Deck::new(false);
        deck.place(red_5());
        deck.place(Card::wild());
        deck.place(Card::wild_draw_four());

        let cards = deck.draw_cards(2).unwrap();

        assert_eq!(cards, vec![Card::wild_draw_four(), Card::wild()]);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn draw_cards_leaves_deck_untouched_when_too_small() {
        let mut deck = Deck::new(false);
        deck.place(red_5());

        let error = deck.draw_cards(2).unwrap_err();

        assert_eq!(
            error,
            UnoError::NotEnoughCards {
                requested: 2,
                available: 1
            }
        );
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::standard();
        let before = card_counts(&deck);

        deck.shuffle_with(&mut StdRng::seed_from_u64(7));

        assert_eq!(deck.len(), 108);
        assert_eq!(card_counts(&deck), before);
    }

    #[test]
    fn shuffle_changes_the_order() {
        let mut first = Deck::standard();
        let mut second = Deck::standard();

        first.shuffle_with(&mut StdRng::seed_from_u64(1));
        second.shuffle_with(&mut StdRng::seed_from_u64(2));

        assert_eq!(first.len(), second.len());
        assert!(first.iter().ne(second.iter()));
        assert!(first.iter().ne(Deck::standard().iter()));
    }

    #[test]
    fn deal_moves_cards_into_the_hand() {
        let mut deck = Deck::standard();
        let mut player = Player::new("Player 1");

        deck.deal(&mut player, 7).unwrap();

        assert_eq!(player.card_count(), 7);
        assert_eq!(deck.len(), 101);
    }
}
