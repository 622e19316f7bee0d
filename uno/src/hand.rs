use std::slice::Iter;

use crate::{
    card::Card,
    error::{Result, UnoError},
};

/// The cards a player is holding, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn get_card(&self, index: usize) -> Result<&Card> {
        self.0.get(index).ok_or(UnoError::IndexOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.0.len() {
            return Err(UnoError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    pub fn position(&self, card: &Card) -> Option<usize> {
        self.0.iter().position(|x| x == card)
    }

    /// Throws away every card in the hand.
    pub fn discard(&mut self) {
        self.0.clear();
    }

    /// Sum of the points of every card still held.
    pub fn points(&self) -> u32 {
        self.0.iter().map(Card::points).sum()
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

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
