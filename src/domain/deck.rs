use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RandomSource из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Пустая колода. Такой `Round` стартует до раздачи:
    /// свежую 52-карточную колоду он собирает сам в момент deal.
    pub fn empty() -> Self {
        Deck { cards: Vec::new() }
    }

    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    /// Ровно по одной карте на каждую пару (ранг, масть).
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды (конец вектора).
    /// Все взятия идут строго с одного конца — колода как стек.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
