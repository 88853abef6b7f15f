use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Порог перебора.
pub const BLACKJACK: u32 = 21;

/// Рука игрока или дилера. Порядок карт = порядок раздачи:
/// первая карта дилера — открытая ("up-card"), остальное
/// важно только для отображения. Подсчёт очков от порядка не зависит.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Первая (открытая) карта руки.
    pub fn first_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Подсчёт очков по правилам блэкджека.
    ///
    /// Каждый туз сначала считается как 11; пока сумма больше 21 и
    /// есть "мягкие" тузы, один туз понижается до 1 (−10). Понижение
    /// повторяется: [A, A, 9] → 31 → 21, [A, A, A, 8] → 31 → 21.
    /// Результат может превышать 21 — перебор определяет вызывающий код.
    pub fn score(&self) -> u32 {
        let mut total = 0u32;
        let mut aces = 0u32;

        for card in &self.cards {
            total += card.rank.blackjack_value();
            if card.rank.is_ace() {
                aces += 1;
            }
        }

        while total > BLACKJACK && aces > 0 {
            total -= 10;
            aces -= 1;
        }

        total
    }

    /// Натуральный блэкджек: ровно 2 карты на 21 очко.
    /// 21 из трёх и более карт блэкджеком не является.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Перебор: сумма больше 21.
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// "Мягкая" рука: хотя бы один туз всё ещё считается как 11.
    pub fn is_soft(&self) -> bool {
        let mut total = 0u32;
        let mut aces = 0u32;

        for card in &self.cards {
            total += card.rank.blackjack_value();
            if card.rank.is_ace() {
                aces += 1;
            }
        }

        while total > BLACKJACK && aces > 0 {
            total -= 10;
            aces -= 1;
        }

        aces > 0 && total <= BLACKJACK
    }
}
