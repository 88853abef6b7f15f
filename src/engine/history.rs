use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::Chips;
use crate::engine::round::Outcome;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Ставка сделана и списана с баланса.
    BetPlaced { amount: Chips, balance_after: Chips },

    /// Стартовая раздача: по 2 карты игроку и дилеру,
    /// попеременно — игрок, дилер, игрок, дилер.
    InitialDeal {
        player_cards: Vec<Card>,
        dealer_cards: Vec<Card>,
    },

    /// Игрок взял карту.
    PlayerHit { card: Card, score_after: u32 },

    /// Игрок остановился.
    PlayerStood { score: u32 },

    /// Дилер добрал карту (в цикле до 17).
    DealerDrew { card: Card, score_after: u32 },

    /// Раунд разрешён: исход и возврат на баланс.
    RoundResolved {
        outcome: Outcome,
        payout: Chips,
        balance_after: Chips,
    },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда. Удобна для отладки, реплея и dev-CLI.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }
}
