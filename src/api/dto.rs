use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::Chips;
use crate::engine::{Outcome, Phase};

/// Представление раунда для клиента.
///
/// Ключевое отличие от самого `Round`: пока идёт ход игрока,
/// скрытая карта дилера в DTO вообще не попадает — клиент
/// физически не может её показать или подсмотреть в трафике.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundViewDto {
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub balance: Chips,
    pub current_bet: Chips,

    pub player_cards: Vec<Card>,
    pub player_score: u32,

    /// Только видимые карты дилера: одна открытая, пока
    /// `dealer_card_hidden`, иначе вся рука.
    pub dealer_cards: Vec<Card>,
    pub dealer_card_hidden: bool,
    /// Счёт дилера глазами игрока (по видимым картам).
    pub visible_dealer_score: u32,
}
