use serde::{Deserialize, Serialize};

use crate::engine::Round;

use super::dto::RoundViewDto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние раунда (в видимом для игрока виде).
    GetRound,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Round(RoundViewDto),
}

/// Выполнить запрос.
pub fn handle_query(round: &Round, query: &Query) -> QueryResponse {
    match query {
        Query::GetRound => QueryResponse::Round(build_round_view(round)),
    }
}

/// Сформировать DTO раунда.
///
/// Пока вторая карта дилера скрыта, в DTO уходит только открытая
/// карта и счёт по ней; после `stand` (или завершения раунда)
/// рука дилера отдаётся целиком.
pub fn build_round_view(round: &Round) -> RoundViewDto {
    let dealer_card_hidden = round.is_dealer_card_hidden();

    let dealer_cards = if dealer_card_hidden {
        round.dealer_hand.first_card().into_iter().collect()
    } else {
        round.dealer_hand.cards.clone()
    };

    RoundViewDto {
        phase: round.phase(),
        outcome: round.outcome(),
        balance: round.balance(),
        current_bet: round.current_bet(),
        player_cards: round.player_hand.cards.clone(),
        player_score: round.player_score(),
        dealer_cards,
        dealer_card_hidden,
        visible_dealer_score: round.visible_dealer_score(),
    }
}
