use crate::domain::Chips;
use crate::engine::round::Phase;

use thiserror::Error;

/// Ошибки раунда блэкджека. Все восстановимые: раунд при ошибке
/// остаётся без изменений, вызывающий код показывает сообщение
/// и повторяет запрос.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("Ставка должна быть больше нуля")]
    InvalidBet,

    #[error("Недостаточно средств: ставка {bet}, баланс {balance}")]
    InsufficientBalance { bet: Chips, balance: Chips },

    #[error("Действие '{action}' недопустимо в фазе {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("Нельзя раздавать карты без сделанной ставки")]
    BetNotPlaced,

    #[error("В колоде не осталось карт")]
    EmptyDeck,
}
