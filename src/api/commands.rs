use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::Chips;
use crate::engine::{RandomSource, Round};

/// Команда верхнего уровня.
///
/// Одна команда = одно действие над раундом. Внешний транспорт
/// (HTTP-обвязка, CLI) десериализует команду и один раз вызывает
/// `apply`; сериализация всех команд — чтобы их можно было гнать
/// по любому каналу как есть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Сделать ставку (списывается с баланса сразу).
    PlaceBet(PlaceBetCommand),

    /// Стартовая раздача (требует сделанной ставки).
    Deal,

    /// Игрок берёт карту.
    Hit,

    /// Игрок останавливается; дилер доигрывает, раунд разрешается.
    Stand,
}

/// Команда ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceBetCommand {
    pub amount: Chips,
}

/// Применить команду к раунду.
///
/// Вызывающий код обязан сериализовать вызовы к одному и тому же
/// раунду (один писатель за раз) — ядро блокировок не держит.
pub fn apply<R: RandomSource>(
    round: &mut Round,
    rng: &mut R,
    command: &Command,
) -> Result<(), ApiError> {
    match command {
        Command::PlaceBet(cmd) => round.place_bet(cmd.amount)?,
        Command::Deal => round.deal(rng)?,
        Command::Hit => round.hit()?,
        Command::Stand => round.stand()?,
    }
    Ok(())
}
