//! Движок блэкджека: машина состояний раунда, разрешение исхода, выплата.
//!
//! Высокоуровневый объект: `Round`
//! Основные операции:
//!   - `place_bet` – сделать ставку (списывается сразу)
//!   - `deal` – стартовая раздача из свежей перемешанной колоды
//!   - `hit` / `stand` – решения игрока; `stand` синхронно доигрывает
//!     ход дилера, разрешает раунд и расплачивается

pub mod errors;
pub mod history;
pub mod payout;
pub mod round;

pub use errors::RoundError;
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use payout::payout;
pub use round::{Outcome, Phase, Round, DEALER_STANDS_AT};

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
