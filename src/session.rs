//! Сессия — то, что в спеке называется "внешним вызывающим кодом":
//! переносит баланс завершённого раунда в стартовый баланс
//! следующего и выдаёт на каждый раунд свой RNG. Ядро (`Round`)
//! про всё это не знает и дефолтов не хардкодит.

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, RoundId, SessionId};
use crate::engine::{Phase, Round};
use crate::infra::{DeterministicRng, RngSeed};

/// Стартовый баланс новой сессии и замена нулевого баланса.
/// Политика внешнего слоя, в ядро не зашита.
pub const DEFAULT_STARTING_BALANCE: Chips = Chips(1000);

/// Баланс для следующего раунда: переносим прошлый, если он есть
/// и не обнулился, иначе дефолт.
pub fn carry_over_balance(prior: Option<Chips>) -> Chips {
    match prior {
        Some(balance) if !balance.is_zero() => balance,
        _ => DEFAULT_STARTING_BALANCE,
    }
}

/// Последовательность раундов одного игрока.
///
/// Новый `Round` создаётся на каждый раунд (завершённый раунд не
/// мутируется), RNG раунда детерминированно выводится из базового
/// seed сессии — вся сессия воспроизводима. Для продакшена базовый
/// seed берётся из энтропии, для тестов задаётся явно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub base_seed: RngSeed,
    /// Номер текущего раунда (с нуля).
    pub round_index: RoundId,
    pub round: Round,
}

impl Session {
    pub fn new(id: SessionId, base_seed: RngSeed) -> Self {
        Self {
            id,
            base_seed,
            round_index: 0,
            round: Round::new(DEFAULT_STARTING_BALANCE),
        }
    }

    /// RNG текущего раунда: seed выводится из базового seed,
    /// id сессии и номера раунда.
    pub fn round_rng(&self) -> DeterministicRng {
        self.base_seed.derive(self.id, self.round_index).to_rng()
    }

    /// Текущий раунд завершён?
    pub fn round_finished(&self) -> bool {
        self.round.phase() == Phase::Finished
    }

    /// Начать следующий раунд: баланс переносится (или сбрасывается
    /// на дефолт, если игрок проигрался в ноль), старый `Round`
    /// заменяется новым объектом.
    pub fn start_next_round(&mut self) {
        let balance = carry_over_balance(Some(self.round.balance()));
        self.round_index += 1;
        self.round = Round::new(balance);
    }
}
