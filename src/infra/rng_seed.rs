//! RngSeed — доменный seed для RNG блэкджека.
//!
//! Позволяет:
//!   - хранить базовый seed сессии (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || old || session_id || round_index)
//!   - создавать DeterministicRng из seed
//!
//! Так каждый раунд сессии тасуется по-своему, но вся сессия
//! воспроизводима из одного базового seed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{RoundId, SessionId};
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с включением контекста:
    ///   - session_id — чья сессия;
    ///   - round_index — номер раунда внутри сессии.
    ///
    /// Пример вызова:
    ///     round_seed = base_seed.derive(session, round_index)
    pub fn derive(&self, session_id: SessionId, round_index: RoundId) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"BLACKJACK_ENGINE_RNG_V1");

        // Старый seed
        hasher.update(self.bytes);

        // Session ID
        hasher.update(session_id.to_le_bytes());

        // Номер раунда
        hasher.update(round_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
