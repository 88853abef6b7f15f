//! Инфраструктурный слой вокруг движка блэкджека:
//! - RNG-реализации для engine;
//! - доменный seed с hash-reseeding на раунд;
//! - абстракция хранения раундов (тесты / внешние обвязки).

pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use persistence::{decode_round, encode_round, InMemoryRoundStorage, RoundStorage};
pub use rng::*;
pub use rng_seed::RngSeed;
