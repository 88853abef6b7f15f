//! Движок одиночного блэкджека.
//!
//! Ядро — машина состояний раунда (`engine::Round`): ставка, раздача,
//! hit/stand, фиксированная политика дилера, разрешение исхода и
//! выплата. Вокруг ядра:
//!   - `domain` — карты, колода, руки, фишки и подсчёт очков;
//!   - `api` — сериализуемые команды/запросы и DTO со скрытой
//!     картой дилера;
//!   - `session` — перенос баланса между раундами (слой "внешнего
//!     вызывающего кода" из правил игры);
//!   - `infra` — RNG (системный и детерминированный), seed на раунд,
//!     хранение снапшотов раунда.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod session;

pub use domain::{Card, Chips, Deck, Hand, Rank, Suit};
pub use engine::{Outcome, Phase, RandomSource, Round, RoundError};
pub use session::{Session, DEFAULT_STARTING_BALANCE};
