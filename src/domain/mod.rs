//! Доменная модель блэкджека: карты, колода, руки, фишки.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;

// Базовые идентификаторы (сессия = последовательность раундов одного игрока).
pub type SessionId = u64;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
