//! Тонкий API-слой над движком: сериализуемые команды, read-only
//! запросы и DTO со спрятанной картой дилера. Транспорт (HTTP, CLI,
//! что угодно) живёт снаружи и просто гоняет эти типы.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::{apply, Command, PlaceBetCommand};
pub use dto::RoundViewDto;
pub use errors::ApiError;
pub use queries::{build_round_view, handle_query, Query, QueryResponse};
