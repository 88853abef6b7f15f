use serde::{Deserialize, Serialize};

use crate::engine::RoundError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
///
/// Сериализуемые и строковые: клиент показывает сообщение и
/// перезапрашивает форму (например, форму ставки), баланс раунда
/// при этом не теряется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Ошибка правил раунда (ставка, фаза, колода).
    Round(String),

    /// Внутренняя ошибка обвязки.
    Internal(String),
}

impl From<RoundError> for ApiError {
    fn from(err: RoundError) -> Self {
        ApiError::Round(err.to_string())
    }
}
