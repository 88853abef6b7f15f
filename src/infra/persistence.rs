use std::collections::HashMap;

use crate::domain::SessionId;
use crate::engine::Round;

/// Абстракция хранилища раундов.
///
/// Ядро само ничего не хранит — раунд это plain data, который
/// внешний слой кладёт куда хочет (память, БД, файл). Эта
/// абстракция удобна:
/// - для юнит- и интеграционных тестов движка,
/// - для любых оффчейн/серверных обвязок поверх ядра.
pub trait RoundStorage {
    /// Загрузить текущий раунд сессии (если он есть).
    fn load_round(&self, id: SessionId) -> Option<Round>;

    /// Сохранить текущий раунд сессии.
    fn save_round(&mut self, id: SessionId, round: &Round);

    /// Убрать раунд сессии (сессия закрыта).
    fn remove_round(&mut self, id: SessionId);
}

/// Простая in-memory реализация для тестов и локального запуска.
/// Хранит JSON-снапшоты — заодно проверяя, что Round действительно
/// сериализуется целиком без потерь.
#[derive(Debug, Default)]
pub struct InMemoryRoundStorage {
    rounds: HashMap<SessionId, String>,
}

impl InMemoryRoundStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundStorage for InMemoryRoundStorage {
    fn load_round(&self, id: SessionId) -> Option<Round> {
        self.rounds.get(&id).and_then(|s| decode_round(s).ok())
    }

    fn save_round(&mut self, id: SessionId, round: &Round) {
        if let Ok(snapshot) = encode_round(round) {
            self.rounds.insert(id, snapshot);
        }
    }

    fn remove_round(&mut self, id: SessionId) {
        self.rounds.remove(&id);
    }
}

/// JSON-снапшот раунда.
pub fn encode_round(round: &Round) -> Result<String, serde_json::Error> {
    serde_json::to_string(round)
}

/// Восстановление раунда из JSON-снапшота.
pub fn decode_round(snapshot: &str) -> Result<Round, serde_json::Error> {
    serde_json::from_str(snapshot)
}
