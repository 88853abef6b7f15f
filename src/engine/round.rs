use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::Chips;
use crate::engine::errors::RoundError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::payout::payout;
use crate::engine::RandomSource;

/// Дилер добирает карты строго пока его счёт < 17.
/// Именно `< 17`, без дополнительной проверки `<= 21`: любой счёт >= 17
/// (включая перебор) сам выводит из цикла, дилер не "решает" остановиться.
pub const DEALER_STANDS_AT: u32 = 17;

/// Фаза раунда. Переходы монотонные:
/// Betting → PlayerTurn → DealerTurn → Finished,
/// либо Betting → PlayerTurn → Finished (перебор игрока
/// пропускает ход дилера).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Betting,
    PlayerTurn,
    DealerTurn,
    Finished,
}

/// Исход завершённого раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Push,
    PlayerBlackjack,
    DealerBlackjack,
}

/// Раунд блэкджека — агрегат всего состояния одной партии.
///
/// Владеет колодой, обеими руками, ставкой и балансом. Все мутации
/// идут через действия `place_bet` / `deal` / `hit` / `stand`;
/// каждое действие сначала проверяет свои предусловия и при ошибке
/// оставляет раунд нетронутым. Состояние — plain data: сериализуется
/// целиком, хранение между вызовами — забота внешнего слоя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Round {
    pub deck: Deck,
    pub player_hand: Hand,
    pub dealer_hand: Hand,
    pub balance: Chips,
    pub current_bet: Chips,
    pub phase: Phase,
    /// Some(..) тогда и только тогда, когда phase == Finished.
    pub outcome: Option<Outcome>,
    pub history: RoundHistory,
}

impl Round {
    /// Новый раунд в фазе Betting. Стартовый баланс задаёт вызывающий
    /// код (перенос из прошлого раунда или дефолт сессии) — движок
    /// никакого дефолта не знает.
    pub fn new(starting_balance: Chips) -> Self {
        Self {
            deck: Deck::empty(),
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            balance: starting_balance,
            current_bet: Chips::ZERO,
            phase: Phase::Betting,
            outcome: None,
            history: RoundHistory::new(),
        }
    }

    /// Сделать ставку. Сумма списывается с баланса сразу —
    /// ставка "в игре" с момента размещения, не с момента раздачи.
    pub fn place_bet(&mut self, amount: Chips) -> Result<(), RoundError> {
        if self.phase != Phase::Betting {
            return Err(RoundError::WrongPhase {
                action: "place_bet",
                phase: self.phase,
            });
        }
        if amount.is_zero() {
            return Err(RoundError::InvalidBet);
        }
        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or(RoundError::InsufficientBalance {
                bet: amount,
                balance: self.balance,
            })?;

        self.balance = new_balance;
        self.current_bet = amount;
        self.history.push(RoundEventKind::BetPlaced {
            amount,
            balance_after: self.balance,
        });
        Ok(())
    }

    /// Стартовая раздача: свежая перемешанная колода, затем 4 карты
    /// попеременно — игрок, дилер, игрок, дилер. Фаза → PlayerTurn.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), RoundError> {
        if self.phase != Phase::Betting {
            return Err(RoundError::WrongPhase {
                action: "deal",
                phase: self.phase,
            });
        }
        if self.current_bet.is_zero() {
            return Err(RoundError::BetNotPlaced);
        }

        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        self.deck = deck;

        // Со свежей 52-карточной колодой draw ниже не может провалиться.
        for _ in 0..2 {
            let to_player = self.deck.draw_one().ok_or(RoundError::EmptyDeck)?;
            self.player_hand.push(to_player);
            let to_dealer = self.deck.draw_one().ok_or(RoundError::EmptyDeck)?;
            self.dealer_hand.push(to_dealer);
        }

        self.history.push(RoundEventKind::InitialDeal {
            player_cards: self.player_hand.cards.clone(),
            dealer_cards: self.dealer_hand.cards.clone(),
        });
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Игрок берёт карту. При переборе раунд завершается сразу:
    /// исход DealerWins, ход дилера не разыгрывается.
    pub fn hit(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::WrongPhase {
                action: "hit",
                phase: self.phase,
            });
        }

        let card = self.deck.draw_one().ok_or(RoundError::EmptyDeck)?;
        self.player_hand.push(card);
        self.history.push(RoundEventKind::PlayerHit {
            card,
            score_after: self.player_hand.score(),
        });

        if self.player_hand.is_bust() {
            self.settle(Outcome::DealerWins);
        }
        Ok(())
    }

    /// Игрок останавливается: дилер добирает до 17, затем раунд
    /// разрешается и расплачивается. Всё синхронно, без прерываний.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::WrongPhase {
                action: "stand",
                phase: self.phase,
            });
        }

        self.history.push(RoundEventKind::PlayerStood {
            score: self.player_hand.score(),
        });
        self.phase = Phase::DealerTurn;

        while self.dealer_hand.score() < DEALER_STANDS_AT {
            let card = self.deck.draw_one().ok_or(RoundError::EmptyDeck)?;
            self.dealer_hand.push(card);
            self.history.push(RoundEventKind::DealerDrew {
                card,
                score_after: self.dealer_hand.score(),
            });
        }

        let outcome = self.resolve();
        self.settle(outcome);
        Ok(())
    }

    /// Определение исхода по полным рукам. Порядок проверок важен:
    /// блэкджек старше перебора и сравнения очков.
    fn resolve(&self) -> Outcome {
        let player_bj = self.player_hand.is_blackjack();
        let dealer_bj = self.dealer_hand.is_blackjack();

        if player_bj && dealer_bj {
            return Outcome::Push;
        }
        if player_bj {
            return Outcome::PlayerBlackjack;
        }
        if dealer_bj {
            return Outcome::DealerBlackjack;
        }

        if self.player_hand.is_bust() {
            return Outcome::DealerWins;
        }
        if self.dealer_hand.is_bust() {
            return Outcome::PlayerWins;
        }

        let player = self.player_hand.score();
        let dealer = self.dealer_hand.score();
        if player > dealer {
            Outcome::PlayerWins
        } else if dealer > player {
            Outcome::DealerWins
        } else {
            Outcome::Push
        }
    }

    /// Зафиксировать исход и расплатиться. Вызывается ровно один раз
    /// за раунд: либо из `hit` при переборе, либо из `stand`.
    fn settle(&mut self, outcome: Outcome) {
        let pay = payout(outcome, self.current_bet);
        self.balance += pay;
        self.outcome = Some(outcome);
        self.phase = Phase::Finished;
        self.history.push(RoundEventKind::RoundResolved {
            outcome,
            payout: pay,
            balance_after: self.balance,
        });
    }

    // ---- Read-only запросы для внешнего слоя ----

    pub fn player_score(&self) -> u32 {
        self.player_hand.score()
    }

    /// Полный счёт дилера. Для отображения игроку до вскрытия
    /// используйте `visible_dealer_score`.
    pub fn dealer_score(&self) -> u32 {
        self.dealer_hand.score()
    }

    /// Вторая карта дилера скрыта, пока ходит игрок.
    pub fn is_dealer_card_hidden(&self) -> bool {
        matches!(self.phase, Phase::Betting | Phase::PlayerTurn)
    }

    /// Счёт дилера глазами игрока: пока карта скрыта — только
    /// открытая карта, после — вся рука. Влияет только на то,
    /// что показывается; разрешение всегда идёт по полным рукам.
    pub fn visible_dealer_score(&self) -> u32 {
        if self.is_dealer_card_hidden() {
            // одна карта не требует понижения туза, номинала достаточно
            self.dealer_hand
                .first_card()
                .map(|c| c.rank.blackjack_value())
                .unwrap_or(0)
        } else {
            self.dealer_hand.score()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
}
