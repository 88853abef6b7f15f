use crate::domain::Chips;
use crate::engine::round::Outcome;

/// Сколько фишек вернуть игроку на баланс при данном исходе.
///
/// Ставка списана с баланса ещё при `place_bet`, поэтому таблица
/// задаёт полный возврат, а не чистый выигрыш:
///   - блэкджек игрока: floor(ставка × 2.5) — выплата 3:2;
///   - победа игрока: ставка × 2;
///   - push: ставка возвращается;
///   - победа дилера (обычная или блэкджек): ничего.
pub fn payout(outcome: Outcome, bet: Chips) -> Chips {
    match outcome {
        // bet * 5 / 2 в целых числах: дробная половина отбрасывается
        // вниз, ровно как в исходных правилах выплаты.
        Outcome::PlayerBlackjack => Chips(bet.0 * 5 / 2),
        Outcome::PlayerWins => Chips(bet.0 * 2),
        Outcome::Push => bet,
        Outcome::DealerWins | Outcome::DealerBlackjack => Chips::ZERO,
    }
}
