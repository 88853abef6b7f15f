//! Тесты API-слоя: диспетчер команд, сокрытие карты дилера в DTO,
//! маппинг ошибок, сериализация.

use blackjack_engine::api::{
    apply, build_round_view, handle_query, ApiError, Command, PlaceBetCommand, Query,
    QueryResponse, RoundViewDto,
};
use blackjack_engine::domain::Chips;
use blackjack_engine::engine::{Phase, Round};
use blackjack_engine::infra::DeterministicRng;

#[test]
fn command_dispatch_happy_path() {
    let mut round = Round::new(Chips(1000));
    let mut rng = DeterministicRng::from_u64(5);

    apply(
        &mut round,
        &mut rng,
        &Command::PlaceBet(PlaceBetCommand { amount: Chips(100) }),
    )
    .expect("place bet");
    apply(&mut round, &mut rng, &Command::Deal).expect("deal");

    assert_eq!(round.phase(), Phase::PlayerTurn);

    apply(&mut round, &mut rng, &Command::Stand).expect("stand");
    assert_eq!(round.phase(), Phase::Finished);
    assert!(round.outcome().is_some());
}

/// Пока ходит игрок, DTO содержит ровно одну карту дилера;
/// после завершения — всю руку.
#[test]
fn dto_hides_dealer_hole_card() {
    let mut round = Round::new(Chips(1000));
    let mut rng = DeterministicRng::from_u64(5);

    apply(
        &mut round,
        &mut rng,
        &Command::PlaceBet(PlaceBetCommand { amount: Chips(100) }),
    )
    .unwrap();
    apply(&mut round, &mut rng, &Command::Deal).unwrap();

    let view = build_round_view(&round);
    assert!(view.dealer_card_hidden);
    assert_eq!(view.dealer_cards.len(), 1);
    assert_eq!(view.dealer_cards[0], round.dealer_hand.first_card().unwrap());
    assert_eq!(view.player_cards.len(), 2);
    // счёт по одной открытой карте, не по всей руке
    assert_eq!(view.visible_dealer_score, round.visible_dealer_score());

    apply(&mut round, &mut rng, &Command::Stand).unwrap();

    let view = build_round_view(&round);
    assert!(!view.dealer_card_hidden);
    assert_eq!(view.dealer_cards, round.dealer_hand.cards);
    assert_eq!(view.visible_dealer_score, round.dealer_score());
}

#[test]
fn round_errors_map_to_api_errors() {
    let mut round = Round::new(Chips(1000));
    let mut rng = DeterministicRng::from_u64(5);

    // hit до раздачи — ошибка правил, завёрнутая в ApiError::Round
    let err = apply(&mut round, &mut rng, &Command::Hit).unwrap_err();
    assert!(matches!(err, ApiError::Round(_)));

    // раунд не изменился
    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.balance(), Chips(1000));
}

#[test]
fn query_returns_round_view() {
    let round = Round::new(Chips(1000));
    let QueryResponse::Round(view) = handle_query(&round, &Query::GetRound);

    assert_eq!(view.phase, Phase::Betting);
    assert_eq!(view.balance, Chips(1000));
    assert!(view.player_cards.is_empty());
    assert!(view.dealer_cards.is_empty());
}

/// Команды и DTO гоняются по каналу как JSON без потерь.
#[test]
fn commands_and_views_roundtrip_through_json() {
    let cmd = Command::PlaceBet(PlaceBetCommand { amount: Chips(250) });
    let json = serde_json::to_string(&cmd).expect("serialize command");
    let parsed: Command = serde_json::from_str(&json).expect("deserialize command");
    assert_eq!(parsed, cmd);

    let mut round = Round::new(Chips(1000));
    let mut rng = DeterministicRng::from_u64(5);
    apply(&mut round, &mut rng, &cmd).unwrap();
    apply(&mut round, &mut rng, &Command::Deal).unwrap();

    let view = build_round_view(&round);
    let json = serde_json::to_string(&view).expect("serialize view");
    let parsed: RoundViewDto = serde_json::from_str(&json).expect("deserialize view");
    assert_eq!(parsed, view);
}
