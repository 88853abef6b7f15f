// src/bin/blackjack_dev_cli.rs

use blackjack_engine::api::{apply, build_round_view, Command, PlaceBetCommand, RoundViewDto};
use blackjack_engine::domain::Chips;
use blackjack_engine::engine::Phase;
use blackjack_engine::infra::RngSeed;
use blackjack_engine::session::Session;

const ROUNDS_TO_PLAY: u64 = 3;
const BET: Chips = Chips(100);

fn main() {
    println!("blackjack_dev_cli: стартуем dev-CLI блэкджека…");

    // 1. Сессия с базовым seed из энтропии — каждый запуск со своими
    //    раздачами, но внутри запуска всё воспроизводимо из seed.
    let base_seed = RngSeed::from_u64(rand::random());
    let mut session = Session::new(1, base_seed);

    println!();
    println!("================ BLACKJACK SIMULATION =================");

    for round_no in 1..=ROUNDS_TO_PLAY {
        println!();
        println!("------ ROUND {round_no} | баланс {} ------", session.round.balance());

        play_round(&mut session);
        session.start_next_round();
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI. Итоговый баланс: {}", session.round.balance());
}

/// Один раунд базовым бот-сценарием: ставка 100, добор до 17, stand.
fn play_round(session: &mut Session) {
    let mut rng = session.round_rng();

    let bet = if session.round.balance() < BET {
        session.round.balance()
    } else {
        BET
    };

    let script = [Command::PlaceBet(PlaceBetCommand { amount: bet }), Command::Deal];
    for cmd in script {
        if let Err(err) = apply(&mut session.round, &mut rng, &cmd) {
            println!("[CLI] команда {cmd:?} отклонена: {err:?}");
            return;
        }
    }
    debug_print_view(&build_round_view(&session.round));

    // Бот: берём карты до 17 очков, дальше stand.
    while session.round.phase() == Phase::PlayerTurn {
        let cmd = if session.round.player_score() < 17 {
            Command::Hit
        } else {
            Command::Stand
        };
        println!("[BOT] {cmd:?}");
        if let Err(err) = apply(&mut session.round, &mut rng, &cmd) {
            println!("[CLI] команда {cmd:?} отклонена: {err:?}");
            return;
        }
        debug_print_view(&build_round_view(&session.round));
    }

    match session.round.outcome() {
        Some(outcome) => println!(
            "[CLI] исход: {outcome:?}, баланс после выплаты: {}",
            session.round.balance()
        ),
        None => println!("[CLI] раунд не завершён (так быть не должно)"),
    }
}

/// Печать видимого состояния раунда (как его видит игрок).
fn debug_print_view(view: &RoundViewDto) {
    let player: Vec<String> = view.player_cards.iter().map(|c| c.to_string()).collect();
    let mut dealer: Vec<String> = view.dealer_cards.iter().map(|c| c.to_string()).collect();
    if view.dealer_card_hidden {
        dealer.push("??".to_string());
    }

    println!(
        "  фаза {:?} | игрок [{}] = {} | дилер [{}] = {} | ставка {}",
        view.phase,
        player.join(" "),
        view.player_score,
        dealer.join(" "),
        view.visible_dealer_score,
        view.current_bet,
    );
}
