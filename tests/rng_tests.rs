//! RNG tests for blackjack-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после тасовки
//! - корректное формирование RngSeed и hash-reseeding на раунд
//! - работу Deck + shuffle + RandomSource

use blackjack_engine::domain::deck::Deck;
use blackjack_engine::engine::RandomSource;
use blackjack_engine::infra::{DeterministicRng, RngSeed, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_u64(123);
    let mut r2 = DeterministicRng::from_u64(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_u64(111);
    let mut r2 = DeterministicRng::from_u64(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — no duplicate cards after shuffle
//
#[test]
fn shuffle_produces_no_duplicates() {
    let mut rng = DeterministicRng::from_u64(555);

    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let mut sorted = deck.cards.clone();
    sorted.sort_by_key(|c| c.to_string());
    sorted.dedup();

    assert_eq!(sorted.len(), 52, "Shuffled deck must contain 52 unique cards");
}

//
// TEST 4 — Deck + RandomSource: shuffled deck differs from fresh order
//
#[test]
fn deck_shuffle_works() {
    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_u64(999);

    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.cards.len(), 52);
    assert_ne!(deck.cards, Deck::standard_52().cards);
}

//
// TEST 5 — two independently shuffled decks almost surely differ
//          (вероятностная проверка равномерной тасовки, sanity only)
//
#[test]
fn independent_system_shuffles_differ() {
    let mut rng = SystemRng;

    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();
    rng.shuffle(&mut a.cards);
    rng.shuffle(&mut b.cards);

    assert_ne!(a.cards, b.cards, "52! permutations — совпадение практически невозможно");
}

//
// TEST 6 — RngSeed hash pipeline changes per round and per session
//
#[test]
fn rngseed_derive_changes_seed() {
    let base = RngSeed::from_u64(777);

    let s1 = base.derive(1, 0);
    let s2 = base.derive(1, 1);
    assert_ne!(s1, s2, "Different round indexes must produce different seeds");

    let s3 = base.derive(2, 0);
    assert_ne!(s1, s3, "Different session_id must produce new seed");
}

//
// TEST 7 — RngSeed → DeterministicRng → shuffle is deterministic
//
#[test]
fn rngseed_deterministic_shuffle() {
    let seed = RngSeed::from_u64(123);

    let mut r1 = seed.to_rng();
    let mut r2 = seed.to_rng();

    let mut a = (0..20).collect::<Vec<u32>>();
    let mut b = (0..20).collect::<Vec<u32>>();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b);
}

//
// TEST 8 — shuffle on empty slice must not crash
//
#[test]
fn shuffle_empty_slice_ok() {
    let mut rng = DeterministicRng::from_u64(42);
    let mut arr: Vec<u32> = vec![];
    rng.shuffle(&mut arr);
    assert!(arr.is_empty());
}

//
// TEST 9 — shuffle on 1-element slice must remain the same
//
#[test]
fn shuffle_one_element_ok() {
    let mut rng = DeterministicRng::from_u64(42);
    let mut arr = vec![123];
    rng.shuffle(&mut arr);
    assert_eq!(arr, vec![123]);
}

//
// TEST 10 — 1,000 shuffles must never panic
//
#[test]
fn stress_shuffle_many_times() {
    let mut rng = DeterministicRng::from_u64(77777);

    for _ in 0..1000 {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);

        assert_eq!(deck.cards.len(), 52);
    }
}
