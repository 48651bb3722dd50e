use std::collections::BTreeMap;

use racing_suits_engine::deck::{DrawSource, Shoe};
use racing_suits_engine::rng::SeededRng;
use racing_suits_engine::suits::{all_suits, Suit};

fn counts(draws: &[Suit]) -> BTreeMap<Suit, usize> {
    let mut map = BTreeMap::new();
    for s in draws {
        *map.entry(*s).or_insert(0) += 1;
    }
    map
}

#[test]
fn each_load_is_a_permutation_of_the_multiset() {
    let mut shoe = Shoe::new(&all_suits(), 3, SeededRng::new("loads")).unwrap();
    assert_eq!(shoe.capacity(), 12);
    for _ in 0..5 {
        let load: Vec<Suit> = (0..12).map(|_| shoe.draw()).collect();
        let c = counts(&load);
        assert_eq!(c.len(), 4);
        assert!(c.values().all(|n| *n == 3));
        assert_eq!(shoe.remaining(), 0);
    }
}

#[test]
fn empty_shoe_reshuffles_on_next_draw() {
    let mut shoe = Shoe::new(&[Suit::Hearts, Suit::Clubs], 2, SeededRng::new("refill")).unwrap();
    for _ in 0..4 {
        shoe.draw();
    }
    assert_eq!(shoe.remaining(), 0);
    shoe.draw();
    assert_eq!(shoe.remaining(), 3);
}

#[test]
fn loads_differ_from_one_another() {
    let mut shoe = Shoe::new(&all_suits(), 13, SeededRng::new("independent")).unwrap();
    let loads: Vec<Vec<Suit>> = (0..4)
        .map(|_| (0..52).map(|_| shoe.draw()).collect())
        .collect();
    assert!(loads.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn manual_reset_restores_a_full_load() {
    let mut shoe = Shoe::new(&all_suits(), 13, SeededRng::new("reset")).unwrap();
    for _ in 0..20 {
        shoe.draw();
    }
    shoe.reset();
    assert_eq!(shoe.remaining(), 52);
}
