use std::collections::BTreeSet;

use photoprod_core::rng::RngHandle;
use photoprod_recon::event::Event;
use photoprod_recon::track::{FourVector, Track};
use proptest::prelude::*;

fn four_pions() -> Vec<Track> {
    vec![
        Track::from_species(0.31, -0.12, 1.40, 211),
        Track::from_species(-0.25, 0.40, -0.75, -211),
        Track::from_species(0.05, 0.22, 0.10, 211),
        Track::from_species(-0.18, -0.35, 2.20, -211),
    ]
}

#[test]
fn two_track_event_has_single_pair_equal_to_total() {
    let tracks = vec![
        Track::from_species(0.5, 0.0, 0.3, 13),
        Track::from_species(-0.5, 0.1, -0.2, -13),
    ];
    let mut rng = RngHandle::from_seed(3);
    let event = Event::reconstruct(tracks, &mut rng).expect("reconstruct");
    assert_eq!(event.pair_masses().len(), 1);
    assert!((event.pair_masses()[0] - event.invariant_mass()).abs() < 1e-12);
    assert_eq!(event.pseudorapidities().len(), 2);
}

#[test]
fn ordered_fixture_keeps_order_and_tolerates_single_track() {
    let tracks = four_pions();
    let event = Event::from_ordered(tracks.clone());
    assert_eq!(event.tracks(), tracks.as_slice());
    let single = Event::from_ordered(vec![tracks[0].clone()]);
    assert!(single.pair_masses().is_empty());
    let mut rng = RngHandle::from_seed(3);
    assert!(Event::reconstruct(vec![tracks[0].clone()], &mut rng).is_err());
}

#[test]
fn four_track_event_has_two_pairs() {
    let mut rng = RngHandle::from_seed(11);
    let event = Event::reconstruct(four_pions(), &mut rng).expect("reconstruct");
    assert_eq!(event.len(), 4);
    assert_eq!(event.pair_masses().len(), 2);
    let tracks = event.tracks();
    let first = (tracks[0].momentum + tracks[1].momentum).invariant_mass();
    let second = (tracks[2].momentum + tracks[3].momentum).invariant_mass();
    assert_eq!(event.pair_masses(), &[first, second]);
}

#[test]
fn three_track_event_pairs_only_the_leading_tracks() {
    let mut tracks = four_pions();
    tracks.pop();
    let event = Event::from_ordered(tracks);
    assert_eq!(event.pair_masses().len(), 1);
}

#[test]
fn pseudorapidities_follow_shuffled_order() {
    let mut rng = RngHandle::from_seed(5);
    let event = Event::reconstruct(four_pions(), &mut rng).expect("reconstruct");
    let expected: Vec<f64> = event.tracks().iter().map(|t| t.pseudorapidity).collect();
    assert_eq!(event.pseudorapidities(), expected);
}

#[test]
fn fewer_than_two_tracks_is_rejected() {
    let mut rng = RngHandle::from_seed(1);
    let err = Event::reconstruct(vec![Track::new(1.0, 0.0, 0.0, 0.0)], &mut rng).unwrap_err();
    assert_eq!(err.info().code, "event-too-few-tracks");
    assert!(Event::reconstruct(Vec::new(), &mut rng).is_err());
}

#[test]
fn same_seed_gives_same_pairing() {
    let mut rng_a = RngHandle::from_seed(99);
    let mut rng_b = RngHandle::from_seed(99);
    for _ in 0..20 {
        let a = Event::reconstruct(four_pions(), &mut rng_a).expect("a");
        let b = Event::reconstruct(four_pions(), &mut rng_b).expect("b");
        assert_eq!(a.pair_masses(), b.pair_masses());
    }
}

#[test]
fn shared_generator_explores_every_position() {
    let mut rng = RngHandle::from_seed(2024);
    let marker = four_pions()[0].momentum.px;
    let mut positions = BTreeSet::new();
    for _ in 0..200 {
        let event = Event::reconstruct(four_pions(), &mut rng).expect("reconstruct");
        let index = event
            .tracks()
            .iter()
            .position(|t| t.momentum.px == marker)
            .expect("marker track present");
        positions.insert(index);
    }
    assert_eq!(positions.len(), 4);
}

proptest! {
    #[test]
    fn total_mass_is_permutation_invariant(
        momenta in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0, -5.0f64..5.0), 4),
        seed in any::<u64>(),
    ) {
        let tracks: Vec<Track> = momenta
            .iter()
            .map(|&(px, py, pz)| Track::from_species(px, py, pz, 211))
            .collect();
        let direct: FourVector = tracks.iter().sum();
        let mut rng = RngHandle::from_seed(seed);
        let event = Event::reconstruct(tracks, &mut rng).unwrap();
        let t = event.tracks();
        let via_pairs = (t[0].momentum + t[1].momentum) + (t[2].momentum + t[3].momentum);
        let tolerance = 1e-9 * (1.0 + direct.e * direct.e);
        prop_assert!((direct.mass_squared() - via_pairs.mass_squared()).abs() <= tolerance);
        prop_assert!((event.total_momentum().mass_squared() - direct.mass_squared()).abs() <= tolerance);
        prop_assert!((event.transverse_momentum() - direct.transverse_momentum()).abs() <= 1e-9);
    }
}
