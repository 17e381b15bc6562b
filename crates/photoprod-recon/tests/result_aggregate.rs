use photoprod_recon::event::Event;
use photoprod_recon::ingest::RunMetadata;
use photoprod_recon::result::{collision_energy, SimulationResult};
use photoprod_recon::species::PROTON_MASS;
use photoprod_recon::track::Track;

fn metadata(channel: i64) -> RunMetadata {
    RunMetadata {
        channel_code: Some(channel),
        beam1_gamma: Some(2875.0),
        beam2_gamma: Some(2900.0),
    }
}

fn pion_event(scale: f64) -> Event {
    Event::from_ordered(vec![
        Track::from_species(0.3 * scale, 0.1, 0.4, 211),
        Track::from_species(-0.2, 0.2 * scale, -0.3, -211),
        Track::from_species(0.1, -0.4, 0.2 * scale, 211),
        Track::from_species(-0.1, 0.05, -0.6, -211),
    ])
}

#[test]
fn collision_energy_sums_both_beams() {
    let result = SimulationResult::aggregate(&metadata(443211), vec![pion_event(1.0)], PROTON_MASS)
        .expect("aggregate");
    let expected = PROTON_MASS * 2875.0 + PROTON_MASS * 2900.0;
    assert!((result.sqrt_s_nn() - expected).abs() < 1e-9);
    assert_eq!(result.sqrt_s_nn(), collision_energy(PROTON_MASS, 2875.0, 2900.0));
    assert_eq!(result.beam_gammas(), [2875.0, 2900.0]);
    assert_eq!(result.nucleon_mass(), PROTON_MASS);
}

#[test]
fn event_count_matches_event_list() {
    let events = vec![pion_event(1.0), pion_event(2.0), pion_event(3.0)];
    let result = SimulationResult::aggregate(&metadata(443211), events, PROTON_MASS).expect("aggregate");
    assert_eq!(result.n_events(), 3);
    assert_eq!(result.events().len(), 3);
    assert_eq!(result.total_masses().len(), 3);
    assert_eq!(result.transverse_momenta().len(), 3);
    assert_eq!(result.pair_masses().len(), 6);
    assert_eq!(result.pseudorapidities().len(), 3);
    let (first, second) = result.pair_mass_columns();
    assert_eq!(first.len(), 3);
    assert_eq!(second[1], result.events()[1].pair_masses()[1]);
    assert_eq!(result.labels().plain, "jpsi_4pi");
}

#[test]
fn unknown_channel_keeps_sentinel_labels() {
    let result = SimulationResult::aggregate(&metadata(1), Vec::new(), PROTON_MASS).expect("aggregate");
    assert!(result.labels().is_unknown());
    assert_eq!(result.channel_code(), 1);
    assert_eq!(result.n_events(), 0);
}

#[test]
fn missing_channel_is_a_hard_failure() {
    let metadata = RunMetadata {
        channel_code: None,
        ..metadata(0)
    };
    let err = SimulationResult::aggregate(&metadata, Vec::new(), PROTON_MASS).unwrap_err();
    assert_eq!(err.info().code, "missing-metadata");
    assert!(err.to_string().contains("CONFIG_OPT:"));
}
