use std::fmt::Write;
use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use photoprod_core::rng::RngHandle;
use photoprod_recon::{reconstruct_reader, ReconConfig};

fn synthetic_run(events: usize) -> String {
    let mut text = String::new();
    text.push_str("CONFIG_OPT: 1 443211 0 0\nBEAM_1: 82 208 2875.0 0\nBEAM_2: 82 208 2875.0 0\n");
    for index in 0..events {
        let shift = (index % 97) as f64 * 0.003;
        writeln!(text, "EVENT: {index} 4 1").expect("format");
        writeln!(text, "VERTEX: 0. 0. 0. 0. 1 0 0 4").expect("format");
        for (px, py, pz, species) in [
            (0.31 + shift, -0.12, 1.4, 211),
            (-0.25, 0.4 - shift, -0.75, -211),
            (0.05, 0.22, 0.1 + shift, 211),
            (-0.18, -0.35, 2.2, -211),
        ] {
            writeln!(text, "TRACK: {species} 0 {px} {py} {pz} {index} 0 0 {species}")
                .expect("format");
        }
    }
    text
}

fn bench_ingest(c: &mut Criterion) {
    let input = synthetic_run(10_000);
    let config = ReconConfig::default();
    c.bench_function("reconstruct_10k_four_track_events", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(0);
            let run = reconstruct_reader(Cursor::new(input.as_bytes()), &mut rng, &config)
                .expect("reconstruct");
            black_box(run.result.n_events());
        });
    });
}

criterion_group!(benches, bench_ingest);
criterion_main!(benches);
