//! Throughput of the sparse transition on the prefill patterns and a few methuselahs

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use colored_life::{CellRegistry, Prefill, Preset, Rgb};

const SEED: u64 = 0x5EED;

/// Average milliseconds per generation and the final population
fn benchmark(mut registry: CellRegistry, generations: u32) -> (f64, usize) {
    let mut rng = StdRng::seed_from_u64(SEED);

    let start = Instant::now();
    for _ in 0..generations {
        registry.advance_generation(&mut rng);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms, registry.len())
}

fn main() {
    println!("=== Colored Life Sparse Engine Benchmark ===\n");

    let generations = 500;

    println!("{:>16} {:>10} {:>10} {:>12} {:>12}",
        "Seed", "Start", "End", "ms/gen", "gen/s");
    println!("{:-<64}", "");

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut cases: Vec<(String, CellRegistry)> = Prefill::all()
        .into_iter()
        .map(|prefill| {
            let mut registry = CellRegistry::new();
            prefill.fill(&mut registry, &mut rng);
            (prefill.name().to_owned(), registry)
        })
        .collect();

    for preset in [Preset::RPentomino, Preset::Acorn, Preset::GliderGun] {
        let pattern = preset.pattern();
        let mut registry = CellRegistry::new();
        pattern.place_centered(&mut registry, 0, 0, Rgb::random(&mut rng));
        cases.push((pattern.name.to_owned(), registry));
    }

    for (name, registry) in cases {
        let start_population = registry.len();
        let (ms, end_population) = benchmark(registry, generations);
        let per_sec = if ms > 0.0 { 1000.0 / ms } else { f64::INFINITY };
        println!(
            "{:>16} {:>10} {:>10} {:>12.3} {:>12.0}",
            name, start_population, end_population, ms, per_sec
        );
    }
}
