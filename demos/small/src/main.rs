//! small — smallest example for the liftsim elevator simulator.
//!
//! Simulates a 10-floor office building with 2 cars serving 40 randomly
//! generated passenger trips.  Swap the constants (and the policy) to
//! explore other buildings; the same seed always reproduces the same run.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_car::DoorState;
use lift_core::{BuildingConfig, SimConfig, SimRng, Tick};
use lift_dispatch::ScanPolicy;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT: u32 = 10;
const CAR_COUNT: usize = 2;
const CAR_CAPACITY: usize = 6;
const PASSENGER_COUNT: usize = 40;
const ARRIVAL_WINDOW_TICKS: u64 = 60; // arrivals spread over the first 60 ticks
const TOTAL_TICKS: u64 = 400;
const SEED: u64 = 42;
const OUTPUT_INTERVAL_TICKS: u64 = 1;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== small — liftsim elevator simulator ===");
    println!("Floors: {FLOOR_COUNT}  |  Cars: {CAR_COUNT}  |  Passengers: {PASSENGER_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Sim config and building.
    let building = BuildingConfig {
        floor_count: FLOOR_COUNT,
        car_count: CAR_COUNT,
        car_capacity: CAR_CAPACITY,
    };
    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };

    // 2. Build the sim with the SCAN policy.
    let mut sim = SimBuilder::new(building, config, ScanPolicy).build()?;

    // 3. Generate random traffic: uniform origin/destination pairs over a
    //    seeded RNG, arrivals spread across the opening window.
    let mut rng = SimRng::new(SEED);
    for _ in 0..PASSENGER_COUNT {
        let origin = rng.gen_range(0..FLOOR_COUNT);
        let destination = loop {
            let floor = rng.gen_range(0..FLOOR_COUNT);
            if floor != origin {
                break floor;
            }
        };
        let arrival = Tick(rng.gen_range(0..ARRIVAL_WINDOW_TICKS));
        sim.push_request(origin, destination, arrival)?;
    }
    println!("Generated {PASSENGER_COUNT} passenger requests over {ARRIVAL_WINDOW_TICKS} ticks");

    // 4. Set up output.
    std::fs::create_dir_all("output/small")?;
    let writer = CsvWriter::new(Path::new("output/small"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let stats = obs.stats();
    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), TOTAL_TICKS);
    println!("  delivered : {} / {}", stats.delivered(), PASSENGER_COUNT);
    println!("  mean trip : {:.1} ticks", stats.mean_ticks());
    println!("  max trip  : {} ticks", stats.max_ticks());
    if !sim.exhausted() {
        println!("  WARNING: requests still outstanding — raise TOTAL_TICKS");
    }
    println!();

    // 7. Final fleet table.
    println!("{:<8} {:<8} {:<8} {:<8}", "Car", "Floor", "Heading", "Door");
    println!("{}", "-".repeat(34));
    for car in &sim.cars {
        println!(
            "{:<8} {:<8} {:<8} {:<8}",
            car.id().0,
            car.floor(),
            car.heading().to_string(),
            match car.door() {
                DoorState::Open => "open",
                DoorState::Closed => "closed",
            },
        );
    }

    Ok(())
}
