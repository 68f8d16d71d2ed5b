//! Binary target for the draw chaos simulation.

use roulette_sim::{DrawWorkload, SimulationBuilder};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();

    let local_runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to build local runtime");

    let report = local_runtime.block_on(async move {
        SimulationBuilder::new()
            .workload(DrawWorkload::new(100..400))
            .default_invariants()
            .set_iterations(200)
            .run()
            .await
    });

    report.eprint();
    if !report.is_success() {
        std::process::exit(1);
    }
}
