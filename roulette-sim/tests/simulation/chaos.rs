//! Full chaos runs with every built-in invariant.

use roulette_sim::{
    DrawWorkload, PickerOp, SimulationBuilder, SimulationReport, WeightedGenerator,
};

fn run_simulation(builder: SimulationBuilder) -> SimulationReport {
    let local_runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to build local runtime");

    local_runtime.block_on(async move { builder.run().await })
}

fn assert_simulation_success(report: &SimulationReport) {
    if !report.seeds_failing.is_empty() {
        panic!(
            "Simulation had {} failing seeds: {:?}\n{}",
            report.seeds_failing.len(),
            report.seeds_failing,
            report
        );
    }
}

#[test]
fn test_draw_chaos_many_seeds() {
    let report = run_simulation(
        SimulationBuilder::new()
            .workload(DrawWorkload::new(50..250))
            .default_invariants()
            .set_iterations(60),
    );

    assert_simulation_success(&report);
    assert_eq!(report.iterations, 60);
    assert!(report.metrics.spins > 0);
    assert!(report.metrics.invariant_checks >= report.metrics.operations);
}

#[test]
fn test_spin_only_workload_exhausts_pools() {
    let generator = WeightedGenerator::new().with_operation(PickerOp::Spin, 1.0);
    let report = run_simulation(
        SimulationBuilder::new()
            .workload(DrawWorkload::with_generator(200..201, generator))
            .default_invariants()
            .set_iterations(10),
    );

    assert_simulation_success(&report);
    // Capacities stay below 64, so 200 spins always hit an exhausted pool.
    assert!(report.metrics.spins < report.metrics.operations);
}

#[test]
fn test_interrupt_heavy_workload() {
    let generator = WeightedGenerator::new()
        .with_operation(PickerOp::SpinAndInterrupt, 4.0)
        .with_operation(PickerOp::Reset, 1.0);
    let report = run_simulation(
        SimulationBuilder::new()
            .workload(DrawWorkload::with_generator(100..150, generator).named("interrupts"))
            .default_invariants()
            .set_iterations(20),
    );

    assert_simulation_success(&report);
}

#[test]
fn test_violations_are_reported_with_seed() {
    let report = run_simulation(
        SimulationBuilder::new()
            .workload(DrawWorkload::new(20..40))
            .invariant_fn("never_spin", |view, _time| match view.op {
                PickerOp::Spin | PickerOp::SpinAndInterrupt => Err("spun".to_string()),
                _ => Ok(()),
            })
            .set_debug_seeds(vec![11, 12, 13])
            .set_iterations(3),
    );

    assert_eq!(report.seeds_used, vec![11, 12, 13]);
    assert_eq!(report.failed_runs, 3);
    assert_eq!(report.seeds_failing, vec![11, 12, 13]);
    assert!(report.failures[0].error.contains("never_spin"));
    assert!(report.to_string().contains("Faulty seeds"));
}

#[test]
fn test_no_workloads_runs_nothing() {
    let report = run_simulation(SimulationBuilder::new().set_iterations(5));
    assert_eq!(report.iterations, 0);
}
