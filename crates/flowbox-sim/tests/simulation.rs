use flowbox_onboarding::{Destination, UserRole};
use flowbox_sim::{run_simulator, run_walkthrough, OperationDistribution, SimulatorConfig};
use flowbox_workspace::FlowboxConfig;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn edge_heavy_run_keeps_invariants() {
    let config = SimulatorConfig {
        operation_distribution: OperationDistribution {
            valid_ops: 0.3,
            edge_cases: 0.6,
            invalid_ops: 0.1,
        },
        stop_on_first_violation: false,
        ..SimulatorConfig::default().with_seed(99).with_operations(3_000)
    };
    let report = run_simulator(config).unwrap();
    assert!(report.passed(), "{}", report.generate_text());
    assert!(report.stats.operations_by_type.contains_key("MoveItem"));
}

#[test]
fn report_serializes_to_json() {
    let report = run_simulator(SimulatorConfig::default().with_operations(50)).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["config"]["seed"], 42);
    assert_eq!(value["stats"]["total_operations"], 50);
    assert!(value["violations"].as_array().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn student_walkthrough_lands_on_study_page() {
    let report = run_walkthrough(UserRole::Student, &FlowboxConfig::new().with_seed(1))
        .await
        .unwrap();
    assert_eq!(report.visits, vec![Destination::Student]);
    assert_eq!(report.workspace.role, UserRole::Student);
    assert_eq!(report.workspace.item_count, 5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_any_seed_passes(seed in any::<u64>()) {
        let report = run_simulator(SimulatorConfig::default().with_seed(seed).with_operations(400)).unwrap();
        prop_assert!(report.passed(), "{}", report.generate_text());
        prop_assert_eq!(report.stats.total_operations, 400);
        prop_assert_eq!(
            report.stats.successful_operations + report.stats.failed_operations,
            400
        );
    }
}
