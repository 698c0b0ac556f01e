//! Scenario: output changes on purpose and the developer accepts it.

use crate::common::*;

#[test]
fn scenario_accept_intended_change() {
    let env = TestEnv::with_build_script(TOP_LEVEL_ARTIFACT_BUILD_SCRIPT);
    env.write_project_file("test/gold/y.test.output", "old\n");
    env.write_project_file("src/y.txt", "new\n");

    // Step 1: the gold file is stale
    let result = env.run(&["test"]);
    assert_eq!(result.exit_code, 1, "{}", result.combined_output());

    // Step 2: accept the new output
    let result = env.run(&["update-gold"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_project_file("test/gold/y.test.output"), "new\n");

    // Step 3: the suite is green again
    let result = env.run(&["test"]);
    assert!(result.success, "{}", result.combined_output());
}
