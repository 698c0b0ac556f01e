//! Scenario: a change breaks one test, the developer fixes it.

use crate::common::*;

#[test]
fn scenario_break_then_fix() {
    let env = TestEnv::new();
    env.write_project_file("test/a/gold/x.output", "42\n");
    env.write_project_file("src/x.output", "42\n");

    // Step 1: everything matches
    let result = env.run(&["test"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("OK 1 gold file matched"));

    // Step 2: a source change produces a different output
    env.write_project_file("src/x.output", "43\n");
    let result = env.run(&["test"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("FAILED 1 of 1 gold file differ"));
    assert!(result.stdout.contains("test/a/gold/x.output (mismatch)"));

    // Step 3: the fix restores the expected output
    env.write_project_file("src/x.output", "42\n");
    let result = env.run(&["test"]);
    assert!(result.success, "{}", result.combined_output());

    // Step 4: clean removes the build tree
    let result = env.run(&["clean"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(!env.project_file_exists("build"));
}
