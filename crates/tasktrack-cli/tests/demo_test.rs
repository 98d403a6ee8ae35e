use anyhow::Result;
use tasktrack_testing::TestWorld;
use tasktrack_testing::assertions::assert_json_texts;

#[test]
fn test_demo_plain_output() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["demo"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("Add \"Buy milk\""));
    assert!(stdout.contains("Alert: Task cannot be empty"));
    assert!(stdout.contains("Final state"));
    assert!(stdout.contains("✓ Buy milk"));
    assert!(stdout.contains("• Walk the dog"));
    Ok(())
}

#[test]
fn test_demo_json_output() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["demo", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_json_texts(&json, "/final_state/pending", &["Walk the dog"])?;
    assert_json_texts(&json, "/final_state/completed", &["Buy milk"])?;

    let steps = json["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[2]["alert"], "Task cannot be empty");
    assert_eq!(steps[5]["screen"], "CompletedTasks");
    Ok(())
}

#[test]
fn test_demo_writes_log_file() -> Result<()> {
    let world = TestWorld::new().with_env("TASKTRACK_LOG", "debug");

    let result = world.run(&["demo"])?;

    assert!(result.success());
    let log = std::fs::read_to_string(world.data_dir().join("tasktrack.log"))?;
    assert!(log.contains("task added"));
    assert!(log.contains("task completed"));
    Ok(())
}
