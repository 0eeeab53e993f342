use super::*;

fn args(items: &[&str]) -> Vec<String> {
    return items.iter().map(|e| return e.to_string()).collect();
}

#[cfg(unix)]
#[tokio::test]
async fn it_captures_stdout_and_stderr() {
    let executor = ProcessExecutor::new("sh");
    let run = executor
        .capture(&args(&["-c", "echo out; echo err 1>&2"]))
        .await;

    assert_eq!(run.error, None);
    assert!(run.output.contains("out\n"));
    assert!(run.output.contains("err\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn it_reports_non_zero_exits_with_output() {
    let executor = ProcessExecutor::new("sh");
    let run = executor
        .capture(&args(&["-c", "echo partial; exit 3"]))
        .await;

    assert_eq!(run.output, "partial\n");
    assert_eq!(run.error, Some(CommandError::Execution { code: Some(3) }));
}

#[tokio::test]
async fn it_reports_missing_programs_as_spawn_errors() {
    let executor = ProcessExecutor::new("elmos-console-test-missing-binary");
    let run = executor.capture(&args(&["doctor"])).await;

    assert_eq!(run.output, "");
    match run.error {
        Some(CommandError::Spawn { program, .. }) => {
            assert_eq!(program, "elmos-console-test-missing-binary");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn it_fails_handoff_for_missing_programs() {
    let executor = ProcessExecutor::new("elmos-console-test-missing-binary");
    let res = executor.hand_off(&args(&["qemu", "run"])).await;

    assert!(matches!(res, Err(CommandError::Spawn { .. })));
}
