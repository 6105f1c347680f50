// tests/runner_recording.rs

use fdb_harness::command::CommandSpec;
use fdb_harness::config::{DEFAULT_INVOCATION, HarnessConfig};
use fdb_harness::errors::HarnessError;
use fdb_harness::exec::ProcessRunner;
use fdb_harness_test_utils::builders::{HarnessConfigBuilder, InvocationBuilder};
use fdb_harness_test_utils::fake_launcher::RecordingLauncher;
use fdb_harness_test_utils::init_tracing;

#[test]
fn configured_invocations_reach_launcher_in_name_order() {
    init_tracing();

    let cfg = HarnessConfigBuilder::new("./fdb")
        .with_invocation(
            "mismatch",
            InvocationBuilder::new()
                .flag("m", "1")
                .switch("z")
                .arg("barcodes.txt")
                .arg("r1.fastq")
                .build(),
        )
        .with_invocation("help", InvocationBuilder::new().switch("h").build())
        .build();

    let launcher = RecordingLauncher::new();
    let runner = ProcessRunner::with_launcher(launcher.clone());

    for (_name, spec) in cfg.commands() {
        runner.run(&spec).unwrap();
    }

    assert_eq!(
        launcher.snapshot(),
        vec![
            vec!["./fdb", "-h"],
            vec!["./fdb", "-m", "1", "-z", "barcodes.txt", "r1.fastq"],
        ]
    );
}

#[test]
fn default_invocation_launches_bare_executable() {
    init_tracing();

    let cfg = HarnessConfigBuilder::new("./fdb").build();
    let launcher = RecordingLauncher::new();
    let runner = ProcessRunner::with_launcher(launcher.clone());

    let spec = cfg.command_for(DEFAULT_INVOCATION).expect("default invocation");
    runner.run(&spec).unwrap();

    assert_eq!(launcher.snapshot(), vec![vec!["./fdb"]]);
}

#[test]
fn each_run_gets_its_own_handle() {
    init_tracing();

    let launcher = RecordingLauncher::new();
    let runner = ProcessRunner::with_launcher(launcher.clone());
    let spec = CommandSpec::new("/usr/bin/tool").flag("n", "5");

    let first = runner.run(&spec).unwrap();
    let second = runner.run(&spec).unwrap();

    assert_eq!((first, second), (1, 2));
    let launched = launcher.snapshot();
    assert_eq!(launched[0], launched[1]);
    assert_eq!(launched[0], vec!["/usr/bin/tool", "-n", "5"]);
}

#[test]
fn malformed_command_is_rejected_before_launch() {
    init_tracing();

    let launcher = RecordingLauncher::new();
    let runner = ProcessRunner::with_launcher(launcher.clone());
    let spec = CommandSpec::new("fdb").flag("o", "\"half quoted");

    match runner.run(&spec) {
        Err(HarnessError::MalformedCommandLine { line, .. }) => {
            assert_eq!(line, "fdb -o \"half quoted");
        }
        Err(e) => panic!("Expected MalformedCommandLine, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    assert!(launcher.snapshot().is_empty());
}

#[test]
fn cli_executable_replaces_configured_one_at_launch() {
    init_tracing();

    let raw = HarnessConfigBuilder::new("./fdb")
        .with_invocation("help", InvocationBuilder::new().switch("h").build())
        .raw();
    let cfg = HarnessConfig::resolve(Some("/opt/fdb/bin/fdb".into()), Some(raw)).unwrap();

    let launcher = RecordingLauncher::new();
    let runner = ProcessRunner::with_launcher(launcher.clone());
    runner.run(&cfg.command_for("help").unwrap()).unwrap();

    assert_eq!(launcher.snapshot(), vec![vec!["/opt/fdb/bin/fdb", "-h"]]);
}
