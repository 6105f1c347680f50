// tests/harness_run.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use fdb_harness::cli::CliArgs;
use fdb_harness::run;
use fdb_harness_test_utils::init_tracing;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn args(config: PathBuf) -> CliArgs {
    CliArgs {
        executable: None,
        config: Some(config),
        invocation: None,
        log_level: None,
        dry_run: false,
    }
}

#[tokio::test]
async fn dry_run_does_not_need_a_real_executable() {
    init_tracing();

    let file = config_file(
        r#"
[harness]
executable = "/definitely/not/here/fdb"

[invocation.mismatch]
flags = [{ name = "m", value = "1" }]
args = ["r1.fastq"]
"#,
    );

    let mut cli = args(file.path().to_path_buf());
    cli.dry_run = true;

    run(cli).await.unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn launches_every_configured_invocation() {
    init_tracing();

    let file = config_file(
        r#"
[harness]
executable = "/bin/echo"

[invocation.greet]
args = ["hello", "world"]

[invocation.noargs]
"#,
    );

    run(args(file.path().to_path_buf())).await.unwrap();
}

#[tokio::test]
async fn cli_executable_overrides_config_and_missing_binary_fails() {
    init_tracing();

    let file = config_file(
        r#"
[harness]
executable = "/bin/echo"
"#,
    );

    let mut cli = args(file.path().to_path_buf());
    cli.executable = Some("/definitely/not/here/fdb".into());

    let err = run(cli).await.unwrap_err();
    assert!(format!("{err:?}").contains("Executable not found"));
}

#[tokio::test]
async fn unknown_invocation_is_an_error() {
    init_tracing();

    let file = config_file(
        r#"
[harness]
executable = "/bin/echo"
"#,
    );

    let mut cli = args(file.path().to_path_buf());
    cli.invocation = Some("missing".into());

    let err = run(cli).await.unwrap_err();
    assert!(err.to_string().contains("unknown invocation 'missing'"));
}
