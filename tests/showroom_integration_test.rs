use std::process::Command;

const EXPECTED_STDOUT: &str = "\
Humidity has been changed to 10
AC will shutdown in 25 minutes
Turn on AC
Mode has been changed
Humidity has been changed to 13
Fan speed changed
AC will shutdown in 60 minutes
ExpensiveAirConditioner price =  1950000
DiscountedAirConditioner price =  1462500.0
Humidity has been changed to 5
";

fn solid_ac() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_solid-ac"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_prints_fixed_sequence() {
    let output = solid_ac().output().expect("failed to run solid-ac");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_STDOUT);
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = solid_ac()
        .arg("--verbose")
        .output()
        .expect("failed to run solid-ac");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_STDOUT);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Starting showroom demo"));
    assert!(stderr.contains("Showroom demo finished"));
}

#[test]
fn test_json_log_format() {
    let output = solid_ac()
        .args(["--verbose", "--log-format", "json"])
        .output()
        .expect("failed to run solid-ac");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_STDOUT);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .map(|line| serde_json::from_str(line).expect("log line is not JSON"))
        .collect();

    assert!(events
        .iter()
        .any(|e| e["fields"]["message"] == "Starting showroom demo"));
    assert!(events.iter().any(|e| {
        e["fields"]["message"] == "Applying discount" && e["fields"]["list_price"] == 1_950_000
    }));
}

#[test]
fn test_quiet_by_default() {
    let output = solid_ac().output().expect("failed to run solid-ac");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_rejects_unknown_flag() {
    let output = solid_ac()
        .arg("--no-such-flag")
        .output()
        .expect("failed to run solid-ac");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
