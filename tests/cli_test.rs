use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.arg("tests/fixtures/golden.json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output)?;

    assert_eq!(json["gdv"], 13_500_000.0);
    assert_eq!(json["tdc"], 6_885_000.0);
    assert_eq!(json["profit"], 2_700_000.0);
    assert_eq!(json["profit_margin"], 0.2);
    assert_eq!(json["residual_land_value"], 3_915_000.0);
    assert_eq!(json["audit"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["audit"][0]["key"], "revenue.gdv");
    assert_eq!(
        json["audit"][0]["formula"],
        "sellable_area_m2 × exit_price_per_m2"
    );

    Ok(())
}

#[test]
fn test_cli_reads_stdin() {
    let mut payload = common::golden_payload();
    payload["profit_target"]["basis"] = "cost".into();

    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.write_stdin(payload.to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"residual_land_value\": 5238000.0"))
        .stdout(predicate::str::contains("\"profit\": 1377000.0"));
}

#[test]
fn test_cli_dash_means_stdin() {
    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.arg("-").write_stdin(common::golden_payload().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"gdv\": 13500000.0"));
}

#[test]
fn test_cli_csv_audit() {
    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.arg("tests/fixtures/golden.json").args(["--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("section,key,label,value,formula"))
        .stdout(predicate::str::contains("Costs,costs.marketing,Marketing,405000"))
        .stdout(predicate::str::contains(
            "Residual Land Value,land.residual_land_value,Residual land value,3915000",
        ));
}

#[test]
fn test_cli_summary() {
    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.arg("tests/fixtures/golden.json").args(["--format", "summary"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "gdv,tdc,profit,profit_margin,residual_land_value",
        ))
        .stdout(predicate::str::contains("0.2"))
        .stdout(predicate::str::contains("audit").not());
}

#[test]
fn test_cli_format_from_env() {
    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.arg("tests/fixtures/golden.json")
        .env("FEASIBILITY_FORMAT", "summary");

    cmd.assert().success().stdout(predicate::str::starts_with(
        "gdv,tdc,profit,profit_margin,residual_land_value",
    ));
}

#[test]
fn test_cli_applies_default_rates() {
    let payload = serde_json::json!({
        "revenue": {"sellable_area_m2": 3000, "exit_price_per_m2": 4500},
        "costs": {"build_cost_per_m2": 1800}
    });
    let file = common::write_payload(&payload);

    let mut cmd = Command::new(cargo_bin!("feasibility"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"residual_land_value\": 3915000.0"));
}
