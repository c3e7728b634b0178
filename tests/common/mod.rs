#![allow(dead_code)]

use feasibility::domain::assumptions::{Assumptions, ProfitBasis};
use rand::Rng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn golden_payload() -> Value {
    json!({
        "revenue": {"sellable_area_m2": 3000, "exit_price_per_m2": 4500},
        "costs": {
            "build_cost_per_m2": 1800,
            "contingency_rate": 0.1,
            "professional_fees_rate": 0.1,
            "marketing_rate_on_gdv": 0.03
        },
        "profit_target": {"basis": "gdv", "target_rate": 0.2}
    })
}

/// Writes a JSON document to a temp file that lives as long as the handle.
pub fn write_payload(payload: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    serde_json::to_writer(&mut file, payload).expect("Failed to write payload");
    file.flush().expect("Failed to flush payload");
    file
}

/// Draws assumptions uniformly from inside every documented range.
pub fn random_assumptions(rng: &mut StdRng) -> Assumptions {
    let mut a = Assumptions::with_defaults(
        rng.gen_range(0.0..50_000.0),
        rng.gen_range(0.0..20_000.0),
        rng.gen_range(0.0..10_000.0),
    );
    a.costs.contingency_rate = rng.gen_range(0.0..=0.5);
    a.costs.professional_fees_rate = rng.gen_range(0.0..=0.5);
    a.costs.marketing_rate_on_gdv = rng.gen_range(0.0..=0.2);
    a.profit_target.target_rate = rng.gen_range(0.0..=0.5);
    a.profit_target.basis = if rng.gen_bool(0.5) {
        ProfitBasis::Gdv
    } else {
        ProfitBasis::Cost
    };
    a
}
