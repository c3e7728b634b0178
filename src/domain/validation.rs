//! Input validation for appraisal requests.
//!
//! Validation is fail-fast: fields are checked in a fixed order (revenue,
//! costs, profit target) and the first violation is returned. Within a field
//! the checks run presence, JSON type, finiteness, then range.

use super::assumptions::{
    Assumptions, CostInputs, DEFAULT_CONTINGENCY_RATE, DEFAULT_MARKETING_RATE_ON_GDV,
    DEFAULT_PROFESSIONAL_FEES_RATE, DEFAULT_TARGET_RATE, ProfitBasis, ProfitTarget, RevenueInputs,
};
use miette::Diagnostic;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Required,
    Object,
    Number,
    Text,
    Finite,
    NonNegative,
    /// Closed interval.
    Range { min: f64, max: f64 },
    OneOf(&'static [&'static str]),
    /// The field is in range on its own but the figures derived from it
    /// would overflow.
    FiniteResult,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("is required"),
            Constraint::Object => f.write_str("must be an object"),
            Constraint::Number => f.write_str("must be a number"),
            Constraint::Text => f.write_str("must be a string"),
            Constraint::Finite => f.write_str("must be finite"),
            Constraint::NonNegative => f.write_str("must be >= 0"),
            Constraint::Range { min, max } => write!(f, "must be within [{min}, {max}]"),
            Constraint::OneOf(options) => write!(f, "must be one of: {}", options.join(", ")),
            Constraint::FiniteResult => {
                f.write_str("is too large for the derived figures to stay finite")
            }
        }
    }
}

/// A rejected request: which field, what was received, and why.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Serialize)]
#[error("`{field}` {constraint} (got {value})")]
#[diagnostic(
    code(feasibility::validation),
    help("fix the named field and resend the whole request; no figures are computed for invalid input")
)]
pub struct ValidationError {
    pub field: String,
    pub value: Value,
    #[serde(serialize_with = "serialize_constraint")]
    pub constraint: Constraint,
}

fn serialize_constraint<S>(constraint: &Constraint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(constraint)
}

impl ValidationError {
    pub fn new(field: impl Into<String>, value: Value, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            value,
            constraint,
        }
    }
}

/// JSON has no NaN or infinity, so those keep their textual form.
fn number_value(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(value.to_string()))
}

#[derive(Debug, Clone, Copy)]
enum Bounds {
    NonNegative,
    Within(f64, f64),
}

#[derive(Debug)]
struct NumberRule {
    field: &'static str,
    section: &'static str,
    name: &'static str,
    bounds: Bounds,
    default: Option<f64>,
}

impl NumberRule {
    fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new(
                self.field,
                number_value(value),
                Constraint::Finite,
            ));
        }
        match self.bounds {
            Bounds::NonNegative if value < 0.0 => Err(ValidationError::new(
                self.field,
                number_value(value),
                Constraint::NonNegative,
            )),
            Bounds::Within(min, max) if !(min..=max).contains(&value) => Err(
                ValidationError::new(self.field, number_value(value), Constraint::Range { min, max }),
            ),
            // Signed zero is normalised so `-0` never shows up in the output.
            _ => Ok(value + 0.0),
        }
    }
}

const SELLABLE_AREA: NumberRule = NumberRule {
    field: "revenue.sellable_area_m2",
    section: "revenue",
    name: "sellable_area_m2",
    bounds: Bounds::NonNegative,
    default: None,
};
const EXIT_PRICE: NumberRule = NumberRule {
    field: "revenue.exit_price_per_m2",
    section: "revenue",
    name: "exit_price_per_m2",
    bounds: Bounds::NonNegative,
    default: None,
};
const BUILD_COST: NumberRule = NumberRule {
    field: "costs.build_cost_per_m2",
    section: "costs",
    name: "build_cost_per_m2",
    bounds: Bounds::NonNegative,
    default: None,
};
const CONTINGENCY_RATE: NumberRule = NumberRule {
    field: "costs.contingency_rate",
    section: "costs",
    name: "contingency_rate",
    bounds: Bounds::Within(0.0, 0.5),
    default: Some(DEFAULT_CONTINGENCY_RATE),
};
const PROFESSIONAL_FEES_RATE: NumberRule = NumberRule {
    field: "costs.professional_fees_rate",
    section: "costs",
    name: "professional_fees_rate",
    bounds: Bounds::Within(0.0, 0.5),
    default: Some(DEFAULT_PROFESSIONAL_FEES_RATE),
};
const MARKETING_RATE: NumberRule = NumberRule {
    field: "costs.marketing_rate_on_gdv",
    section: "costs",
    name: "marketing_rate_on_gdv",
    bounds: Bounds::Within(0.0, 0.2),
    default: Some(DEFAULT_MARKETING_RATE_ON_GDV),
};
const TARGET_RATE: NumberRule = NumberRule {
    field: "profit_target.target_rate",
    section: "profit_target",
    name: "target_rate",
    bounds: Bounds::Within(0.0, 0.5),
    default: Some(DEFAULT_TARGET_RATE),
};

const BASIS_FIELD: &str = "profit_target.basis";

/// Largest GDV or build cost accepted. Every later figure is a bounded
/// combination of these two (at most 7.5 times the larger), so staying under
/// this keeps the whole appraisal finite.
pub const MAX_BASE_FIGURE: f64 = f64::MAX / 16.0;

/// Rejects assumptions whose GDV or build cost would not stay finite.
///
/// Runs after every per-field check and reports on the sellable area, the
/// quantity both products share.
fn check_scale(revenue: &RevenueInputs, costs: &CostInputs) -> Result<(), ValidationError> {
    let gdv = revenue.sellable_area_m2 * revenue.exit_price_per_m2;
    let build_cost = revenue.sellable_area_m2 * costs.build_cost_per_m2;
    if gdv <= MAX_BASE_FIGURE && build_cost <= MAX_BASE_FIGURE {
        Ok(())
    } else {
        Err(ValidationError::new(
            SELLABLE_AREA.field,
            number_value(revenue.sellable_area_m2),
            Constraint::FiniteResult,
        ))
    }
}

/// Checks already-typed assumptions for finiteness and ranges.
pub fn validate(assumptions: &Assumptions) -> Result<(), ValidationError> {
    let Assumptions {
        revenue,
        costs,
        profit_target,
    } = assumptions;

    // The basis is an enum here, so it cannot be out of domain.
    let checks = [
        (&SELLABLE_AREA, revenue.sellable_area_m2),
        (&EXIT_PRICE, revenue.exit_price_per_m2),
        (&BUILD_COST, costs.build_cost_per_m2),
        (&CONTINGENCY_RATE, costs.contingency_rate),
        (&PROFESSIONAL_FEES_RATE, costs.professional_fees_rate),
        (&MARKETING_RATE, costs.marketing_rate_on_gdv),
        (&TARGET_RATE, profit_target.target_rate),
    ];
    for (rule, value) in checks {
        rule.check(value)?;
    }
    check_scale(revenue, costs)
}

/// Turns a loosely-typed JSON payload into validated [`Assumptions`].
///
/// Missing rates and basis fall back to their defaults; the three base
/// quantities are required. Unknown fields are ignored. A `null` is treated
/// as absent.
pub fn parse_payload(payload: &Value) -> Result<Assumptions, ValidationError> {
    let root = payload
        .as_object()
        .ok_or_else(|| ValidationError::new("assumptions", payload.clone(), Constraint::Object))?;

    let revenue = RevenueInputs {
        sellable_area_m2: read_number(root, &SELLABLE_AREA)?,
        exit_price_per_m2: read_number(root, &EXIT_PRICE)?,
    };
    let costs = CostInputs {
        build_cost_per_m2: read_number(root, &BUILD_COST)?,
        contingency_rate: read_number(root, &CONTINGENCY_RATE)?,
        professional_fees_rate: read_number(root, &PROFESSIONAL_FEES_RATE)?,
        marketing_rate_on_gdv: read_number(root, &MARKETING_RATE)?,
    };
    let profit_target = ProfitTarget {
        basis: read_basis(root)?,
        target_rate: read_number(root, &TARGET_RATE)?,
    };

    check_scale(&revenue, &costs)?;

    Ok(Assumptions {
        revenue,
        costs,
        profit_target,
    })
}

fn lookup<'a>(
    root: &'a Map<String, Value>,
    section: &'static str,
    name: &'static str,
) -> Result<Option<&'a Value>, ValidationError> {
    match root.get(section) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(fields)) => Ok(fields.get(name).filter(|v| !v.is_null())),
        Some(other) => Err(ValidationError::new(
            section,
            other.clone(),
            Constraint::Object,
        )),
    }
}

fn read_number(root: &Map<String, Value>, rule: &NumberRule) -> Result<f64, ValidationError> {
    let value = match lookup(root, rule.section, rule.name)? {
        Some(value) => value,
        None => {
            return rule
                .default
                .ok_or_else(|| ValidationError::new(rule.field, Value::Null, Constraint::Required));
        }
    };
    let number = value
        .as_f64()
        .ok_or_else(|| ValidationError::new(rule.field, value.clone(), Constraint::Number))?;
    rule.check(number)
}

fn read_basis(root: &Map<String, Value>) -> Result<ProfitBasis, ValidationError> {
    let Some(value) = lookup(root, "profit_target", "basis")? else {
        return Ok(ProfitBasis::default());
    };
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::new(BASIS_FIELD, value.clone(), Constraint::Text))?;
    ProfitBasis::parse(text).ok_or_else(|| {
        ValidationError::new(
            BASIS_FIELD,
            value.clone(),
            Constraint::OneOf(&ProfitBasis::ALL),
        )
    })
}
