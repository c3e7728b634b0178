use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CONTINGENCY_RATE: f64 = 0.1;
pub const DEFAULT_PROFESSIONAL_FEES_RATE: f64 = 0.1;
pub const DEFAULT_MARKETING_RATE_ON_GDV: f64 = 0.03;
pub const DEFAULT_TARGET_RATE: f64 = 0.2;

/// What the target profit rate is applied to.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProfitBasis {
    /// Profit on Gross Development Value.
    #[default]
    Gdv,
    /// Profit on cost (TDC ex land).
    Cost,
}

impl ProfitBasis {
    pub const ALL: [&'static str; 2] = ["gdv", "cost"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfitBasis::Gdv => "gdv",
            ProfitBasis::Cost => "cost",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gdv" => Some(ProfitBasis::Gdv),
            "cost" => Some(ProfitBasis::Cost),
            _ => None,
        }
    }
}

impl fmt::Display for ProfitBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct RevenueInputs {
    pub sellable_area_m2: f64,
    pub exit_price_per_m2: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct CostInputs {
    pub build_cost_per_m2: f64,
    pub contingency_rate: f64,
    pub professional_fees_rate: f64,
    pub marketing_rate_on_gdv: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct ProfitTarget {
    pub basis: ProfitBasis,
    pub target_rate: f64,
}

/// The financial assumptions of a single appraisal.
///
/// A value of this type is only guaranteed to be within the documented
/// ranges once it has been through
/// [`FeasibilityEngine::validate`](crate::application::engine::FeasibilityEngine::validate)
/// or was produced by [`parse_payload`](crate::domain::validation::parse_payload).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct Assumptions {
    pub revenue: RevenueInputs,
    pub costs: CostInputs,
    pub profit_target: ProfitTarget,
}

impl Assumptions {
    /// Builds assumptions from the three base quantities, taking every rate
    /// and the profit basis from the defaults.
    pub fn with_defaults(
        sellable_area_m2: f64,
        exit_price_per_m2: f64,
        build_cost_per_m2: f64,
    ) -> Self {
        Self {
            revenue: RevenueInputs {
                sellable_area_m2,
                exit_price_per_m2,
            },
            costs: CostInputs {
                build_cost_per_m2,
                contingency_rate: DEFAULT_CONTINGENCY_RATE,
                professional_fees_rate: DEFAULT_PROFESSIONAL_FEES_RATE,
                marketing_rate_on_gdv: DEFAULT_MARKETING_RATE_ON_GDV,
            },
            profit_target: ProfitTarget {
                basis: ProfitBasis::default(),
                target_rate: DEFAULT_TARGET_RATE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_round_trips_through_strings() {
        for name in ProfitBasis::ALL {
            let basis = ProfitBasis::parse(name).unwrap();
            assert_eq!(basis.as_str(), name);
            assert_eq!(basis.to_string(), name);
        }
        assert_eq!(ProfitBasis::parse("GDV"), None);
        assert_eq!(ProfitBasis::parse("margin"), None);
    }

    #[test]
    fn test_basis_serialization() {
        let json = serde_json::to_string(&ProfitBasis::Cost).unwrap();
        assert_eq!(json, "\"cost\"");

        let basis: ProfitBasis = serde_json::from_str("\"gdv\"").unwrap();
        assert_eq!(basis, ProfitBasis::Gdv);
    }

    #[test]
    fn test_with_defaults() {
        let a = Assumptions::with_defaults(100.0, 2000.0, 900.0);
        assert_eq!(a.revenue.sellable_area_m2, 100.0);
        assert_eq!(a.costs.build_cost_per_m2, 900.0);
        assert_eq!(a.costs.contingency_rate, 0.1);
        assert_eq!(a.costs.professional_fees_rate, 0.1);
        assert_eq!(a.costs.marketing_rate_on_gdv, 0.03);
        assert_eq!(a.profit_target.basis, ProfitBasis::Gdv);
        assert_eq!(a.profit_target.target_rate, 0.2);
    }
}
