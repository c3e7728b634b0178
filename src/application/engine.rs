use crate::domain::assumptions::{Assumptions, ProfitBasis};
use crate::domain::output::{AuditTrail, Output, keys, sections};
use crate::domain::validation::{self, ValidationError};
use serde_json::Value;

/// The residual-land-value calculator.
///
/// `FeasibilityEngine` holds no state: every call reads only its argument and
/// allocates only its own [`Output`], so a single instance can be shared
/// freely across threads and tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeasibilityEngine;

impl FeasibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Checks finiteness and ranges of typed assumptions, failing on the
    /// first violation.
    pub fn validate(&self, assumptions: Assumptions) -> Result<Assumptions, ValidationError> {
        validation::validate(&assumptions)?;
        Ok(assumptions)
    }

    /// Validates a raw JSON request and appraises it.
    pub fn appraise_payload(&self, payload: &Value) -> Result<Output, ValidationError> {
        let assumptions = validation::parse_payload(payload)?;
        Ok(self.compute(&assumptions))
    }

    /// Validates typed assumptions and appraises them.
    pub fn appraise(&self, assumptions: Assumptions) -> Result<Output, ValidationError> {
        let assumptions = self.validate(assumptions)?;
        Ok(self.compute(&assumptions))
    }

    /// Runs the residual appraisal on already-validated assumptions.
    ///
    /// Each figure is recorded on the audit trail at the moment it is
    /// computed, so values and formulas cannot drift apart. Total over the
    /// validated domain: a zero GDV or TDC yields a zero margin, and a
    /// negative residual land value is a valid result.
    pub fn compute(&self, assumptions: &Assumptions) -> Output {
        let revenue = &assumptions.revenue;
        let costs = &assumptions.costs;
        let target = &assumptions.profit_target;
        let mut audit = AuditTrail::new();

        let gdv = audit.record(
            sections::REVENUE,
            keys::GDV,
            "Gross Development Value (GDV)",
            "sellable_area_m2 × exit_price_per_m2",
            revenue.sellable_area_m2 * revenue.exit_price_per_m2,
        );

        let build_cost = audit.record(
            sections::COSTS,
            keys::BUILD_COST,
            "Build cost",
            "sellable_area_m2 × build_cost_per_m2",
            revenue.sellable_area_m2 * costs.build_cost_per_m2,
        );
        let contingency = audit.record(
            sections::COSTS,
            keys::CONTINGENCY,
            "Contingency",
            "build_cost × contingency_rate",
            build_cost * costs.contingency_rate,
        );
        let professional_fees = audit.record(
            sections::COSTS,
            keys::PROFESSIONAL_FEES,
            "Professional fees",
            "build_cost × professional_fees_rate",
            build_cost * costs.professional_fees_rate,
        );
        // Marketing is charged on revenue, not on build cost.
        let marketing = audit.record(
            sections::COSTS,
            keys::MARKETING,
            "Marketing",
            "gdv × marketing_rate_on_gdv",
            gdv * costs.marketing_rate_on_gdv,
        );
        let tdc = audit.record(
            sections::COSTS,
            keys::TDC,
            "Total Development Cost (ex land)",
            "build_cost + contingency + professional_fees + marketing",
            build_cost + contingency + professional_fees + marketing,
        );

        let (target_base, target_formula) = match target.basis {
            ProfitBasis::Gdv => (gdv, "gdv × target_rate"),
            ProfitBasis::Cost => (tdc, "tdc × target_rate"),
        };
        let target_profit = audit.record(
            sections::PROFIT_TARGET,
            keys::TARGET_PROFIT,
            "Target profit",
            target_formula,
            target_base * target.target_rate,
        );

        let residual_land_value = audit.record(
            sections::RESIDUAL_LAND_VALUE,
            keys::RESIDUAL_LAND_VALUE,
            "Residual land value",
            "gdv − tdc − target_profit",
            gdv - tdc - target_profit,
        );

        // Recomputed from the reporting identity rather than copied from
        // target_profit, so the row is derived from the rows above it.
        let profit = audit.record(
            sections::PROFIT,
            keys::PROFIT,
            "Profit",
            "gdv − tdc − residual_land_value",
            gdv - tdc - residual_land_value,
        );

        let (denominator, margin_formula) = match target.basis {
            ProfitBasis::Gdv => (gdv, "profit ÷ gdv (0 when gdv = 0)"),
            ProfitBasis::Cost => (tdc, "profit ÷ tdc (0 when tdc = 0)"),
        };
        let profit_margin = audit.record(
            sections::PROFIT,
            keys::PROFIT_MARGIN,
            "Profit margin",
            margin_formula,
            if denominator == 0.0 {
                0.0
            } else {
                profit / denominator
            },
        );

        Output {
            gdv,
            tdc,
            profit,
            profit_margin,
            residual_land_value,
            audit: audit.into_rows(),
        }
    }
}
