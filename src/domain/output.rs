use serde::{Deserialize, Serialize};

/// Stable audit-row keys, in the order the engine emits them.
pub mod keys {
    pub const GDV: &str = "revenue.gdv";
    pub const BUILD_COST: &str = "costs.build_cost";
    pub const CONTINGENCY: &str = "costs.contingency";
    pub const PROFESSIONAL_FEES: &str = "costs.professional_fees";
    pub const MARKETING: &str = "costs.marketing";
    pub const TDC: &str = "costs.tdc";
    pub const TARGET_PROFIT: &str = "profit.target_profit";
    pub const RESIDUAL_LAND_VALUE: &str = "land.residual_land_value";
    pub const PROFIT: &str = "profit.profit";
    pub const PROFIT_MARGIN: &str = "profit.margin";

    pub const ALL: [&str; 10] = [
        GDV,
        BUILD_COST,
        CONTINGENCY,
        PROFESSIONAL_FEES,
        MARKETING,
        TDC,
        TARGET_PROFIT,
        RESIDUAL_LAND_VALUE,
        PROFIT,
        PROFIT_MARGIN,
    ];
}

pub mod sections {
    pub const REVENUE: &str = "Revenue";
    pub const COSTS: &str = "Costs";
    pub const PROFIT_TARGET: &str = "Profit Target";
    pub const RESIDUAL_LAND_VALUE: &str = "Residual Land Value";
    pub const PROFIT: &str = "Profit";
}

/// One traced figure: the value and the derivation that produced it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AuditRow {
    pub section: String,
    pub key: String,
    pub label: String,
    pub value: f64,
    pub formula: String,
}

/// Ordered audit trail. Rows can only be appended.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct AuditTrail {
    rows: Vec<AuditRow>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self {
            rows: Vec::with_capacity(keys::ALL.len()),
        }
    }

    /// Appends a row and hands the value back so a step can be computed and
    /// traced in one expression.
    pub fn record(
        &mut self,
        section: &str,
        key: &str,
        label: &str,
        formula: impl Into<String>,
        value: f64,
    ) -> f64 {
        debug_assert!(
            self.rows.iter().all(|row| row.key != key),
            "duplicate audit key {key}"
        );
        self.rows.push(AuditRow {
            section: section.to_string(),
            key: key.to_string(),
            label: label.to_string(),
            value,
            formula: formula.into(),
        });
        value
    }

    pub fn into_rows(self) -> Vec<AuditRow> {
        self.rows
    }
}

/// Result of a feasibility appraisal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Output {
    pub gdv: f64,
    pub tdc: f64,
    pub profit: f64,
    /// Ratio, not percent.
    pub profit_margin: f64,
    pub residual_land_value: f64,
    pub audit: Vec<AuditRow>,
}

/// The headline figures of an [`Output`], without the audit trail.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct Kpis {
    pub gdv: f64,
    pub tdc: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub residual_land_value: f64,
}

impl Output {
    pub fn kpis(&self) -> Kpis {
        Kpis {
            gdv: self.gdv,
            tdc: self.tdc,
            profit: self.profit,
            profit_margin: self.profit_margin,
            residual_land_value: self.residual_land_value,
        }
    }

    /// Looks up an audit row by its stable key.
    pub fn audit_row(&self, key: &str) -> Option<&AuditRow> {
        self.audit.iter().find(|row| row.key == key)
    }
}
