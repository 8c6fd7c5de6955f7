use std::{iter::Sum, ops::Add};

use serde::{Deserialize, Deserializer, Serialize};

use crate::percent;

/// Counts for a single coverage dimension, as written by istanbul's
/// `json-summary` reporter.
///
/// `pct` read from a summary is kept as recorded, and derived from `covered`
/// and `total` when the summary has none. Any value produced by
/// [`Totals::new`] or a merge derives `pct` as well.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTotals")]
pub struct Totals {
    pub total: u32,
    pub covered: u32,
    pub skipped: u32,
    pub pct: f64,
}

impl Totals {
    /// Identity element of [`Totals::merge`]. Stands in for any absent value.
    pub const ZERO: Totals = Totals {
        total: 0,
        covered: 0,
        skipped: 0,
        pct: 0.0,
    };

    pub fn new(total: u32, covered: u32, skipped: u32) -> Totals {
        Totals {
            total,
            covered,
            skipped,
            pct: percent(covered, total),
        }
    }

    /// Merges a second totals into this one. Counts are summed, saturating at
    /// `u32::MAX`, and `pct` is recomputed from the sums.
    pub fn merge(&self, totals: &Totals) -> Totals {
        Totals::new(
            self.total.saturating_add(totals.total),
            self.covered.saturating_add(totals.covered),
            self.skipped.saturating_add(totals.skipped),
        )
    }

    pub fn merge_optional(lhs: Option<&Totals>, rhs: Option<&Totals>) -> Totals {
        lhs.unwrap_or(&Totals::ZERO)
            .merge(rhs.unwrap_or(&Totals::ZERO))
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        self.merge(&rhs)
    }
}

impl<'a> Sum<&'a Totals> for Totals {
    fn sum<I: Iterator<Item = &'a Totals>>(iter: I) -> Totals {
        iter.fold(Totals::ZERO, |acc, totals| acc.merge(totals))
    }
}

/// istanbul writes `"Unknown"` for dimensions without any instrumented item.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPercentage {
    Value(f64),
    Label(#[allow(dead_code)] String),
}

fn deserialize_pct<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let pct = Option::<RawPercentage>::deserialize(deserializer)?;
    Ok(match pct {
        Some(RawPercentage::Value(value)) if value.is_finite() => Some(value),
        _ => None,
    })
}

/// Totals as found in a summary file, any field may be missing.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawTotals {
    total: u32,
    covered: u32,
    skipped: u32,
    #[serde(deserialize_with = "deserialize_pct")]
    pct: Option<f64>,
}

impl From<RawTotals> for Totals {
    fn from(raw: RawTotals) -> Self {
        Totals {
            total: raw.total,
            covered: raw.covered,
            skipped: raw.skipped,
            pct: raw.pct.unwrap_or_else(|| percent(raw.covered, raw.total)),
        }
    }
}

fn deserialize_totals<'de, D>(deserializer: D) -> Result<Totals, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Totals>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coverage summary of a single file, or of a set of files merged together.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageSummary {
    #[serde(deserialize_with = "deserialize_totals")]
    lines: Totals,
    #[serde(deserialize_with = "deserialize_totals")]
    functions: Totals,
    #[serde(deserialize_with = "deserialize_totals")]
    statements: Totals,
    #[serde(deserialize_with = "deserialize_totals")]
    branches: Totals,
}

impl CoverageSummary {
    pub const ZERO: CoverageSummary = CoverageSummary {
        lines: Totals::ZERO,
        functions: Totals::ZERO,
        statements: Totals::ZERO,
        branches: Totals::ZERO,
    };

    pub fn new(
        lines: Totals,
        functions: Totals,
        statements: Totals,
        branches: Totals,
    ) -> CoverageSummary {
        CoverageSummary {
            lines,
            functions,
            statements,
            branches,
        }
    }

    pub fn lines(&self) -> &Totals {
        &self.lines
    }

    pub fn functions(&self) -> &Totals {
        &self.functions
    }

    pub fn statements(&self) -> &Totals {
        &self.statements
    }

    pub fn branches(&self) -> &Totals {
        &self.branches
    }

    /// Merges a second summary coverage object into this one, per dimension.
    pub fn merge(&self, summary: &CoverageSummary) -> CoverageSummary {
        CoverageSummary {
            lines: self.lines.merge(&summary.lines),
            functions: self.functions.merge(&summary.functions),
            statements: self.statements.merge(&summary.statements),
            branches: self.branches.merge(&summary.branches),
        }
    }

    pub fn merge_optional(
        lhs: Option<&CoverageSummary>,
        rhs: Option<&CoverageSummary>,
    ) -> CoverageSummary {
        lhs.unwrap_or(&CoverageSummary::ZERO)
            .merge(rhs.unwrap_or(&CoverageSummary::ZERO))
    }
}

impl Add for CoverageSummary {
    type Output = CoverageSummary;

    fn add(self, rhs: CoverageSummary) -> CoverageSummary {
        self.merge(&rhs)
    }
}

impl<'a> Sum<&'a CoverageSummary> for CoverageSummary {
    fn sum<I: Iterator<Item = &'a CoverageSummary>>(iter: I) -> CoverageSummary {
        iter.fold(CoverageSummary::ZERO, |acc, summary| acc.merge(summary))
    }
}
