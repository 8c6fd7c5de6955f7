use serde::Serialize;
use tracing::debug;

use crate::{match_touched_files, CoverageIndex, CoverageSummary};

/// Outcome of aggregating touched files.
///
/// `NoneTouched` means no touched file has an entry in the coverage summary,
/// which is not the same thing as touched files with 0% coverage.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AggregateResult {
    Summary(CoverageSummary),
    NoneTouched,
}

impl AggregateResult {
    pub fn summary(&self) -> Option<&CoverageSummary> {
        match self {
            AggregateResult::Summary(summary) => Some(summary),
            AggregateResult::NoneTouched => None,
        }
    }

    pub fn is_none_touched(&self) -> bool {
        matches!(self, AggregateResult::NoneTouched)
    }
}

impl From<Option<CoverageSummary>> for AggregateResult {
    fn from(value: Option<CoverageSummary>) -> Self {
        value.map_or(AggregateResult::NoneTouched, AggregateResult::Summary)
    }
}

/// Folds summaries into one. The first summary is the starting accumulator,
/// so a single summary comes back exactly as recorded.
pub fn merge_summaries<'a, I>(summaries: I) -> Option<CoverageSummary>
where
    I: IntoIterator<Item = &'a CoverageSummary>,
{
    summaries
        .into_iter()
        .copied()
        .reduce(|acc, summary| acc.merge(&summary))
}

/// Combined coverage of the touched files found in the index.
pub fn calculate_coverage<S: AsRef<str>>(
    touched_files: &[S],
    index: &CoverageIndex,
) -> AggregateResult {
    let matched = match_touched_files(touched_files, index);
    debug!(
        touched = touched_files.len(),
        matched = matched.len(),
        "Aggregating touched file coverage"
    );

    merge_summaries(matched).into()
}
