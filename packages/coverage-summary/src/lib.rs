//! Aggregates istanbul `json-summary` coverage for the files touched by a
//! change, and writes the result as a text fragment into a document that can
//! be rewritten on every run.

mod aggregate;
mod coverage_index;
mod coverage_summary;
mod file_matcher;
mod format;
mod patch;
mod percent;

pub use aggregate::{calculate_coverage, merge_summaries, AggregateResult};
pub use coverage_index::CoverageIndex;
pub use coverage_summary::{CoverageSummary, Totals};
pub use file_matcher::{find_touched_entry, is_path_match, match_touched_files};
pub use format::{render_fragment, FragmentLayout, BANNER_FRAGMENT_MARKER, FRAGMENT_MARKER};
pub use patch::{find_fragment, patch_document, patch_document_with_marker, PatchOutcome};
pub use percent::percent;
