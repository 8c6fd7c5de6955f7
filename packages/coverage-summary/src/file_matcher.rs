use tracing::debug;

use crate::{CoverageIndex, CoverageSummary};

/// Summary paths are usually absolute while touched files come relative to
/// the repository root, so a suffix match is used. Only the summary path is
/// lower-cased; the touched path is compared as given.
pub fn is_path_match(summary_path: &str, touched_path: &str) -> bool {
    summary_path.to_lowercase().ends_with(touched_path)
}

/// Returns the first entry of the index, in index order, matching the touched path.
pub fn find_touched_entry<'a>(
    index: &'a CoverageIndex,
    touched_path: &str,
) -> Option<(&'a String, &'a CoverageSummary)> {
    index
        .iter()
        .find(|(path, _)| is_path_match(path, touched_path))
}

/// Collects the summaries of touched files in touched order. Paths without
/// an entry in the index are skipped.
pub fn match_touched_files<'a, S: AsRef<str>>(
    touched_files: &[S],
    index: &'a CoverageIndex,
) -> Vec<&'a CoverageSummary> {
    touched_files
        .iter()
        .filter_map(|touched| {
            let touched = touched.as_ref();
            let entry = find_touched_entry(index, touched);

            match entry {
                Some((path, summary)) => {
                    debug!(touched, path = path.as_str(), "Matched touched file");
                    Some(summary)
                }
                None => {
                    debug!(touched, "Touched file is not in the coverage summary");
                    None
                }
            }
        })
        .collect()
}
