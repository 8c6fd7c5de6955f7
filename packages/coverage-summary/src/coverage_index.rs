use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::CoverageSummary;

/// a map of `CoverageSummary` objects keyed by file paths, in the order the
/// summary file lists them. The synthetic `total` key is kept as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverageIndex {
    inner: IndexMap<String, CoverageSummary>,
}

impl CoverageIndex {
    pub fn new() -> CoverageIndex {
        CoverageIndex {
            inner: Default::default(),
        }
    }

    pub fn from_entries<I, K>(entries: I) -> CoverageIndex
    where
        I: IntoIterator<Item = (K, CoverageSummary)>,
        K: Into<String>,
    {
        CoverageIndex {
            inner: entries
                .into_iter()
                .map(|(path, summary)| (path.into(), summary))
                .collect(),
        }
    }

    /// Reads a `json-summary` document. `null` reads as an empty index.
    pub fn from_json_str(value: &str) -> Result<CoverageIndex, serde_json::Error> {
        serde_json::from_str(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CoverageIndex, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CoverageSummary)> {
        self.inner.iter()
    }

    pub fn get_files(&self) -> Vec<&String> {
        self.inner.keys().collect()
    }

    pub fn get_coverage_for_file(&self, file_path: &str) -> Option<&CoverageSummary> {
        self.inner.get(file_path)
    }
}

impl<'de> Deserialize<'de> for CoverageIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<IndexMap<String, Option<CoverageSummary>>>::deserialize(deserializer)?;

        Ok(CoverageIndex::from_entries(
            raw.unwrap_or_default()
                .into_iter()
                .map(|(path, summary)| (path, summary.unwrap_or_default())),
        ))
    }
}
