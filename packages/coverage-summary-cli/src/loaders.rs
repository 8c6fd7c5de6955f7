use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use coverage_summary::CoverageIndex;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Location of the coverage summary. The workspace comes in explicitly, this
/// never looks at the environment.
pub fn coverage_file_path(workspace: &Path, coverage_file: &str) -> PathBuf {
    workspace.join(coverage_file)
}

pub fn load_coverage_index(path: &Path) -> CliResult<CoverageIndex> {
    let file = File::open(path).map_err(|e| CliError::io(path, e))?;

    CoverageIndex::from_reader(BufReader::new(file)).map_err(|source| CliError::Coverage {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a whole file, `-` reads stdin.
pub fn read_input(path: &Path) -> CliResult<String> {
    let mut value = String::new();

    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut value)
            .map_err(|e| CliError::io(path, e))?;
    } else {
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut value))
            .map_err(|e| CliError::io(path, e))?;
    }

    Ok(value)
}

/// One path per line, blank lines ignored.
pub fn parse_touched_files(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    Copied,
    Changed,
    Unchanged,
    #[serde(other)]
    Unknown,
}

/// Entry of the `files` list of a commit comparison.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    pub status: FileStatus,
}

impl ChangedFile {
    /// Removed files have no coverage to report on.
    pub fn is_touched(&self) -> bool {
        matches!(self.status, FileStatus::Added | FileStatus::Modified)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ComparePayload {
    Comparison { files: Vec<ChangedFile> },
    Files(Vec<ChangedFile>),
}

/// Touched file names of a commit comparison, either the full response or its
/// bare `files` array.
pub fn parse_compare_files(value: &str) -> Result<Vec<String>, serde_json::Error> {
    let files = match serde_json::from_str::<ComparePayload>(value)? {
        ComparePayload::Comparison { files } => files,
        ComparePayload::Files(files) => files,
    };

    Ok(files
        .into_iter()
        .filter(ChangedFile::is_touched)
        .map(|file| file.filename)
        .collect())
}

pub fn load_compare_files(path: &Path) -> CliResult<Vec<String>> {
    let value = read_input(path)?;

    parse_compare_files(&value).map_err(|source| CliError::Compare {
        path: path.to_path_buf(),
        source,
    })
}

/// A missing document is an empty one, the fragment is then appended to it.
pub fn read_document(path: &Path) -> CliResult<String> {
    match std::fs::read_to_string(path) {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Document does not exist yet");
            Ok(String::new())
        }
        Err(e) => Err(CliError::io(path, e)),
    }
}

/// Writes to `path`, or to stdout without one.
pub fn write_output(path: Option<&Path>, value: &str) -> CliResult<()> {
    match path {
        Some(path) => std::fs::write(path, value).map_err(|e| CliError::io(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(value.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::io("-", e))
        }
    }
}
