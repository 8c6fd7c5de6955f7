use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use coverage_summary::FragmentLayout;

use crate::{
    error::{CliError, CliResult},
    options::ReportOptions,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Heading,
    Banner,
}

impl From<LayoutArg> for FragmentLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Heading => FragmentLayout::Heading,
            LayoutArg::Banner => FragmentLayout::Banner,
        }
    }
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TouchedSource {
    /// File listing touched paths, one per line (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub touched_files: Option<PathBuf>,

    /// Commit comparison JSON; only added and modified files count as touched
    #[arg(long, value_name = "PATH")]
    pub compare: Option<PathBuf>,
}

/// Summarizes istanbul coverage of touched files into a document
#[derive(Debug, Parser)]
#[command(name = "coverage-summary", version, about)]
pub struct Cli {
    /// Directory the coverage file is relative to
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// `json-summary` file, relative to the workspace
    #[arg(long, value_name = "PATH")]
    pub coverage_file: Option<String>,

    #[command(flatten)]
    pub touched: TouchedSource,

    /// Document to write the summary into
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Where to write the updated document, stdout when omitted
    #[arg(long, value_name = "PATH", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Write the updated document back to `--document`
    #[arg(long)]
    pub in_place: bool,

    /// Where to write the aggregated summary as JSON
    #[arg(long, value_name = "PATH")]
    pub summary_output: Option<PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Glob of touched files to leave out, can be repeated
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Report options as a JSON object, flags take precedence
    #[arg(long, value_name = "JSON")]
    pub config: Option<String>,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    /// Log span enter and close events
    #[arg(long)]
    pub trace: bool,
}

impl Cli {
    /// Options from `--config`, overridden by explicit flags.
    pub fn report_options(&self) -> CliResult<ReportOptions> {
        let mut options = match self.config.as_deref() {
            Some(config) => ReportOptions::from_json_str(config).map_err(CliError::Options)?,
            None => Default::default(),
        };

        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(coverage_file) = &self.coverage_file {
            options.coverage_file = coverage_file.clone();
        }
        if let Some(layout) = self.layout {
            options.layout = layout.into();
        }
        if !self.exclude.is_empty() {
            options
                .exclude
                .get_or_insert_with(Vec::new)
                .extend(self.exclude.iter().cloned());
        }
        if self.log_level.is_some() {
            options.log.level = self.log_level.clone();
        }
        if self.trace {
            options.log.enable_trace = true;
        }

        Ok(options)
    }
}
