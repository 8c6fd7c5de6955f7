use coverage_summary::{
    calculate_coverage, patch_document_with_marker, AggregateResult, CoverageIndex, PatchOutcome,
};
use tracing::{info, info_span};

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
    exclude::filter_excluded,
    loaders::{
        coverage_file_path, load_compare_files, load_coverage_index, parse_touched_files,
        read_document, read_input, write_output,
    },
    log::initialize_log,
    options::ReportOptions,
};

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentUpdate {
    pub result: AggregateResult,
    pub fragment: String,
    pub body: String,
    pub outcome: PatchOutcome,
}

/// Aggregates the touched files and writes the rendered fragment into `body`.
pub fn update_document(
    index: &CoverageIndex,
    touched_files: Vec<String>,
    body: &str,
    options: &ReportOptions,
) -> DocumentUpdate {
    let touched_files = filter_excluded(touched_files, options.exclude.as_deref().unwrap_or(&[]));
    let result = calculate_coverage(&touched_files, index);

    let layout = options.layout;
    let fragment = layout.render(&result, &options.title);
    let (body, outcome) = patch_document_with_marker(body, &fragment, layout.marker());

    DocumentUpdate {
        result,
        fragment,
        body,
        outcome,
    }
}

fn load_touched_files(cli: &Cli) -> CliResult<Vec<String>> {
    match (&cli.touched.touched_files, &cli.touched.compare) {
        (Some(path), _) => Ok(parse_touched_files(&read_input(path)?)),
        (None, Some(path)) => load_compare_files(path),
        (None, None) => Err(CliError::invalid_argument(
            "one of --touched-files or --compare is required",
        )),
    }
}

pub fn run(cli: Cli) -> CliResult<DocumentUpdate> {
    let options = cli.report_options()?;
    initialize_log(&options.log);

    let span = info_span!("coverage_summary", title = options.title.as_str());
    let _enter = span.enter();

    if cli.in_place && cli.document.is_none() {
        return Err(CliError::invalid_argument("--in-place requires --document"));
    }

    let coverage_file = coverage_file_path(&cli.workspace, &options.coverage_file);
    let index = load_coverage_index(&coverage_file)?;
    info!(
        path = %coverage_file.display(),
        entries = index.len(),
        "Loaded coverage summary"
    );

    let touched_files = load_touched_files(&cli)?;
    let body = match &cli.document {
        Some(path) => read_document(path)?,
        None => String::new(),
    };

    let update = update_document(&index, touched_files, &body, &options);
    info!(
        outcome = ?update.outcome,
        none_touched = update.result.is_none_touched(),
        "Updated document"
    );

    let output = if cli.in_place {
        cli.document.as_deref()
    } else {
        cli.output.as_deref()
    };
    write_output(output, &update.body)?;

    if let Some(path) = &cli.summary_output {
        let summary = serde_json::to_string_pretty(&update.result).map_err(CliError::Summary)?;
        write_output(Some(path), &summary)?;
    }

    Ok(update)
}
