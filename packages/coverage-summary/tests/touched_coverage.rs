use coverage_summary::{
    calculate_coverage, patch_document, render_fragment, AggregateResult, CoverageIndex,
    CoverageSummary, Totals,
};
use pretty_assertions::assert_eq;

const SAMPLE_COVERAGE_SUMMARY: &str = r#"{
    "total": {
        "lines":{"total":79,"covered":35,"skipped":0,"pct":44.3},
        "statements":{"total":79,"covered":35,"skipped":0,"pct":44.3},
        "functions":{"total":17,"covered":7,"skipped":0,"pct":41.18},
        "branches":{"total":110,"covered":75,"skipped":0,"pct":68.18}
    },
    "file1.ts": {
        "lines":{"total":53,"covered":15,"skipped":0,"pct":28.3},
        "functions":{"total":9,"covered":2,"skipped":0,"pct":22.22},
        "statements":{"total":53,"covered":15,"skipped":0,"pct":28.3},
        "branches":{"total":34,"covered":2,"skipped":0,"pct":5.88}
    },
    "file2.ts": {
        "lines":{"total":26,"covered":20,"skipped":0,"pct":76.92},
        "functions":{"total":8,"covered":5,"skipped":0,"pct":62.5},
        "statements":{"total":26,"covered":20,"skipped":0,"pct":76.92},
        "branches":{"total":76,"covered":73,"skipped":0,"pct":96.05}
    }
}"#;

fn sample_index() -> CoverageIndex {
    CoverageIndex::from_json_str(SAMPLE_COVERAGE_SUMMARY).unwrap()
}

#[test]
fn index_lists_entries_in_file_order() {
    let index = sample_index();

    assert_eq!(index.len(), 3);
    assert_eq!(index.get_files(), vec!["total", "file1.ts", "file2.ts"]);
    assert_eq!(
        index.get_coverage_for_file("total").map(|s| *s.branches()),
        Some(Totals {
            total: 110,
            covered: 75,
            skipped: 0,
            pct: 68.18
        })
    );
}

#[test]
fn no_touched_file_is_none_touched() {
    let touched: [&str; 0] = [];
    assert_eq!(
        calculate_coverage(&touched, &sample_index()),
        AggregateResult::NoneTouched
    );
}

#[test]
fn single_touched_file_is_returned_as_recorded() {
    let index = sample_index();
    let res = calculate_coverage(&["file1.ts"], &index);

    assert_eq!(
        res.summary(),
        index.get_coverage_for_file("file1.ts")
    );
    assert_eq!(res.summary().map(|s| s.lines().pct), Some(28.3));
}

#[test]
fn touched_files_are_merged_and_unknown_ignored() {
    let index = sample_index();
    let res = calculate_coverage(&["file1.ts", "file2.ts", "file4.ts"], &index);
    let summary = res.summary().copied().unwrap();

    assert_eq!(
        *summary.branches(),
        Totals {
            total: 110,
            covered: 75,
            skipped: 0,
            pct: 68.18181818181817
        }
    );

    let expected = index
        .get_coverage_for_file("file1.ts")
        .unwrap()
        .merge(index.get_coverage_for_file("file2.ts").unwrap());
    assert_eq!(summary, expected);
}

#[test]
fn renders_and_rewrites_description() {
    let index = sample_index();
    let description = "Adds the parser.";

    let first = render_fragment(&calculate_coverage(&["file1.ts"], &index), "Coverage");
    let body = patch_document(description, &first);
    assert_eq!(body, format!("Adds the parser.\n\n{}", first));

    let second = render_fragment(
        &calculate_coverage(&["file1.ts", "file2.ts"], &index),
        "Coverage",
    );
    let body = patch_document(&body, &second);
    assert_eq!(body, format!("Adds the parser.\n\n{}", second));
    assert_eq!(patch_document(&body, &second), body);

    let none = render_fragment(&AggregateResult::NoneTouched, "Coverage");
    assert_eq!(
        patch_document(&body, &none),
        format!("Adds the parser.\n\n{}", none)
    );
}

#[test]
fn summary_serializes_to_json_summary_shape() {
    let summary = CoverageSummary::new(
        Totals::new(2, 1, 0),
        Totals::ZERO,
        Totals::ZERO,
        Totals::ZERO,
    );
    let value = serde_json::to_value(AggregateResult::Summary(summary)).unwrap();

    assert_eq!(
        value["lines"],
        serde_json::json!({ "total": 2, "covered": 1, "skipped": 0, "pct": 50.0 })
    );
    assert!(value.get("functions").is_some());
}

#[test]
fn missing_percentage_is_derived_from_counts() {
    let index = CoverageIndex::from_json_str(r#"{ "a.ts": { "lines": { "total": 4, "covered": 3 } } }"#)
        .unwrap();
    let res = calculate_coverage(&["a.ts"], &index);

    assert_eq!(res.summary().map(|s| s.lines().pct), Some(75.0));
    assert!(render_fragment(&res, "Coverage").contains("  | Lines      |   ( 3     /4 )   | 75.00% |"));
}
