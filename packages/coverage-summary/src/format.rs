use serde::{Deserialize, Serialize};

use crate::{AggregateResult, CoverageSummary, Totals};

/// Closes every fragment rendered with [`FragmentLayout::Heading`].
pub const FRAGMENT_MARKER: &str = "•";

/// Closes every fragment rendered with [`FragmentLayout::Banner`].
pub const BANNER_FRAGMENT_MARKER: &str = ".|";

const NONE_TOUCHED_MESSAGE: &str = "None of the files from the test coverage report were touched";

/// Text layout of a rendered fragment. The first line (heading) is derived
/// from the title alone and doubles as the anchor used to find the fragment
/// again in a document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentLayout {
    /// `### title` heading, closed by `•`.
    #[default]
    Heading,
    /// `==== **title** ====` banner, closed by `.|`. Layout of the first
    /// releases, kept to update documents written by them.
    Banner,
}

impl FragmentLayout {
    pub fn heading(&self, title: &str) -> String {
        match self {
            FragmentLayout::Heading => format!("### {}", title),
            FragmentLayout::Banner => format!("==== **{}** ====", title),
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            FragmentLayout::Heading => FRAGMENT_MARKER,
            FragmentLayout::Banner => BANNER_FRAGMENT_MARKER,
        }
    }

    pub fn render(&self, result: &AggregateResult, title: &str) -> String {
        let heading = self.heading(title);

        match result {
            AggregateResult::Summary(summary) => {
                format!("{}\n{}", heading, self.render_table(summary))
            }
            AggregateResult::NoneTouched => {
                format!("{}\n{}{}", heading, NONE_TOUCHED_MESSAGE, self.marker())
            }
        }
    }

    fn render_table(&self, summary: &CoverageSummary) -> String {
        // the padding before the slash is part of the table's look in plain text
        let row = |label: &str, pad: &str, totals: &Totals| {
            format!(
                "  | {:<10} |   ( {}{}/{} )   | {:.2}% |",
                label, totals.covered, pad, totals.total, totals.pct
            )
        };

        let mut last_row = row("Branches", "  ", summary.branches());
        if let FragmentLayout::Banner = self {
            last_row.pop();
        }
        last_row.push_str(self.marker());

        [
            "  | Type       |   #   |  %  |".to_string(),
            "  |------------|:-----:|:---:|".to_string(),
            row("Lines", "     ", summary.lines()),
            row("Functions", " ", summary.functions()),
            row("Statements", "", summary.statements()),
            last_row,
        ]
        .join("\n")
    }
}

/// Renders the aggregate with the default layout.
pub fn render_fragment(result: &AggregateResult, title: &str) -> String {
    FragmentLayout::default().render(result, title)
}
