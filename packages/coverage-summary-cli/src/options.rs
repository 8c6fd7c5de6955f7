use coverage_summary::FragmentLayout;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogOptions {
    pub level: Option<String>,
    pub enable_trace: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        LogOptions {
            level: None,
            enable_trace: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportOptions {
    pub title: String,
    /// Path of the `json-summary` file, relative to the workspace.
    pub coverage_file: String,
    pub layout: FragmentLayout,
    /// wax globs of touched files to leave out of the summary.
    pub exclude: Option<Vec<String>>,
    pub log: LogOptions,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            title: "Coverage report of touched files".to_string(),
            coverage_file: "coverage/coverage-summary.json".to_string(),
            layout: Default::default(),
            exclude: Default::default(),
            log: Default::default(),
        }
    }
}

impl ReportOptions {
    pub fn from_json_str(value: &str) -> Result<ReportOptions, serde_json::Error> {
        serde_json::from_str(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(
            ReportOptions::from_json_str("{}").unwrap(),
            ReportOptions::default()
        );
    }

    #[test]
    fn reads_camel_case_config() {
        let options = ReportOptions::from_json_str(
            r#"{
                "title": "Frontend coverage",
                "coverageFile": "packages/web/coverage/coverage-summary.json",
                "layout": "banner",
                "exclude": ["**/*.test.ts"],
                "log": { "level": "debug", "enableTrace": true }
            }"#,
        )
        .unwrap();

        assert_eq!(options.title, "Frontend coverage");
        assert_eq!(
            options.coverage_file,
            "packages/web/coverage/coverage-summary.json"
        );
        assert_eq!(options.layout, FragmentLayout::Banner);
        assert_eq!(options.exclude, Some(vec!["**/*.test.ts".to_string()]));
        assert_eq!(
            options.log,
            LogOptions {
                level: Some("debug".to_string()),
                enable_trace: true
            }
        );
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(ReportOptions::from_json_str(r#"{ "layout": "html" }"#).is_err());
    }
}
