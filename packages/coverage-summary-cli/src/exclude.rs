use tracing::{debug, warn};
use typed_path::Utf8TypedPath;
use wax::Pattern;

/// Normalize a file path to use forward slashes for consistent glob matching
pub fn normalize_path(path: &str) -> String {
    let typed_path = Utf8TypedPath::derive(path);
    if typed_path.is_windows() {
        typed_path.with_unix_encoding().to_string()
    } else if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Drops touched files matching any of the wax globs. Patterns that do not
/// parse are reported and the touched files are kept as they are.
pub fn filter_excluded(touched_files: Vec<String>, exclude: &[String]) -> Vec<String> {
    if exclude.is_empty() {
        return touched_files;
    }

    let normalized_patterns = exclude
        .iter()
        .map(|s| normalize_path(s))
        .collect::<Vec<_>>();

    match wax::any(normalized_patterns.iter().map(|s| s.as_str())) {
        Ok(p) => touched_files
            .into_iter()
            .filter(|touched| {
                let excluded = p.is_match(normalize_path(touched).as_str());
                if excluded {
                    debug!(touched = touched.as_str(), "Excluded touched file");
                }
                !excluded
            })
            .collect(),
        Err(e) => {
            warn!(error = ?e, "Could not parse exclude patterns, will be ignored");
            touched_files
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_path_for_glob_matching() {
        let result = normalize_path(r"C:\Users\project\test\index.test.ts");
        assert!(result.contains("/Users/project/test/index.test.ts"));

        let result = normalize_path(r"project\src\test\file.ts");
        assert!(result.contains("project/src/test/file.ts"));

        assert_eq!(
            normalize_path("src/components/Button.tsx"),
            "src/components/Button.tsx"
        );
    }

    #[test]
    fn drops_matching_touched_files() {
        let touched = paths(&["src/index.ts", "src/index.test.ts", "docs/README.md"]);
        let res = filter_excluded(touched, &paths(&["**/*.test.ts", "docs/**"]));

        assert_eq!(res, paths(&["src/index.ts"]));
    }

    #[test]
    fn no_patterns_keeps_everything() {
        let touched = paths(&["a.ts", "b.ts"]);
        assert_eq!(filter_excluded(touched.clone(), &[]), touched);
    }

    #[test]
    fn invalid_patterns_are_ignored() {
        let touched = paths(&["a.ts"]);
        assert_eq!(filter_excluded(touched.clone(), &paths(&["src/{a,b"])), touched);
    }
}
