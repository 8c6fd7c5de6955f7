use tracing::debug;

use crate::FRAGMENT_MARKER;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// A previously written fragment was replaced in place.
    Replaced,
    /// No previous fragment was found, the fragment went to the end.
    Appended,
}

/// Byte range of the first previously written fragment: from the first
/// occurrence of `anchor` through the first `marker` following the anchor.
/// A marker inside the anchor itself does not end the fragment.
pub fn find_fragment(body: &str, anchor: &str, marker: &str) -> Option<(usize, usize)> {
    let start = body.find(anchor)?;
    let after_anchor = start + anchor.len();
    let end = body[after_anchor..].find(marker)? + after_anchor + marker.len();

    Some((start, end))
}

/// Writes `fragment` into `body`, using the fragment's first line as the
/// anchor and `marker` as the end of a previously written fragment.
pub fn patch_document_with_marker(
    body: &str,
    fragment: &str,
    marker: &str,
) -> (String, PatchOutcome) {
    let anchor = fragment.lines().next().unwrap_or_default();

    match find_fragment(body, anchor, marker) {
        Some((start, end)) if !anchor.is_empty() => {
            debug!(start, end, "Replacing existing fragment");
            let patched = format!("{}{}{}", &body[..start], fragment, &body[end..]);
            (patched, PatchOutcome::Replaced)
        }
        _ => {
            debug!("No existing fragment, appending");
            (format!("{}\n\n{}", body, fragment), PatchOutcome::Appended)
        }
    }
}

/// [`patch_document_with_marker`] for fragments closed by [`FRAGMENT_MARKER`].
pub fn patch_document(body: &str, fragment: &str) -> String {
    patch_document_with_marker(body, fragment, FRAGMENT_MARKER).0
}
