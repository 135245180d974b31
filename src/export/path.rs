use std::path::{Path, PathBuf};

/// Default suffix appended to the object name
pub const DEFAULT_SUFFIX: &str = "_model_data";

/// Derive the output file path next to the document
///
/// Produces `{document dir}/{object_name}{suffix}.json`. Returns `None` when
/// the document has no path yet. Path separators in the object name are
/// replaced so the file always lands in the document directory.
pub fn output_path(document_path: Option<&Path>, object_name: &str, suffix: &str) -> Option<PathBuf> {
    let document_path = document_path.filter(|p| !p.as_os_str().is_empty())?;
    let directory = document_path.parent().unwrap_or_else(|| Path::new(""));
    Some(directory.join(format!("{}{}.json", file_stem_for(object_name), suffix)))
}

/// Object name as a single file name component
fn file_stem_for(object_name: &str) -> String {
    object_name
        .chars()
        .map(|c| if c == '/' || c == '\\' || c == ':' { '_' } else { c })
        .collect()
}
