//! @ai:module:intent Merge per-rule annotation batches into one deterministic sequence
//! @ai:module:layer application
//! @ai:module:public_api merge_batches, collect_batches
//! @ai:module:depends_on annotation, wire, error
//! @ai:module:stateless true

use crate::annotation::{sort_annotations, Annotation};
use crate::error::Result;
use crate::wire::read_batch;
use std::path::Path;
use walkdir::WalkDir;

/// @ai:intent Merge batches from independently-executed rules into the canonical order
/// @ai:effects pure
///
/// Rules may run concurrently and complete in arbitrary order; the merged
/// output depends only on the contents of the batches, never on arrival order.
pub fn merge_batches(batches: Vec<Vec<Annotation>>) -> Vec<Annotation> {
    let mut merged: Vec<Annotation> = batches.into_iter().flatten().collect();
    sort_annotations(&mut merged);
    merged
}

/// @ai:intent Load every JSON batch under a file or directory path
/// @ai:effects fs:read
///
/// A file path loads that one batch; a directory loads each `.json` file in
/// it. Directory traversal order does not matter, since merging sorts.
pub fn collect_batches(path: &Path) -> Result<Vec<Vec<Annotation>>> {
    if path.is_file() {
        return Ok(vec![read_batch(path)?]);
    }

    let mut batches = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            batches.push(read_batch(entry.path())?);
        }
    }
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::FileLocation;
    use crate::wire::encode_batch;
    use std::fs;

    fn annotation(rule_id: &str, file: &str, line: usize) -> Annotation {
        Annotation::new(rule_id, "", Some(FileLocation::new(file, line)), None).unwrap()
    }

    #[test]
    fn test_merge_is_independent_of_batch_order() {
        let batch_one = vec![annotation("B", "f.proto", 10), annotation("A", "f.proto", 5)];
        let batch_two = vec![annotation("A", "f.proto", 10)];

        let forward = merge_batches(vec![batch_one.clone(), batch_two.clone()]);
        let reverse = merge_batches(vec![batch_two, batch_one]);
        assert_eq!(forward, reverse);

        let keys: Vec<_> = forward
            .iter()
            .map(|a| (a.rule_id().to_string(), a.file_location().unwrap().line))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("A".to_string(), 5),
                ("A".to_string(), 10),
                ("B".to_string(), 10),
            ]
        );
    }

    #[test]
    fn test_merge_of_empty_batches_is_empty() {
        assert!(merge_batches(vec![vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_collect_batches_from_directory() {
        let dir = tempfile::tempdir().unwrap();

        let lint_batch = encode_batch(&[annotation("FIELD_LOWER_SNAKE_CASE", "a.proto", 3)]);
        let breaking_batch = encode_batch(&[annotation("FIELD_NO_DELETE", "b.proto", 8)]);
        fs::write(
            dir.path().join("lint.json"),
            serde_json::to_string(&lint_batch).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.path().join("breaking.json"),
            serde_json::to_string(&breaking_batch).unwrap(),
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let batches = collect_batches(dir.path()).unwrap();
        assert_eq!(batches.len(), 2);

        let merged = merge_batches(batches);
        let rules: Vec<_> = merged.iter().map(|a| a.rule_id()).collect();
        assert_eq!(rules, vec!["FIELD_LOWER_SNAKE_CASE", "FIELD_NO_DELETE"]);
    }
}
