//! @ai:module:intent Define the comparable source location referenced by annotations
//! @ai:module:layer domain
//! @ai:module:public_api FileLocation
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Location of a failure within a described input file
///
/// Ordering is canonical and total: file path first, then line, then column.
/// An absent column sorts before any present column, so the derived order
/// matches conventional diagnostic output ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: Option<usize>,
}

impl FileLocation {
    /// @ai:intent Create a location with no column information
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column: None,
        }
    }

    /// @ai:intent Create a location with a column
    pub fn with_column(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column: Some(column),
        }
    }
}

impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}:{}", self.file.display(), self.line, column),
            None => write!(f, "{}:{}", self.file.display(), self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_path_then_line_then_column() {
        let a = FileLocation::new("a.proto", 10);
        let b = FileLocation::new("b.proto", 1);
        assert!(a < b);

        let early = FileLocation::new("a.proto", 5);
        assert!(early < a);

        let no_column = FileLocation::new("a.proto", 5);
        let column = FileLocation::with_column("a.proto", 5, 1);
        assert!(no_column < column);
    }

    #[test]
    fn test_display() {
        assert_eq!(FileLocation::new("f.proto", 10).to_string(), "f.proto:10");
        assert_eq!(
            FileLocation::with_column("f.proto", 10, 3).to_string(),
            "f.proto:10:3"
        );
    }
}
