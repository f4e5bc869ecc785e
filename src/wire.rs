//! @ai:module:intent Project annotations to and from the canonical wire messages
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnnotationWire, FileLocationWire, to_wire, encode_batch, decode_batch, read_batch
//! @ai:module:depends_on annotation, location, error
//! @ai:module:stateless true

use crate::annotation::Annotation;
use crate::error::{Error, Result};
use crate::location::FileLocation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Wire form of a file location
///
/// Presence semantics matter: an absent location is an omitted sub-message,
/// never a zero-valued one, so absence survives a round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileLocationWire {
    pub file: String,
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl From<&FileLocation> for FileLocationWire {
    fn from(location: &FileLocation) -> Self {
        Self {
            file: location.file.display().to_string(),
            line: location.line,
            column: location.column,
        }
    }
}

impl From<FileLocationWire> for FileLocation {
    fn from(wire: FileLocationWire) -> Self {
        Self {
            file: wire.file.into(),
            line: wire.line,
            column: wire.column,
        }
    }
}

/// @ai:intent Wire form of a single annotation
///
/// `rule_id` is always present; an empty message and absent locations are
/// omitted from the serialized message entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationWire {
    pub rule_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_location: Option<FileLocationWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub against_file_location: Option<FileLocationWire>,
}

impl Annotation {
    /// @ai:intent Project this annotation into its wire message
    /// @ai:effects pure
    ///
    /// Pure and infallible; validation already happened at construction.
    pub fn to_wire(&self) -> AnnotationWire {
        AnnotationWire {
            rule_id: self.rule_id().to_string(),
            message: self.message().to_string(),
            file_location: self.file_location().map(FileLocationWire::from),
            against_file_location: self.against_file_location().map(FileLocationWire::from),
        }
    }
}

impl AnnotationWire {
    /// @ai:intent Rebuild the annotation value, re-entering the validating constructor
    pub fn into_annotation(self) -> Result<Annotation> {
        Annotation::new(
            self.rule_id,
            self.message,
            self.file_location.map(FileLocation::from),
            self.against_file_location.map(FileLocation::from),
        )
    }
}

/// @ai:intent Project an optional annotation; absent in, absent out
/// @ai:effects pure
pub fn to_wire(annotation: Option<&Annotation>) -> Option<AnnotationWire> {
    annotation.map(Annotation::to_wire)
}

/// @ai:intent Project a batch, preserving its order
/// @ai:effects pure
///
/// Ordering is the sort stage's job; encoding never re-orders.
pub fn encode_batch(annotations: &[Annotation]) -> Vec<AnnotationWire> {
    annotations.iter().map(Annotation::to_wire).collect()
}

/// @ai:intent Decode a batch of wire messages back into annotation values
pub fn decode_batch(wires: Vec<AnnotationWire>) -> Result<Vec<Annotation>> {
    wires
        .into_iter()
        .map(AnnotationWire::into_annotation)
        .collect()
}

/// @ai:intent Read one JSON batch file produced by a rule run
/// @ai:effects fs:read
pub fn read_batch(path: &Path) -> Result<Vec<Annotation>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let wires: Vec<AnnotationWire> = serde_json::from_str(&content)?;
    decode_batch(wires)
}
