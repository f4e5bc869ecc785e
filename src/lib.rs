//! @ai:module:intent Rule-failure annotation core for schema lint and breaking-change plugins
//! @ai:module:layer infrastructure
//! @ai:module:public_api annotation, location, wire, merge, output, error
//! @ai:module:stateless true
//!
//! # schemacheck annotations
//!
//! The unit of information a lint or breaking-change rule reports when it
//! rejects an input: a rule ID, an optional message, and up to two source
//! locations. The crate defines the annotation value, a deterministic total
//! order over annotation batches, and the canonical wire encoding returned to
//! the host process.
//!
//! ## Example
//!
//! ```rust
//! use schemacheck_annotations::{Annotation, FileLocation};
//! use schemacheck_annotations::{merge_batches, format_annotations, OutputFormat};
//!
//! // Each rule produces its own batch, in whatever order it finishes.
//! let lint = vec![Annotation::new(
//!     "FIELD_LOWER_SNAKE_CASE",
//!     "field \"UserId\" should be \"user_id\"",
//!     Some(FileLocation::new("user.proto", 7)),
//!     None,
//! ).unwrap()];
//! let breaking = vec![Annotation::new(
//!     "FIELD_NO_DELETE",
//!     "field \"email\" deleted",
//!     Some(FileLocation::new("user.proto", 3)),
//!     Some(FileLocation::new("old/user.proto", 12)),
//! ).unwrap()];
//!
//! // Merging sorts into one display-stable, wire-stable sequence.
//! let merged = merge_batches(vec![lint, breaking]);
//! println!("{}", format_annotations(&merged, OutputFormat::Text));
//! ```

pub mod annotation;
pub mod error;
pub mod location;
pub mod merge;
pub mod output;
pub mod wire;

pub use annotation::{compare_annotations, sort_annotations, Annotation};
pub use error::{Error, Result};
pub use location::FileLocation;
pub use merge::{collect_batches, merge_batches};
pub use output::{format_annotations, OutputFormat};
pub use wire::{decode_batch, encode_batch, read_batch, to_wire, AnnotationWire, FileLocationWire};
