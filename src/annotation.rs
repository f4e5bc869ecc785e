//! @ai:module:intent Define the rule-failure annotation value and its deterministic ordering
//! @ai:module:layer domain
//! @ai:module:public_api Annotation, compare_annotations, sort_annotations
//! @ai:module:depends_on location, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::location::FileLocation;
use std::cmp::Ordering;

/// @ai:intent A single rule failure reported by the plugin
///
/// An annotation always carries the ID of the rule that failed. It optionally
/// carries a user-readable message, the location of the failure, and the
/// location of the failure in the against (prior-version) input. The against
/// location is only produced by breaking-change rules.
///
/// Fields are private; the validating constructor is the only way to obtain a
/// value, and values are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    rule_id: String,
    message: String,
    file_location: Option<FileLocation>,
    against_file_location: Option<FileLocation>,
}

impl Annotation {
    /// @ai:intent Construct an annotation, rejecting an empty rule ID
    /// @ai:pre rule_id is non-empty
    /// @ai:effects pure
    ///
    /// The rule ID is the only validated input. The message may be empty
    /// (meaning "no message") and both locations may be absent. Inputs are
    /// stored exactly as given, with no trimming or normalization.
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        file_location: Option<FileLocation>,
        against_file_location: Option<FileLocation>,
    ) -> Result<Self> {
        let rule_id = rule_id.into();
        if rule_id.is_empty() {
            return Err(Error::EmptyRuleId);
        }
        Ok(Self {
            rule_id,
            message: message.into(),
            file_location,
            against_file_location,
        })
    }

    /// @ai:intent ID of the rule that failed; always non-empty
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    /// @ai:intent User-readable message; empty string means no message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// @ai:intent Location of the failure in the primary input
    pub fn file_location(&self) -> Option<&FileLocation> {
        self.file_location.as_ref()
    }

    /// @ai:intent Location of the failure in the against input
    ///
    /// Only potentially present for breaking-change rules.
    pub fn against_file_location(&self) -> Option<&FileLocation> {
        self.against_file_location.as_ref()
    }
}

/// @ai:intent Three-way comparison giving annotations a deterministic total order
/// @ai:effects pure
///
/// Keys, in order: file location (absent first, then the location's canonical
/// order), rule ID, message. The against location is deliberately not part of
/// the key: breaking-change failures are ordered by where the problem is
/// observed, not where the prior version defined it.
///
/// `Annotation` does not implement `Ord` because equality includes the against
/// location while this key does not; two annotations differing only in their
/// against location compare `Equal` here without being `==`.
pub fn compare_annotations(a: &Annotation, b: &Annotation) -> Ordering {
    a.file_location
        .cmp(&b.file_location)
        .then_with(|| a.rule_id.cmp(&b.rule_id))
        .then_with(|| a.message.cmp(&b.message))
}

/// @ai:intent Sort a batch of annotations into the canonical order
/// @ai:effects pure
///
/// The comparator discriminates ties down to the message text, so every
/// permutation of the same batch sorts to the same sequence regardless of the
/// order the producing rules completed in.
pub fn sort_annotations(annotations: &mut [Annotation]) {
    annotations.sort_by(compare_annotations);
}
