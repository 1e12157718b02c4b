use std::{error, fmt};

use dv_value::ValueKind;

// -----------------------------------------------------------------------------
// ArchiveError

/// An enumeration of all error outcomes of a read pass.
///
/// Every variant names the dictionary key it concerns; keys surfaced from a
/// nested composite pass are dotted paths (`"psu.voltage"`). Nothing is
/// recoverable inside the codec itself: a failed field is never defaulted
/// or skipped, because a caller cannot otherwise distinguish "absent field"
/// from "zero value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    /// A required field, or the `"class_version"` marker, is absent.
    MissingKey {
        key: String,
    },
    /// The stored value's variant does not match the target field, and no
    /// sanctioned conversion applies.
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
    /// A widened wire integer does not fit the narrow target field.
    OutOfRange {
        key: String,
        value: i64,
    },
    /// No variant of the target enumeration carries the stored underlying
    /// value.
    InvalidEnumValue {
        key: String,
        value: i32,
    },
}

impl ArchiveError {
    /// The dictionary key (or dotted key path) the error concerns.
    #[inline]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key }
            | Self::TypeMismatch { key, .. }
            | Self::OutOfRange { key, .. }
            | Self::InvalidEnumValue { key, .. } => key,
        }
    }

    /// Prefixes the key with the parent field's name, dotted.
    ///
    /// Applied when an error crosses out of a nested composite pass, so the
    /// surfaced key identifies the failing field within the whole tree.
    pub(crate) fn with_parent(self, parent: &str) -> Self {
        match self {
            Self::MissingKey { key } => Self::MissingKey {
                key: format!("{parent}.{key}"),
            },
            Self::TypeMismatch {
                key,
                expected,
                found,
            } => Self::TypeMismatch {
                key: format!("{parent}.{key}"),
                expected,
                found,
            },
            Self::OutOfRange { key, value } => Self::OutOfRange {
                key: format!("{parent}.{key}"),
                value,
            },
            Self::InvalidEnumValue { key, value } => Self::InvalidEnumValue {
                key: format!("{parent}.{key}"),
                value,
            },
        }
    }
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key } => {
                write!(f, "dictionary has no entry for key `{key}`")
            }
            Self::TypeMismatch {
                key,
                expected,
                found,
            } => {
                write!(f, "value under key `{key}` is `{found}`, expected `{expected}`")
            }
            Self::OutOfRange { key, value } => {
                write!(f, "value {value} under key `{key}` does not fit the target field")
            }
            Self::InvalidEnumValue { key, value } => {
                write!(
                    f,
                    "no enumeration variant has underlying value {value} (key `{key}`)"
                )
            }
        }
    }
}

impl error::Error for ArchiveError {}

// -----------------------------------------------------------------------------
// Tests
