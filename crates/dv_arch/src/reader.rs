use dv_value::{Dictionary, Value, ValueKind};

use crate::error::ArchiveError;
use crate::field::{FieldMut, Serializable};
use crate::writer::CLASS_VERSION_KEY;

// -----------------------------------------------------------------------------
// Reader

/// The deserializing direction: dictionary → object.
///
/// A `Reader` borrows its source dictionary for a single pass. The pass
/// reads the [`CLASS_VERSION_KEY`] marker first, then visits the object's
/// field list once, populating each field from the entry under its name.
///
/// Failure is always loud: a missing key, a wrong wire variant, a widened
/// integer that no longer fits its narrow target, or an unknown enum value
/// each abort the pass with a distinguishable [`ArchiveError`]. A field is
/// never silently left at its previous value.
///
/// The transported version is returned so callers can layer version-aware
/// field layouts on top; the codec itself never interprets it.
///
/// # Examples
///
/// ```
/// use dv_arch::{ArchiveError, FieldEntry, Reader, Serializable};
/// use dv_value::{Dictionary, Value};
///
/// #[derive(Default)]
/// struct Gain {
///     db: f64,
/// }
///
/// impl Serializable for Gain {
///     fn fields(&mut self) -> Vec<FieldEntry<'_>> {
///         vec![FieldEntry::new("db", &mut self.db)]
///     }
/// }
///
/// let mut dict = Dictionary::new();
/// dict.insert("class_version", Value::Int(0));
/// dict.insert("db", Value::Double(-3.0));
///
/// let mut gain = Gain::default();
/// Reader::new(&dict).read(&mut gain).unwrap();
/// assert_eq!(gain.db, -3.0);
///
/// let empty = Dictionary::new();
/// let err = Reader::new(&empty).read(&mut gain).unwrap_err();
/// assert!(matches!(err, ArchiveError::MissingKey { .. }));
/// ```
pub struct Reader<'a> {
    dict: &'a Dictionary,
}

impl<'a> Reader<'a> {
    /// Creates a reader over `dict` for one pass.
    #[inline]
    pub fn new(dict: &'a Dictionary) -> Self {
        Self { dict }
    }

    /// Populates `object`'s fields from the dictionary and returns the
    /// transported class version.
    pub fn read(&self, object: &mut dyn Serializable) -> Result<i32, ArchiveError> {
        let version = self.int_entry(CLASS_VERSION_KEY)?;
        for entry in object.fields() {
            let (name, field) = entry.into_parts();
            self.read_field(&name, field)?;
        }
        Ok(version)
    }

    fn entry(&self, key: &str) -> Result<&Value, ArchiveError> {
        self.dict.get(key).ok_or_else(|| ArchiveError::MissingKey {
            key: key.to_owned(),
        })
    }

    fn bool_entry(&self, key: &str) -> Result<bool, ArchiveError> {
        match self.entry(key)? {
            Value::Bool(v) => Ok(*v),
            other => Err(mismatch(key, ValueKind::Bool, other)),
        }
    }

    fn int_entry(&self, key: &str) -> Result<i32, ArchiveError> {
        match self.entry(key)? {
            Value::Int(v) => Ok(*v),
            other => Err(mismatch(key, ValueKind::Int, other)),
        }
    }

    fn long_entry(&self, key: &str) -> Result<i64, ArchiveError> {
        match self.entry(key)? {
            Value::Long(v) => Ok(*v),
            other => Err(mismatch(key, ValueKind::Long, other)),
        }
    }

    fn double_entry(&self, key: &str) -> Result<f64, ArchiveError> {
        match self.entry(key)? {
            Value::Double(v) => Ok(*v),
            other => Err(mismatch(key, ValueKind::Double, other)),
        }
    }

    fn str_entry(&self, key: &str) -> Result<&str, ArchiveError> {
        match self.entry(key)? {
            Value::String(v) => Ok(v),
            other => Err(mismatch(key, ValueKind::String, other)),
        }
    }

    fn struct_entry(&self, key: &str) -> Result<&Dictionary, ArchiveError> {
        match self.entry(key)? {
            Value::Struct(v) => Ok(v),
            other => Err(mismatch(key, ValueKind::Struct, other)),
        }
    }

    /// The exact mirror of the writer's `field_to_value`; the two matches
    /// must stay symmetric.
    fn read_field(&self, key: &str, field: FieldMut<'_>) -> Result<(), ArchiveError> {
        match field {
            FieldMut::Bool(v) => *v = self.bool_entry(key)?,
            FieldMut::I8(v) => *v = narrowed(key, self.int_entry(key)?)?,
            FieldMut::I16(v) => *v = narrowed(key, self.int_entry(key)?)?,
            FieldMut::I32(v) => *v = self.int_entry(key)?,
            FieldMut::I64(v) => *v = self.long_entry(key)?,
            FieldMut::U8(v) => *v = narrowed(key, self.int_entry(key)?)?,
            FieldMut::U16(v) => *v = narrowed(key, self.int_entry(key)?)?,
            // Reverse of the writer's bit-reinterpretation: same width, same
            // bit pattern, unsigned interpretation restored.
            FieldMut::U32(v) => *v = self.int_entry(key)?.cast_unsigned(),
            FieldMut::U64(v) => *v = self.long_entry(key)?.cast_unsigned(),
            FieldMut::F32(v) => *v = self.double_entry(key)? as f32,
            FieldMut::F64(v) => *v = self.double_entry(key)?,
            FieldMut::Str(v) => self.str_entry(key)?.clone_into(v),
            FieldMut::Enum(v) => {
                let wire = self.int_entry(key)?;
                if !v.set_underlying(wire) {
                    return Err(ArchiveError::InvalidEnumValue {
                        key: key.to_owned(),
                        value: wire,
                    });
                }
            }
            FieldMut::Composite(v) => {
                let nested = self.struct_entry(key)?;
                Reader::new(nested)
                    .read(v)
                    .map_err(|err| err.with_parent(key))?;
            }
        }
        Ok(())
    }
}

#[inline]
fn mismatch(key: &str, expected: ValueKind, found: &Value) -> ArchiveError {
    ArchiveError::TypeMismatch {
        key: key.to_owned(),
        expected,
        found: found.kind(),
    }
}

/// Range-checked narrowing for fields whose wire shape is wider than the
/// target. A value the writer could not have produced is data corruption,
/// not a conversion.
fn narrowed<T: TryFrom<i32>>(key: &str, wire: i32) -> Result<T, ArchiveError> {
    T::try_from(wire).map_err(|_| ArchiveError::OutOfRange {
        key: key.to_owned(),
        value: i64::from(wire),
    })
}

/// Runs a full read pass and returns the transported class version.
#[inline]
pub fn from_dictionary(
    dict: &Dictionary,
    object: &mut dyn Serializable,
) -> Result<i32, ArchiveError> {
    Reader::new(dict).read(object)
}

// -----------------------------------------------------------------------------
// Tests
