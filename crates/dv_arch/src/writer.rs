use dv_value::{Dictionary, Value};

use crate::field::{FieldMut, Serializable};

/// The reserved dictionary key holding an object's layout version.
///
/// Present in every dictionary a write pass produces, written before any
/// field, and read back before any field. It is framing, not a field of the
/// object.
pub const CLASS_VERSION_KEY: &str = "class_version";

// -----------------------------------------------------------------------------
// Writer

/// The serializing direction: object → dictionary.
///
/// A `Writer` borrows its target dictionary for a single pass. The pass
/// visits the object's field list once, inserting one wire value per field
/// after the [`CLASS_VERSION_KEY`] marker. Writing cannot fail: every case
/// of the closed [`FieldMut`] set has a conversion rule.
///
/// The pass mutates only the dictionary; the source object is read through
/// its field borrows and left untouched.
///
/// # Examples
///
/// ```
/// use dv_arch::{FieldEntry, Serializable, Writer};
/// use dv_value::{Dictionary, Value};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Serializable for Point {
///     fn fields(&mut self) -> Vec<FieldEntry<'_>> {
///         vec![
///             FieldEntry::new("x", &mut self.x),
///             FieldEntry::new("y", &mut self.y),
///         ]
///     }
/// }
///
/// let mut point = Point { x: 1.5, y: -2.0 };
/// let mut dict = Dictionary::new();
/// Writer::new(&mut dict).write(&mut point);
///
/// assert_eq!(dict.key_at(0), Some("class_version"));
/// assert_eq!(dict.get("x"), Some(&Value::Double(1.5)));
/// ```
pub struct Writer<'a> {
    dict: &'a mut Dictionary,
}

impl<'a> Writer<'a> {
    /// Creates a writer targeting `dict` for one pass.
    #[inline]
    pub fn new(dict: &'a mut Dictionary) -> Self {
        Self { dict }
    }

    /// Serializes `object` into the dictionary, version marker first.
    pub fn write(&mut self, object: &mut dyn Serializable) {
        self.dict
            .insert(CLASS_VERSION_KEY, Value::Int(object.class_version()));
        for entry in object.fields() {
            let (name, field) = entry.into_parts();
            self.dict.insert(name, field_to_value(field));
        }
    }
}

/// One conversion rule per field-type case. The reader's match in
/// `read_field` is the exact mirror; the two must stay symmetric.
fn field_to_value(field: FieldMut<'_>) -> Value {
    match field {
        FieldMut::Bool(v) => Value::Bool(*v),
        FieldMut::I8(v) => Value::Int(i32::from(*v)),
        FieldMut::I16(v) => Value::Int(i32::from(*v)),
        FieldMut::I32(v) => Value::Int(*v),
        FieldMut::I64(v) => Value::Long(*v),
        FieldMut::U8(v) => Value::Int(i32::from(*v)),
        FieldMut::U16(v) => Value::Int(i32::from(*v)),
        // The dictionary has no unsigned variant. Same-width values keep
        // their bit pattern and travel as the signed shape; the reader
        // reverses this exactly.
        FieldMut::U32(v) => Value::Int((*v).cast_signed()),
        FieldMut::U64(v) => Value::Long((*v).cast_signed()),
        FieldMut::F32(v) => Value::Double(f64::from(*v)),
        FieldMut::F64(v) => Value::Double(*v),
        FieldMut::Str(v) => Value::String(v.clone()),
        FieldMut::Enum(v) => Value::Int(v.underlying()),
        FieldMut::Composite(v) => {
            let mut nested = Dictionary::new();
            Writer::new(&mut nested).write(v);
            Value::Struct(nested)
        }
    }
}

/// Runs a full write pass into a fresh dictionary.
#[inline]
pub fn to_dictionary(object: &mut dyn Serializable) -> Dictionary {
    let mut dict = Dictionary::new();
    Writer::new(&mut dict).write(object);
    dict
}

// -----------------------------------------------------------------------------
// Tests
