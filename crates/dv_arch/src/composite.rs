use dv_value::{Value, ValueKind};

use crate::error::ArchiveError;
use crate::field::{FieldEntry, Serializable};
use crate::reader::Reader;
use crate::writer::to_dictionary;

// -----------------------------------------------------------------------------
// Composite

/// An adapter making any serializable object interchangeable with a single
/// dictionary [`Value`].
///
/// `Composite` owns its inner object; it is composition, not inheritance.
/// The wrapped type keeps its own identity and the wrapper adds exactly the
/// two conversions. Converting to a [`Value`] runs a full write pass;
/// constructing from a [`Value`] runs a full read pass into a fresh
/// instance. This is what lets field dispatch treat "nested object" as just
/// another terminal case.
///
/// # Examples
///
/// ```
/// use dv_arch::{Composite, FieldEntry, Serializable};
/// use dv_value::Value;
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Trigger {
///     armed: bool,
/// }
///
/// impl Serializable for Trigger {
///     fn fields(&mut self) -> Vec<FieldEntry<'_>> {
///         vec![FieldEntry::new("armed", &mut self.armed)]
///     }
/// }
///
/// let value: Value = Composite::new(Trigger { armed: true }).into();
/// let restored = Composite::<Trigger>::from_value(&value).unwrap();
/// assert_eq!(restored.get(), &Trigger { armed: true });
/// ```
#[derive(Debug)]
pub struct Composite<T: Serializable> {
    inner: T,
}

impl<T: Serializable> Composite<T> {
    /// Wraps `inner`.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped object.
    #[inline]
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Returns the wrapped object mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps into the inner object.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Runs a full write pass and returns the result as one
    /// [`Value::Struct`].
    #[inline]
    pub fn to_value(&mut self) -> Value {
        Value::Struct(to_dictionary(&mut self.inner))
    }
}

impl<T: Serializable + Default> Composite<T> {
    /// Runs a full read pass over `value` into a fresh `T`.
    ///
    /// `value` must be a [`Value::Struct`]; anything else fails with a
    /// [`ArchiveError::TypeMismatch`] keyed `"(root)"`, since there is no
    /// enclosing field name at the top of the tree.
    pub fn from_value(value: &Value) -> Result<Self, ArchiveError> {
        let dict = value.as_struct().ok_or_else(|| ArchiveError::TypeMismatch {
            key: "(root)".to_owned(),
            expected: ValueKind::Struct,
            found: value.kind(),
        })?;
        let mut inner = T::default();
        Reader::new(dict).read(&mut inner)?;
        Ok(Self { inner })
    }
}

impl<T: Serializable> Serializable for Composite<T> {
    #[inline]
    fn class_version(&self) -> i32 {
        self.inner.class_version()
    }

    #[inline]
    fn fields(&mut self) -> Vec<FieldEntry<'_>> {
        self.inner.fields()
    }
}

impl<T: Serializable> From<Composite<T>> for Value {
    #[inline]
    fn from(mut composite: Composite<T>) -> Self {
        composite.to_value()
    }
}

// -----------------------------------------------------------------------------
// Tests
