//! Hand-written serde support for [`Value`] and [`Dictionary`].
//!
//! These impls exist for the transport seam: a dictionary produced by an
//! archive pass can ride any self-describing serde format. Two caveats are
//! inherent to that seam:
//!
//! - Self-describing formats carry one integer width. Any integer that fits
//!   32 bits deserializes as [`Value::Int`]; only wider payloads come back
//!   as [`Value::Long`].
//! - Unsigned integers beyond `i64::MAX` are rejected; the wire model has no
//!   unsigned shape (see the archive layer's bit-reinterpretation contract).
//!
//! [`Value`]: crate::Value
//! [`Value::Int`]: crate::Value::Int
//! [`Value::Long`]: crate::Value::Long
//! [`Dictionary`]: crate::Dictionary

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// Tests
