//! Shared test objects: a small radar-transmitter status tree exercising
//! every field-type case, plus the integer-extremes grid.

use crate::field::{FieldEntry, FieldMut, Serializable};

// -----------------------------------------------------------------------------
// TransmitMode

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransmitMode {
    #[default]
    Standby = 0,
    Radiate = 1,
    Fault = 2,
}

crate::impl_enum_field!(TransmitMode { Standby, Radiate, Fault });

// -----------------------------------------------------------------------------
// SupplyStatus

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplyStatus {
    pub voltage: f64,
    pub current: f64,
    pub over_temp: bool,
}

impl Serializable for SupplyStatus {
    fn class_version(&self) -> i32 {
        1
    }

    fn fields(&mut self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("voltage", &mut self.voltage),
            FieldEntry::new("current", &mut self.current),
            FieldEntry::new("over_temp", &mut self.over_temp),
        ]
    }
}

// -----------------------------------------------------------------------------
// TransmitterStatus

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransmitterStatus {
    pub mode: TransmitMode,
    pub enabled: bool,
    pub pulse_width_ns: u16,
    pub pulse_count: u64,
    pub fault_text: String,
    pub hv_supply: SupplyStatus,
}

impl Serializable for TransmitterStatus {
    fn class_version(&self) -> i32 {
        2
    }

    fn fields(&mut self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("mode", FieldMut::enumeration(&mut self.mode)),
            FieldEntry::new("enabled", &mut self.enabled),
            FieldEntry::new("pulse_width_ns", &mut self.pulse_width_ns),
            FieldEntry::new("pulse_count", &mut self.pulse_count),
            FieldEntry::new("fault_text", &mut self.fault_text),
            FieldEntry::new("hv_supply", FieldMut::composite(&mut self.hv_supply)),
        ]
    }
}

// -----------------------------------------------------------------------------
// RadarStatus

/// One more nesting level above [`TransmitterStatus`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarStatus {
    pub site_name: String,
    pub transmitter: TransmitterStatus,
}

impl Serializable for RadarStatus {
    fn fields(&mut self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("site_name", &mut self.site_name),
            FieldEntry::new("transmitter", FieldMut::composite(&mut self.transmitter)),
        ]
    }
}

// -----------------------------------------------------------------------------
// Bare

/// An object with no fields at all; only the version marker is archived.
pub struct Bare;

impl Serializable for Bare {
    fn fields(&mut self) -> Vec<FieldEntry<'_>> {
        Vec::new()
    }
}

// -----------------------------------------------------------------------------
// Extremes

/// Every fixed-width integer case at the limit of its range, plus the float
/// cases.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub i8_min: i8,
    pub u8_max: u8,
    pub i16_min: i16,
    pub u16_max: u16,
    pub i32_min: i32,
    pub u32_max: u32,
    pub i64_min: i64,
    pub u64_max: u64,
    pub f32_val: f32,
    pub f64_val: f64,
}

impl Extremes {
    /// All-zero values, for asserting that a read pass really overwrites.
    pub fn zeroed() -> Self {
        Self {
            i8_min: 0,
            u8_max: 0,
            i16_min: 0,
            u16_max: 0,
            i32_min: 0,
            u32_max: 0,
            i64_min: 0,
            u64_max: 0,
            f32_val: 0.0,
            f64_val: 0.0,
        }
    }
}

impl Default for Extremes {
    fn default() -> Self {
        Self {
            i8_min: i8::MIN,
            u8_max: u8::MAX,
            i16_min: i16::MIN,
            u16_max: u16::MAX,
            i32_min: i32::MIN,
            u32_max: u32::MAX,
            i64_min: i64::MIN,
            u64_max: u64::MAX,
            f32_val: 0.5,
            f64_val: -1.25,
        }
    }
}

impl Serializable for Extremes {
    fn fields(&mut self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("i8_min", &mut self.i8_min),
            FieldEntry::new("u8_max", &mut self.u8_max),
            FieldEntry::new("i16_min", &mut self.i16_min),
            FieldEntry::new("u16_max", &mut self.u16_max),
            FieldEntry::new("i32_min", &mut self.i32_min),
            FieldEntry::new("u32_max", &mut self.u32_max),
            FieldEntry::new("i64_min", &mut self.i64_min),
            FieldEntry::new("u64_max", &mut self.u64_max),
            FieldEntry::new("f32_val", &mut self.f32_val),
            FieldEntry::new("f64_val", &mut self.f64_val),
        ]
    }
}
