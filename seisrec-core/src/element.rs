//! Sample storage classes and element type constraints
//!
//! Records may carry their sample payload in any of a small closed set of
//! numeric storage classes; all dispatch goes through `match`, never
//! dynamic coercion.

use crate::error::{CoreError, Result};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Storage classes a record's sample payload may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StorageClass {
    /// 32-bit floating point
    F32 = 0,
    /// 64-bit floating point
    F64 = 1,
    /// 16-bit signed integer
    I16 = 2,
    /// 32-bit signed integer
    I32 = 3,
    /// 64-bit signed integer
    I64 = 4,
}

impl StorageClass {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageClass::F32),
            1 => Some(StorageClass::F64),
            2 => Some(StorageClass::I16),
            3 => Some(StorageClass::I32),
            4 => Some(StorageClass::I64),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Size in bytes of one sample of this class
    pub const fn size_bytes(self) -> usize {
        match self {
            StorageClass::I16 => 2,
            StorageClass::F32 | StorageClass::I32 => 4,
            StorageClass::F64 | StorageClass::I64 => 8,
        }
    }

    /// Fallible u8 conversion with a core error
    pub fn try_from_u8(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(CoreError::InvalidStorageClass(value))
    }
}

impl core::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageClass::F32 => write!(f, "f32"),
            StorageClass::F64 => write!(f, "f64"),
            StorageClass::I16 => write!(f, "i16"),
            StorageClass::I32 => write!(f, "i32"),
            StorageClass::I64 => write!(f, "i64"),
        }
    }
}

/// Trait for types that can hold record samples
pub trait SampleElement: Copy + PartialEq + Sized {
    /// Storage class tag for this element type
    fn storage_class() -> StorageClass;

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

impl SampleElement for f32 {
    fn storage_class() -> StorageClass {
        StorageClass::F32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SampleElement for f64 {
    fn storage_class() -> StorageClass {
        StorageClass::F64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl SampleElement for i16 {
    fn storage_class() -> StorageClass {
        StorageClass::I16
    }

    fn from_f64(value: f64) -> Self {
        value as i16
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SampleElement for i32 {
    fn storage_class() -> StorageClass {
        StorageClass::I32
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl SampleElement for i64 {
    fn storage_class() -> StorageClass {
        StorageClass::I64
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// One component of a record's sample payload, tagged by storage class
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataVector {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
}

#[cfg(feature = "alloc")]
impl DataVector {
    /// Cast f64 samples into the requested storage class
    pub fn cast(samples: &[f64], class: StorageClass) -> Self {
        fn collect<T: SampleElement>(samples: &[f64]) -> Vec<T> {
            samples.iter().map(|&v| T::from_f64(v)).collect()
        }
        match class {
            StorageClass::F32 => DataVector::F32(collect(samples)),
            StorageClass::F64 => DataVector::F64(collect(samples)),
            StorageClass::I16 => DataVector::I16(collect(samples)),
            StorageClass::I32 => DataVector::I32(collect(samples)),
            StorageClass::I64 => DataVector::I64(collect(samples)),
        }
    }

    /// Storage class of this vector
    pub fn storage_class(&self) -> StorageClass {
        match self {
            DataVector::F32(_) => StorageClass::F32,
            DataVector::F64(_) => StorageClass::F64,
            DataVector::I16(_) => StorageClass::I16,
            DataVector::I32(_) => StorageClass::I32,
            DataVector::I64(_) => StorageClass::I64,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            DataVector::F32(v) => v.len(),
            DataVector::F64(v) => v.len(),
            DataVector::I16(v) => v.len(),
            DataVector::I32(v) => v.len(),
            DataVector::I64(v) => v.len(),
        }
    }

    /// True when the vector has no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at index, widened to f64
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            DataVector::F32(v) => v.get(index).map(|&x| x.to_f64()),
            DataVector::F64(v) => v.get(index).copied(),
            DataVector::I16(v) => v.get(index).map(|&x| x.to_f64()),
            DataVector::I32(v) => v.get(index).map(|&x| x.to_f64()),
            DataVector::I64(v) => v.get(index).map(|&x| x.to_f64()),
        }
    }

    /// All samples widened to f64
    pub fn to_f64_vec(&self) -> Vec<f64> {
        fn widen<T: SampleElement>(v: &[T]) -> Vec<f64> {
            v.iter().map(|&x| x.to_f64()).collect()
        }
        match self {
            DataVector::F32(v) => widen(v),
            DataVector::F64(v) => v.clone(),
            DataVector::I16(v) => widen(v),
            DataVector::I32(v) => widen(v),
            DataVector::I64(v) => widen(v),
        }
    }

    /// Smallest sample, widened to f64; `None` when empty
    pub fn min(&self) -> Option<f64> {
        (0..self.len())
            .filter_map(|i| self.get(i))
            .fold(None, |acc, v| match acc {
                Some(m) if m <= v => Some(m),
                _ => Some(v),
            })
    }

    /// Largest sample, widened to f64; `None` when empty
    pub fn max(&self) -> Option<f64> {
        (0..self.len())
            .filter_map(|i| self.get(i))
            .fold(None, |acc, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Arithmetic mean, widened to f64; `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = (0..self.len()).filter_map(|i| self.get(i)).sum();
        Some(sum / self.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_class_round_trip() {
        for tag in 0..5u8 {
            let class = StorageClass::from_u8(tag).unwrap();
            assert_eq!(class.to_u8(), tag);
        }
        assert_eq!(StorageClass::from_u8(5), None);
        assert_eq!(
            StorageClass::try_from_u8(9).unwrap_err(),
            CoreError::InvalidStorageClass(9)
        );
    }

    #[test]
    fn test_storage_class_sizes() {
        assert_eq!(StorageClass::I16.size_bytes(), 2);
        assert_eq!(StorageClass::F32.size_bytes(), 4);
        assert_eq!(StorageClass::I32.size_bytes(), 4);
        assert_eq!(StorageClass::F64.size_bytes(), 8);
        assert_eq!(StorageClass::I64.size_bytes(), 8);
    }

    #[test]
    fn test_sample_element_conversions() {
        assert_eq!(f32::storage_class(), StorageClass::F32);
        assert_eq!(i16::from_f64(3.9), 3);
        assert_eq!(i32::from_f64(-2.5), -2);
        assert_eq!(f64::from_f64(1.5), 1.5);
        assert_eq!(1.5f32.to_f64(), 1.5);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_cast_and_stats() {
        let v = DataVector::cast(&[1.0, 2.0, 3.0, 4.0], StorageClass::I16);
        assert_eq!(v.storage_class(), StorageClass::I16);
        assert_eq!(v.len(), 4);
        assert_eq!(v.get(0), Some(1.0));
        assert_eq!(v.min(), Some(1.0));
        assert_eq!(v.max(), Some(4.0));
        assert_eq!(v.mean(), Some(2.5));
        assert_eq!(v.to_f64_vec(), alloc::vec![1.0, 2.0, 3.0, 4.0]);

        // integer cast truncates toward zero
        let w = DataVector::cast(&[1.9, -1.9], StorageClass::I32);
        assert_eq!(w.to_f64_vec(), alloc::vec![1.0, -1.0]);

        let empty = DataVector::cast(&[], StorageClass::F64);
        assert!(empty.is_empty());
        assert_eq!(empty.min(), None);
        assert_eq!(empty.mean(), None);
    }
}
