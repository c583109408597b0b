//! Undefined-value initialization and field access for header buffers
//!
//! A blanked buffer carries the undefined sentinel in every slot so the I/O
//! layer can serialize it byte-for-byte as a legal on-disk header.

use crate::error::{CoreError, Result};
use crate::layout::{HeaderLayout, PAD_BYTE, UNDEF_NUMERIC, UNDEF_STRING};

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Allocate a header buffer with every field set to its undefined sentinel
///
/// Numeric group extents are filled with [`UNDEF_NUMERIC`]; string fields
/// get [`UNDEF_STRING`] left-aligned and space-padded to their width.
/// Deterministic and idempotent.
#[cfg(feature = "alloc")]
pub fn blank(layout: &HeaderLayout) -> Vec<f64> {
    let mut head = vec![0.0f64; layout.size];
    for group in layout.numeric_groups {
        for slot in &mut head[group.first..=group.last] {
            *slot = UNDEF_NUMERIC;
        }
    }
    for group in layout.string_groups {
        for slot in &mut head[group.first..=group.last] {
            *slot = PAD_BYTE as f64;
        }
        for spec in group.fields {
            for (i, &b) in UNDEF_STRING.iter().enumerate() {
                head[spec.first + i] = b as f64;
            }
        }
    }
    head
}

/// True when a numeric slot holds the undefined sentinel
pub fn is_undefined_numeric(value: f64) -> bool {
    value == UNDEF_NUMERIC
}

/// Write a single-slot numeric field by name
pub fn write_numeric(head: &mut [f64], layout: &HeaderLayout, name: &str, value: f64) -> Result<()> {
    if head.len() != layout.size {
        return Err(CoreError::HeadBufferSize);
    }
    let spec = layout.numeric_field(name)?;
    head[spec.first] = value;
    Ok(())
}

/// Read a single-slot numeric field by name; `None` when undefined
pub fn read_numeric(head: &[f64], layout: &HeaderLayout, name: &str) -> Result<Option<f64>> {
    if head.len() != layout.size {
        return Err(CoreError::HeadBufferSize);
    }
    let spec = layout.numeric_field(name)?;
    let value = head[spec.first];
    if is_undefined_numeric(value) {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Write a string field by name, truncating to the field width and
/// space-padding the remainder
pub fn write_string(head: &mut [f64], layout: &HeaderLayout, name: &str, value: &str) -> Result<()> {
    if head.len() != layout.size {
        return Err(CoreError::HeadBufferSize);
    }
    let spec = layout.string_field(name)?;
    let bytes = value.as_bytes();
    for (i, slot) in (spec.first..=spec.last).enumerate() {
        head[slot] = *bytes.get(i).unwrap_or(&PAD_BYTE) as f64;
    }
    Ok(())
}

/// Read a string field by name, trailing padding stripped; `None` when the
/// field holds the undefined sentinel
#[cfg(feature = "alloc")]
pub fn read_string(head: &[f64], layout: &HeaderLayout, name: &str) -> Result<Option<String>> {
    if head.len() != layout.size {
        return Err(CoreError::HeadBufferSize);
    }
    let spec = layout.string_field(name)?;
    let mut out = String::with_capacity(spec.width());
    for slot in spec.first..=spec.last {
        out.push(head[slot] as u8 as char);
    }
    let trimmed = out.trim_end_matches(PAD_BYTE as char);
    if trimmed.as_bytes() == UNDEF_STRING {
        return Ok(None);
    }
    Ok(Some(String::from(trimmed)))
}

/// Expose a header buffer as raw bytes for the I/O collaborator
pub fn head_bytes(head: &[f64]) -> &[u8] {
    bytemuck::cast_slice(head)
}
