//! Header layout tables for seismic record versions
//!
//! This module describes where every named field lives inside the flat
//! numeric header buffer. Layouts are static, immutable, and safe to share
//! across threads without locking.

pub mod fields;

use crate::error::{CoreError, Result};

/// Sentinel written into every numeric header slot that holds no value
pub const UNDEF_NUMERIC: f64 = -12345.0;

/// Sentinel byte sequence for unset string fields, space-padded to width
pub const UNDEF_STRING: &[u8] = b"-12345";

/// Padding byte for string fields (ASCII space)
pub const PAD_BYTE: u8 = b' ';

/// Header version newly built records are stamped with
pub const PREFERRED_VERSION: i32 = 6;

/// Typed sub-regions of the header buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Floating-point value occupying one slot
    Real,
    /// Integer value occupying one slot
    Integer,
    /// Enumerated code occupying one slot
    Enum,
    /// Logical flag occupying one slot (1.0 true, 0.0 false)
    Logical,
    /// Character data, one character per slot
    String,
}

/// A named field and its inclusive slot range inside the header buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as used by the exchange format
    pub name: &'static str,
    /// First slot of the field (0-based)
    pub first: usize,
    /// Last slot of the field (inclusive)
    pub last: usize,
}

impl FieldSpec {
    /// Number of slots the field occupies
    pub const fn width(&self) -> usize {
        self.last - self.first + 1
    }
}

/// An ordered run of fields sharing one class, with its covering extent
///
/// The extent may be wider than the named fields; unnamed slots inside it
/// are reserved and still receive the undefined sentinel when blanked.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub class: FieldClass,
    /// First slot covered by the group
    pub first: usize,
    /// Last slot covered by the group (inclusive)
    pub last: usize,
    /// Named fields inside the extent, in slot order
    pub fields: &'static [FieldSpec],
}

/// Immutable per-version description of the header buffer
#[derive(Debug, Clone, Copy)]
pub struct HeaderLayout {
    /// Version this layout applies to
    pub version: i32,
    /// Total number of slots in the flat header buffer
    pub size: usize,
    /// Numeric groups (real, integer, enum, logical) in slot order
    pub numeric_groups: &'static [FieldGroup],
    /// String groups in slot order
    pub string_groups: &'static [FieldGroup],
}

static LAYOUT_V6: HeaderLayout = HeaderLayout {
    version: 6,
    size: fields::CLASSIC_SIZE,
    numeric_groups: fields::CLASSIC_NUMERIC_GROUPS,
    string_groups: fields::CLASSIC_STRING_GROUPS,
};

// Version 7 extends the on-disk format with a trailing footer handled by
// the I/O layer; the in-memory header layout is identical to version 6.
static LAYOUT_V7: HeaderLayout = HeaderLayout {
    version: 7,
    size: fields::CLASSIC_SIZE,
    numeric_groups: fields::CLASSIC_NUMERIC_GROUPS,
    string_groups: fields::CLASSIC_STRING_GROUPS,
};

impl HeaderLayout {
    /// Look up the layout for a header version
    pub fn for_version(version: i32) -> Result<&'static HeaderLayout> {
        match version {
            6 => Ok(&LAYOUT_V6),
            7 => Ok(&LAYOUT_V7),
            v => Err(CoreError::UnknownVersion(v)),
        }
    }

    /// Find a named field and its class
    pub fn field(&self, name: &str) -> Option<(&'static FieldSpec, FieldClass)> {
        for group in self.numeric_groups.iter().chain(self.string_groups) {
            for spec in group.fields {
                if spec.name == name {
                    return Some((spec, group.class));
                }
            }
        }
        None
    }

    /// Find a named single-slot numeric field
    pub fn numeric_field(&self, name: &str) -> Result<&'static FieldSpec> {
        match self.field(name) {
            Some((spec, class)) if class != FieldClass::String => Ok(spec),
            _ => Err(CoreError::UnknownField),
        }
    }

    /// Find a named string field
    pub fn string_field(&self, name: &str) -> Result<&'static FieldSpec> {
        match self.field(name) {
            Some((spec, FieldClass::String)) => Ok(spec),
            _ => Err(CoreError::UnknownField),
        }
    }
}

/// Record filetypes, with their on-disk enum codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Filetype {
    /// Evenly or unevenly sampled time series
    #[cfg_attr(feature = "serde", serde(rename = "Time Series File"))]
    TimeSeries = 1,
    /// Spectrum stored as real and imaginary components
    #[cfg_attr(feature = "serde", serde(rename = "Spectral File-Real/Imag"))]
    SpectralRealImag = 2,
    /// Spectrum stored as amplitude and phase components
    #[cfg_attr(feature = "serde", serde(rename = "Spectral File-Ampl/Phase"))]
    SpectralAmplPhase = 3,
    /// Generic x-versus-y data
    #[cfg_attr(feature = "serde", serde(rename = "General X vs Y file"))]
    GeneralXy = 4,
    /// Gridded xyz data
    #[cfg_attr(feature = "serde", serde(rename = "General XYZ (3-D) file"))]
    GeneralXyz = 51,
}

impl Filetype {
    /// Convert from the on-disk `iftype` code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Filetype::TimeSeries),
            2 => Some(Filetype::SpectralRealImag),
            3 => Some(Filetype::SpectralAmplPhase),
            4 => Some(Filetype::GeneralXy),
            51 => Some(Filetype::GeneralXyz),
            _ => None,
        }
    }

    /// Convert to the on-disk `iftype` code
    pub const fn to_code(self) -> i32 {
        self as i32
    }

    /// Long description used by the exchange format
    pub const fn description(self) -> &'static str {
        match self {
            Filetype::TimeSeries => "Time Series File",
            Filetype::SpectralRealImag => "Spectral File-Real/Imag",
            Filetype::SpectralAmplPhase => "Spectral File-Ampl/Phase",
            Filetype::GeneralXy => "General X vs Y file",
            Filetype::GeneralXyz => "General XYZ (3-D) file",
        }
    }

    /// Look a filetype up by its long description
    pub fn from_description(s: &str) -> Option<Self> {
        [
            Filetype::TimeSeries,
            Filetype::SpectralRealImag,
            Filetype::SpectralAmplPhase,
            Filetype::GeneralXy,
            Filetype::GeneralXyz,
        ]
        .into_iter()
        .find(|ft| ft.description() == s)
    }
}

impl core::fmt::Display for Filetype {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Header versions a filetype may legally carry
pub const fn valid_versions(filetype: Filetype) -> &'static [i32] {
    // Every filetype is defined for the classic and footered layouts.
    match filetype {
        Filetype::TimeSeries
        | Filetype::SpectralRealImag
        | Filetype::SpectralAmplPhase
        | Filetype::GeneralXy
        | Filetype::GeneralXyz => &[6, 7],
    }
}

/// Check a filetype/version pair against the valid-version table
pub fn version_is_valid(filetype: Filetype, version: i32) -> bool {
    valid_versions(filetype).contains(&version)
}

/// Byte order of a record's on-disk representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    /// Byte order of the running machine
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Parse the lowercase name used by the exchange format
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "big" => Some(ByteOrder::Big),
            "little" => Some(ByteOrder::Little),
            _ => None,
        }
    }

    /// Lowercase name used by the exchange format
    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lookup() {
        assert_eq!(HeaderLayout::for_version(6).unwrap().size, 302);
        assert_eq!(HeaderLayout::for_version(7).unwrap().size, 302);
        assert_eq!(
            HeaderLayout::for_version(5).unwrap_err(),
            CoreError::UnknownVersion(5)
        );
        assert_eq!(
            HeaderLayout::for_version(-1).unwrap_err(),
            CoreError::UnknownVersion(-1)
        );
    }

    #[test]
    fn test_groups_partition_buffer() {
        let layout = HeaderLayout::for_version(6).unwrap();
        let mut next = 0;
        for group in layout.numeric_groups.iter().chain(layout.string_groups) {
            assert_eq!(group.first, next, "gap before {:?} group", group.class);
            assert!(group.last >= group.first);
            next = group.last + 1;
        }
        assert_eq!(next, layout.size);
    }

    #[test]
    fn test_fields_disjoint_and_inside_extent() {
        let layout = HeaderLayout::for_version(6).unwrap();
        for group in layout.numeric_groups.iter().chain(layout.string_groups) {
            let mut next = group.first;
            for spec in group.fields {
                assert!(spec.first >= next, "overlap at {}", spec.name);
                assert!(spec.last <= group.last, "{} spills past extent", spec.name);
                assert!(spec.first <= spec.last);
                next = spec.last + 1;
            }
        }
    }

    #[test]
    fn test_field_lookup() {
        let layout = HeaderLayout::for_version(6).unwrap();
        let (delta, class) = layout.field("delta").unwrap();
        assert_eq!(class, FieldClass::Real);
        assert_eq!((delta.first, delta.last), (0, 0));

        let (npts, class) = layout.field("npts").unwrap();
        assert_eq!(class, FieldClass::Integer);
        assert_eq!(npts.first, 79);

        let (leven, class) = layout.field("leven").unwrap();
        assert_eq!(class, FieldClass::Logical);
        assert_eq!(leven.first, 105);

        let (kevnm, class) = layout.field("kevnm").unwrap();
        assert_eq!(class, FieldClass::String);
        assert_eq!(kevnm.width(), 16);

        assert!(layout.field("nonesuch").is_none());
        assert_eq!(
            layout.numeric_field("kstnm").unwrap_err(),
            CoreError::UnknownField
        );
        assert_eq!(
            layout.string_field("delta").unwrap_err(),
            CoreError::UnknownField
        );
    }

    #[test]
    fn test_filetype_codes() {
        assert_eq!(Filetype::from_code(1), Some(Filetype::TimeSeries));
        assert_eq!(Filetype::from_code(51), Some(Filetype::GeneralXyz));
        assert_eq!(Filetype::from_code(5), None);
        assert_eq!(Filetype::GeneralXy.to_code(), 4);
        assert_eq!(
            Filetype::from_description("General X vs Y file"),
            Some(Filetype::GeneralXy)
        );
        assert_eq!(Filetype::from_description("nope"), None);
    }

    #[test]
    fn test_valid_versions() {
        assert!(version_is_valid(Filetype::TimeSeries, 6));
        assert!(version_is_valid(Filetype::GeneralXy, 7));
        assert!(!version_is_valid(Filetype::GeneralXy, 101));
    }

    #[test]
    fn test_byteorder_names() {
        assert_eq!(ByteOrder::from_name("big"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_name("little"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_name("middle"), None);
        assert_eq!(ByteOrder::Little.name(), "little");
        let native = ByteOrder::native();
        assert!(native == ByteOrder::Big || native == ByteOrder::Little);
    }
}
