//! Field position tables for the classic 302-slot header
//!
//! Slot assignments reproduce the legacy exchange format word-for-word;
//! they are the binary contract and must not be reordered.

use super::{FieldClass, FieldGroup, FieldSpec};

/// Total slot count of the classic header buffer
pub const CLASSIC_SIZE: usize = 302;

const fn word(name: &'static str, slot: usize) -> FieldSpec {
    FieldSpec {
        name,
        first: slot,
        last: slot,
    }
}

const fn span(name: &'static str, first: usize, last: usize) -> FieldSpec {
    FieldSpec { name, first, last }
}

/// Real-valued fields, words 0-62 (63-69 reserved)
pub const REAL_FIELDS: &[FieldSpec] = &[
    word("delta", 0),
    word("depmin", 1),
    word("depmax", 2),
    word("scale", 3),
    word("odelta", 4),
    word("b", 5),
    word("e", 6),
    word("o", 7),
    word("a", 8),
    word("fmt", 9),
    word("t0", 10),
    word("t1", 11),
    word("t2", 12),
    word("t3", 13),
    word("t4", 14),
    word("t5", 15),
    word("t6", 16),
    word("t7", 17),
    word("t8", 18),
    word("t9", 19),
    word("f", 20),
    word("resp0", 21),
    word("resp1", 22),
    word("resp2", 23),
    word("resp3", 24),
    word("resp4", 25),
    word("resp5", 26),
    word("resp6", 27),
    word("resp7", 28),
    word("resp8", 29),
    word("resp9", 30),
    word("stla", 31),
    word("stlo", 32),
    word("stel", 33),
    word("stdp", 34),
    word("evla", 35),
    word("evlo", 36),
    word("evel", 37),
    word("evdp", 38),
    word("mag", 39),
    word("user0", 40),
    word("user1", 41),
    word("user2", 42),
    word("user3", 43),
    word("user4", 44),
    word("user5", 45),
    word("user6", 46),
    word("user7", 47),
    word("user8", 48),
    word("user9", 49),
    word("dist", 50),
    word("az", 51),
    word("baz", 52),
    word("gcarc", 53),
    word("sb", 54),
    word("sdelta", 55),
    word("depmen", 56),
    word("cmpaz", 57),
    word("cmpinc", 58),
    word("xminimum", 59),
    word("xmaximum", 60),
    word("yminimum", 61),
    word("ymaximum", 62),
];

/// Integer fields, words 70-83 (84 reserved)
pub const INTEGER_FIELDS: &[FieldSpec] = &[
    word("nzyear", 70),
    word("nzjday", 71),
    word("nzhour", 72),
    word("nzmin", 73),
    word("nzsec", 74),
    word("nzmsec", 75),
    word("nvhdr", 76),
    word("norid", 77),
    word("nevid", 78),
    word("npts", 79),
    word("nsnpts", 80),
    word("nwfid", 81),
    word("nxsize", 82),
    word("nysize", 83),
];

/// Enumerated fields, words 85-96 (88 and 97-104 reserved)
pub const ENUM_FIELDS: &[FieldSpec] = &[
    word("iftype", 85),
    word("idep", 86),
    word("iztype", 87),
    word("iinst", 89),
    word("istreg", 90),
    word("ievreg", 91),
    word("ievtyp", 92),
    word("iqual", 93),
    word("isynth", 94),
    word("imagtyp", 95),
    word("imagsrc", 96),
];

/// Logical fields, words 105-108 (109 reserved)
pub const LOGICAL_FIELDS: &[FieldSpec] = &[
    word("leven", 105),
    word("lpspol", 106),
    word("lovrok", 107),
    word("lcalda", 108),
];

/// String fields, one character per slot; kevnm is double width
pub const STRING_FIELDS: &[FieldSpec] = &[
    span("kstnm", 110, 117),
    span("kevnm", 118, 133),
    span("khole", 134, 141),
    span("ko", 142, 149),
    span("ka", 150, 157),
    span("kt0", 158, 165),
    span("kt1", 166, 173),
    span("kt2", 174, 181),
    span("kt3", 182, 189),
    span("kt4", 190, 197),
    span("kt5", 198, 205),
    span("kt6", 206, 213),
    span("kt7", 214, 221),
    span("kt8", 222, 229),
    span("kt9", 230, 237),
    span("kf", 238, 245),
    span("kuser0", 246, 253),
    span("kuser1", 254, 261),
    span("kuser2", 262, 269),
    span("kcmpnm", 270, 277),
    span("knetwk", 278, 285),
    span("kdatrd", 286, 293),
    span("kinst", 294, 301),
];

/// Numeric groups of the classic layout, in slot order
pub const CLASSIC_NUMERIC_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        class: FieldClass::Real,
        first: 0,
        last: 69,
        fields: REAL_FIELDS,
    },
    FieldGroup {
        class: FieldClass::Integer,
        first: 70,
        last: 84,
        fields: INTEGER_FIELDS,
    },
    FieldGroup {
        class: FieldClass::Enum,
        first: 85,
        last: 104,
        fields: ENUM_FIELDS,
    },
    FieldGroup {
        class: FieldClass::Logical,
        first: 105,
        last: 109,
        fields: LOGICAL_FIELDS,
    },
];

/// String groups of the classic layout
pub const CLASSIC_STRING_GROUPS: &[FieldGroup] = &[FieldGroup {
    class: FieldClass::String,
    first: 110,
    last: 301,
    fields: STRING_FIELDS,
}];
