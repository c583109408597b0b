//! Structural validation of record collections
//!
//! Validation returns structured diagnostics instead of failing outright;
//! the caller decides whether a defect is fatal or advisory. Mixed
//! filetypes, versions, or byte orders in one collection never block an
//! otherwise clean report.

use crate::error::SeisError;
use crate::record::Record;
use hashbrown::HashSet;
use seisrec_core::{ByteOrder, Filetype, HeaderLayout};
use serde_json::Value;
use std::cell::Cell;

std::thread_local! {
    // Per-thread rather than process-wide: records are only ever mutated by
    // the thread holding them, and a disabled toggle must not leak into
    // unrelated work on other threads.
    static CHECKING: Cell<bool> = const { Cell::new(true) };
}

/// True when structural validation is currently enabled on this thread
pub fn checking_enabled() -> bool {
    CHECKING.with(Cell::get)
}

/// Scoped override of the validation toggle
///
/// The prior state is restored when the guard drops, on every exit path.
/// Compound operations disable checking around inner calls they have
/// already validated, and force it back on for their own final pass.
#[must_use = "the toggle reverts as soon as the guard is dropped"]
pub struct CheckGuard {
    prior: bool,
}

impl CheckGuard {
    /// Disable validation until the guard drops
    pub fn disable() -> Self {
        Self::set(false)
    }

    /// Enable validation until the guard drops, regardless of prior state
    pub fn force_enable() -> Self {
        Self::set(true)
    }

    fn set(value: bool) -> Self {
        CheckGuard {
            prior: CHECKING.with(|c| c.replace(value)),
        }
    }
}

impl Drop for CheckGuard {
    fn drop(&mut self) {
        let prior = self.prior;
        CHECKING.with(|c| c.set(prior));
    }
}

/// Fields a record collection can be required to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Path,
    Name,
    Filetype,
    Version,
    Byteorder,
    Hasdata,
    Misc,
    Head,
    /// Dependent samples; requiring this also requires `hasdata`
    Dep,
    /// Independent samples
    Ind,
}

impl RequiredField {
    /// The eight structural fields every record must carry
    pub const STRUCTURAL: [RequiredField; 8] = [
        RequiredField::Path,
        RequiredField::Name,
        RequiredField::Filetype,
        RequiredField::Version,
        RequiredField::Byteorder,
        RequiredField::Hasdata,
        RequiredField::Misc,
        RequiredField::Head,
    ];

    /// Field name as it appears on a record
    pub const fn name(self) -> &'static str {
        match self {
            RequiredField::Path => "path",
            RequiredField::Name => "name",
            RequiredField::Filetype => "filetype",
            RequiredField::Version => "version",
            RequiredField::Byteorder => "byteorder",
            RequiredField::Hasdata => "hasdata",
            RequiredField::Misc => "misc",
            RequiredField::Head => "head",
            RequiredField::Dep => "dep",
            RequiredField::Ind => "ind",
        }
    }
}

/// A fatal structural defect in a record collection
#[derive(Debug, Clone, PartialEq)]
pub enum Defect {
    /// The input is not a collection of record-like structures
    NotAStructure,
    /// The collection has no records
    Empty,
    /// The collection is not one-dimensional
    NotAVector,
    /// A required field is missing from at least one record
    ReqFieldNotFound(String),
    /// A field holds an illegal value
    BadField {
        index: usize,
        field: &'static str,
        reason: String,
    },
    /// The filetype/version pair is not registered
    UnknownVersion {
        index: usize,
        filetype: String,
        version: i32,
    },
    /// The header buffer does not match the layout size
    HeadSize {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// Sample data was required but `hasdata` is false
    MissingData { index: usize },
}

impl std::fmt::Display for Defect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Defect::NotAStructure => write!(f, "input is not a collection of records"),
            Defect::Empty => write!(f, "record collection is empty"),
            Defect::NotAVector => write!(f, "record collection is not one-dimensional"),
            Defect::ReqFieldNotFound(name) => {
                write!(f, "required field '{name}' not found in all records")
            }
            Defect::BadField {
                index,
                field,
                reason,
            } => write!(f, "record {index}: field '{field}' {reason}"),
            Defect::UnknownVersion {
                index,
                filetype,
                version,
            } => write!(
                f,
                "record {index}: version {version} is not valid for '{filetype}'"
            ),
            Defect::HeadSize {
                index,
                expected,
                found,
            } => write!(
                f,
                "record {index}: header has {found} slots, layout requires {expected}"
            ),
            Defect::MissingData { index } => {
                write!(f, "record {index}: sample data required but not in memory")
            }
        }
    }
}

/// A non-fatal advisory about a record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// More than one filetype in the collection
    MixedFiletypes(usize),
    /// More than one header version in the collection
    MixedVersions(usize),
    /// More than one byte order in the collection
    MixedByteOrders(usize),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::MixedFiletypes(n) => write!(f, "collection mixes {n} filetypes"),
            Advisory::MixedVersions(n) => write!(f, "collection mixes {n} header versions"),
            Advisory::MixedByteOrders(n) => write!(f, "collection mixes {n} byte orders"),
        }
    }
}

/// Outcome of a validation pass: at most one defect, any advisories
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    defect: Option<Defect>,
    advisories: Vec<Advisory>,
}

impl Report {
    fn ok() -> Self {
        Report::default()
    }

    fn fail(defect: Defect) -> Self {
        Report {
            defect: Some(defect),
            advisories: Vec::new(),
        }
    }

    /// True when no defect was found; advisories do not count
    pub fn is_ok(&self) -> bool {
        self.defect.is_none()
    }

    /// The defect, if any
    pub fn defect(&self) -> Option<&Defect> {
        self.defect.as_ref()
    }

    /// Advisories gathered during the pass
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Surface the defect as an error, discarding advisories
    pub fn into_result(self) -> Result<(), SeisError> {
        match self.defect {
            None => Ok(()),
            Some(_) => Err(SeisError::Validation(self)),
        }
    }
}

/// Validate a typed record collection
///
/// `extra` names fields the caller needs beyond the structural eight;
/// requesting [`RequiredField::Dep`] demands `hasdata` on every record
/// even when the dependent payload itself is empty. The first defect wins;
/// advisories cover the records scanned up to that point.
pub fn validate(records: &[Record], extra: &[RequiredField]) -> Report {
    if !checking_enabled() {
        return Report::ok();
    }
    if records.is_empty() {
        return Report::fail(Defect::Empty);
    }

    let want_dep = extra.contains(&RequiredField::Dep);
    let mut filetypes: HashSet<Filetype> = HashSet::new();
    let mut versions: HashSet<i32> = HashSet::new();
    let mut orders: HashSet<ByteOrder> = HashSet::new();
    let mut defect = None;

    for (index, rec) in records.iter().enumerate() {
        filetypes.insert(rec.filetype);
        versions.insert(rec.version);
        orders.insert(rec.byteorder);

        defect = check_record(index, rec, want_dep);
        if defect.is_some() {
            break;
        }
    }

    let mut report = Report {
        defect,
        advisories: Vec::new(),
    };
    push_advisories(&mut report, filetypes.len(), versions.len(), orders.len());
    report
}

fn check_record(index: usize, rec: &Record, want_dep: bool) -> Option<Defect> {
    if rec.path.is_empty() {
        return Some(Defect::BadField {
            index,
            field: "path",
            reason: String::from("is empty"),
        });
    }
    if rec.name.is_empty() {
        return Some(Defect::BadField {
            index,
            field: "name",
            reason: String::from("is empty"),
        });
    }
    if !seisrec_core::version_is_valid(rec.filetype, rec.version) {
        return Some(Defect::UnknownVersion {
            index,
            filetype: rec.filetype.description().into(),
            version: rec.version,
        });
    }
    // valid pairs always have a layout; guard anyway
    let expected = match HeaderLayout::for_version(rec.version) {
        Ok(layout) => layout.size,
        Err(_) => {
            return Some(Defect::UnknownVersion {
                index,
                filetype: rec.filetype.description().into(),
                version: rec.version,
            })
        }
    };
    if rec.head.len() != expected {
        return Some(Defect::HeadSize {
            index,
            expected,
            found: rec.head.len(),
        });
    }
    if want_dep && !rec.hasdata {
        return Some(Defect::MissingData { index });
    }
    None
}

fn push_advisories(report: &mut Report, filetypes: usize, versions: usize, orders: usize) {
    if filetypes > 1 {
        report.advisories.push(Advisory::MixedFiletypes(filetypes));
    }
    if versions > 1 {
        report.advisories.push(Advisory::MixedVersions(versions));
    }
    if orders > 1 {
        report.advisories.push(Advisory::MixedByteOrders(orders));
    }
}

/// Validate an untyped record bag before conversion into [`Record`]s
///
/// Accepts the JSON shape produced by serializing a record collection:
/// a one-dimensional array of objects. Shape defects are reported in
/// priority order: not-a-structure, empty, not-a-vector. `extra` adds
/// required field names beyond the structural eight; `"dep"` also demands
/// `hasdata == true`.
pub fn validate_value(value: &Value, extra: &[&str]) -> Report {
    if !checking_enabled() {
        return Report::ok();
    }

    let items = match value {
        Value::Array(items) => items,
        _ => return Report::fail(Defect::NotAStructure),
    };
    if items.iter().any(|v| !v.is_object() && !v.is_array()) {
        return Report::fail(Defect::NotAStructure);
    }
    if items.is_empty() {
        return Report::fail(Defect::Empty);
    }
    if items.iter().any(Value::is_array) {
        return Report::fail(Defect::NotAVector);
    }

    // presence of the whole required set, across every record
    let mut required: Vec<&str> = RequiredField::STRUCTURAL
        .iter()
        .map(|f| f.name())
        .collect();
    for &name in extra {
        if !required.contains(&name) {
            required.push(name);
        }
    }
    for name in &required {
        for item in items {
            // every item is an object once the shape checks pass
            let Some(obj) = item.as_object() else { continue };
            if !obj.contains_key(*name) {
                return Report::fail(Defect::ReqFieldNotFound(String::from(*name)));
            }
        }
    }

    let want_dep = extra.contains(&"dep");
    let mut filetypes: HashSet<String> = HashSet::new();
    let mut versions: HashSet<i64> = HashSet::new();
    let mut orders: HashSet<String> = HashSet::new();
    let mut defect = None;

    for (index, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else { continue };
        if let Some(s) = obj["filetype"].as_str() {
            filetypes.insert(String::from(s));
        }
        if let Some(v) = obj["version"].as_i64() {
            versions.insert(v);
        }
        if let Some(s) = obj["byteorder"].as_str() {
            orders.insert(String::from(s));
        }

        defect = check_value_record(index, obj, want_dep);
        if defect.is_some() {
            break;
        }
    }

    let mut report = Report {
        defect,
        advisories: Vec::new(),
    };
    push_advisories(&mut report, filetypes.len(), versions.len(), orders.len());
    report
}

fn check_value_record(
    index: usize,
    obj: &serde_json::Map<String, Value>,
    want_dep: bool,
) -> Option<Defect> {
    for field in ["path", "name"] {
        match obj[field].as_str() {
            Some(s) if !s.is_empty() => {}
            Some(_) => {
                return Some(Defect::BadField {
                    index,
                    field,
                    reason: String::from("is empty"),
                })
            }
            None => {
                return Some(Defect::BadField {
                    index,
                    field,
                    reason: String::from("is not a string"),
                })
            }
        }
    }

    match obj["byteorder"].as_str() {
        Some(s) if ByteOrder::from_name(s).is_some() => {}
        _ => {
            return Some(Defect::BadField {
                index,
                field: "byteorder",
                reason: String::from("must be \"big\" or \"little\""),
            })
        }
    }

    let hasdata = match obj["hasdata"].as_bool() {
        Some(b) => b,
        None => {
            return Some(Defect::BadField {
                index,
                field: "hasdata",
                reason: String::from("is not a boolean"),
            })
        }
    };

    let filetype = match obj["filetype"].as_str().and_then(Filetype::from_description) {
        Some(ft) => ft,
        None => {
            return Some(Defect::BadField {
                index,
                field: "filetype",
                reason: String::from("is not a known filetype"),
            })
        }
    };
    let version = match obj["version"].as_i64() {
        Some(v) if i32::try_from(v).is_ok() => v as i32,
        _ => {
            return Some(Defect::BadField {
                index,
                field: "version",
                reason: String::from("is not an integer"),
            })
        }
    };
    if !seisrec_core::version_is_valid(filetype, version) {
        return Some(Defect::UnknownVersion {
            index,
            filetype: filetype.description().into(),
            version,
        });
    }

    // the layout exists for every registered pair
    let expected = match HeaderLayout::for_version(version) {
        Ok(layout) => layout.size,
        Err(_) => {
            return Some(Defect::UnknownVersion {
                index,
                filetype: filetype.description().into(),
                version,
            })
        }
    };
    match obj["head"].as_array() {
        Some(head) => {
            if head.iter().any(|v| !v.is_number()) {
                return Some(Defect::BadField {
                    index,
                    field: "head",
                    reason: String::from("is not a flat numeric column"),
                });
            }
            if head.len() != expected {
                return Some(Defect::HeadSize {
                    index,
                    expected,
                    found: head.len(),
                });
            }
        }
        None => {
            return Some(Defect::BadField {
                index,
                field: "head",
                reason: String::from("is not an array"),
            })
        }
    }

    if want_dep && !hasdata {
        return Some(Defect::MissingData { index });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_records;
    use serde_json::json;

    fn named_records(n: usize) -> Vec<Record> {
        let mut series = Vec::new();
        for _ in 0..n {
            series.push(vec![0.0, 1.0, 2.0, 3.0]);
            series.push(vec![1.0, 2.0, 3.0, 4.0]);
        }
        let mut records = build_records(&series).unwrap();
        for (i, rec) in records.iter_mut().enumerate() {
            rec.name = format!("rec{i}.sac");
        }
        records
    }

    #[test]
    fn test_valid_collection_is_ok_and_idempotent() {
        let records = named_records(3);
        let first = validate(&records, &[RequiredField::Dep]);
        let second = validate(&records, &[RequiredField::Dep]);
        assert!(first.is_ok());
        assert_eq!(first, second);
        assert!(first.advisories().is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let report = validate(&[], &[]);
        assert_eq!(report.defect(), Some(&Defect::Empty));
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_blank_name_is_a_defect() {
        let mut records = named_records(2);
        records[1].name.clear();
        let report = validate(&records, &[]);
        assert_eq!(
            report.defect(),
            Some(&Defect::BadField {
                index: 1,
                field: "name",
                reason: String::from("is empty"),
            })
        );
    }

    #[test]
    fn test_head_size_checked() {
        let mut records = named_records(1);
        records[0].head.truncate(100);
        let report = validate(&records, &[]);
        assert_eq!(
            report.defect(),
            Some(&Defect::HeadSize {
                index: 0,
                expected: 302,
                found: 100,
            })
        );
    }

    #[test]
    fn test_unregistered_version() {
        let mut records = named_records(1);
        records[0].version = 99;
        let report = validate(&records, &[]);
        assert!(matches!(
            report.defect(),
            Some(Defect::UnknownVersion { version: 99, .. })
        ));
    }

    #[test]
    fn test_dep_requires_hasdata() {
        let mut records = named_records(2);
        records[1].hasdata = false;
        assert!(validate(&records, &[]).is_ok());
        let report = validate(&records, &[RequiredField::Dep]);
        assert_eq!(report.defect(), Some(&Defect::MissingData { index: 1 }));
    }

    #[test]
    fn test_mixed_versions_are_advisory_only() {
        let mut records = named_records(2);
        records[1].version = 7;
        records[1].set_field("nvhdr", 7.0).unwrap();
        let report = validate(&records, &[]);
        assert!(report.is_ok());
        assert_eq!(report.advisories(), &[Advisory::MixedVersions(2)]);
    }

    #[test]
    fn test_guard_disables_and_restores() {
        assert!(checking_enabled());
        {
            let _guard = CheckGuard::disable();
            assert!(!checking_enabled());
            // even an empty collection passes while disabled
            assert!(validate(&[], &[]).is_ok());
            {
                let _inner = CheckGuard::force_enable();
                assert!(checking_enabled());
            }
            assert!(!checking_enabled());
        }
        assert!(checking_enabled());
    }

    #[test]
    fn test_value_not_a_structure() {
        let report = validate_value(&json!(42), &[]);
        assert_eq!(report.defect(), Some(&Defect::NotAStructure));
        let report = validate_value(&json!(["plain string"]), &[]);
        assert_eq!(report.defect(), Some(&Defect::NotAStructure));
    }

    #[test]
    fn test_value_empty_and_not_a_vector() {
        let report = validate_value(&json!([]), &[]);
        assert_eq!(report.defect(), Some(&Defect::Empty));
        let report = validate_value(&json!([[{"path": "."}]]), &[]);
        assert_eq!(report.defect(), Some(&Defect::NotAVector));
    }

    #[test]
    fn test_value_missing_field() {
        let mut records = named_records(1);
        records[0].name = "a.sac".into();
        let mut json = serde_json::to_value(&records).unwrap();
        json[0].as_object_mut().unwrap().remove("name");
        let report = validate_value(&json, &[]);
        assert_eq!(
            report.defect(),
            Some(&Defect::ReqFieldNotFound(String::from("name")))
        );
    }

    #[test]
    fn test_value_round_trip_of_real_records() {
        let records = named_records(2);
        let json = serde_json::to_value(&records).unwrap();
        let report = validate_value(&json, &["dep"]);
        assert!(report.is_ok(), "{:?}", report.defect());
    }

    #[test]
    fn test_value_bad_byteorder_and_hasdata() {
        let records = named_records(1);
        let mut json = serde_json::to_value(&records).unwrap();
        json[0]["byteorder"] = json!("middle");
        let report = validate_value(&json, &[]);
        assert!(matches!(
            report.defect(),
            Some(Defect::BadField { field: "byteorder", .. })
        ));

        let mut json = serde_json::to_value(&records).unwrap();
        json[0]["hasdata"] = json!("yes");
        let report = validate_value(&json, &[]);
        assert!(matches!(
            report.defect(),
            Some(Defect::BadField { field: "hasdata", .. })
        ));
    }

    #[test]
    fn test_value_dep_requires_hasdata() {
        let records = named_records(1);
        let mut json = serde_json::to_value(&records).unwrap();
        json[0]["hasdata"] = json!(false);
        assert!(validate_value(&json, &[]).is_ok());
        let report = validate_value(&json, &["dep"]);
        assert_eq!(report.defect(), Some(&Defect::MissingData { index: 0 }));
    }
}
