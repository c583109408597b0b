//! Redistribution of matrix-shaped sample data back into records
//!
//! External processing often flattens many records into one rectangular
//! matrix. `scatter` copies the columns back into their owning records,
//! truncates to each record's point count, casts to the declared storage
//! class, and re-validates the whole collection.

use crate::error::{Result, SeisError};
use crate::matrix::DenseMatrix;
use crate::record::Record;
use crate::validate::{validate, CheckGuard, RequiredField};
use hashbrown::HashMap;
use seisrec_core::{DataVector, StorageClass};

/// Copy matrix columns back into their owning records
///
/// `dep_owner[col]` / `ind_owner[col]` give the record index that owns the
/// column; dep columns owned by one record become its parallel components
/// in matrix order. Each column belongs to exactly one record. Every
/// record must own at least one dep column and at most one ind column; an
/// unevenly sampled record must own exactly one ind column. Rows beyond
/// `npts[i]` are truncated.
///
/// Derived header fields are recomputed and a full validation pass runs
/// with checking force-enabled; the prior toggle state is restored on
/// return.
pub fn scatter(
    records: &mut [Record],
    dep: &DenseMatrix,
    dep_owner: &[usize],
    ind: &DenseMatrix,
    ind_owner: &[usize],
    class: &[StorageClass],
    npts: &[usize],
) -> Result<()> {
    let count = records.len();
    if class.len() != count {
        return Err(SeisError::OwnershipMismatch(format!(
            "{} storage classes for {count} records",
            class.len()
        )));
    }
    if npts.len() != count {
        return Err(SeisError::OwnershipMismatch(format!(
            "{} point counts for {count} records",
            npts.len()
        )));
    }
    if dep_owner.len() != dep.cols() {
        return Err(SeisError::OwnershipMismatch(format!(
            "{} owners for {} dependent columns",
            dep_owner.len(),
            dep.cols()
        )));
    }
    if ind_owner.len() != ind.cols() {
        return Err(SeisError::OwnershipMismatch(format!(
            "{} owners for {} independent columns",
            ind_owner.len(),
            ind.cols()
        )));
    }

    let mut dep_cols: HashMap<usize, Vec<usize>> = HashMap::new();
    for (col, &owner) in dep_owner.iter().enumerate() {
        if owner >= count {
            return Err(SeisError::OwnershipMismatch(format!(
                "dependent column {col} claims record {owner} of {count}"
            )));
        }
        dep_cols.entry(owner).or_default().push(col);
    }

    let mut ind_cols: HashMap<usize, usize> = HashMap::new();
    for (col, &owner) in ind_owner.iter().enumerate() {
        if owner >= count {
            return Err(SeisError::OwnershipMismatch(format!(
                "independent column {col} claims record {owner} of {count}"
            )));
        }
        if ind_cols.insert(owner, col).is_some() {
            return Err(SeisError::OwnershipMismatch(format!(
                "record {owner} is claimed by more than one independent column"
            )));
        }
    }

    // resolve all ownership before mutating anything, so a failed call
    // leaves every record untouched
    for (i, rec) in records.iter().enumerate() {
        if !dep_cols.contains_key(&i) {
            return Err(SeisError::OwnershipMismatch(format!(
                "record {i} owns no dependent column"
            )));
        }
        if !ind_cols.contains_key(&i) && rec.logical("leven")? == Some(false) {
            return Err(SeisError::OwnershipMismatch(format!(
                "record {i} is unevenly sampled but owns no independent column"
            )));
        }
    }

    for (i, rec) in records.iter_mut().enumerate() {
        let columns = &dep_cols[&i];
        rec.dep = columns
            .iter()
            .map(|&col| truncated_cast(dep.col(col), npts[i], class[i]))
            .collect();
        rec.hasdata = true;
        rec.ind = ind_cols
            .get(&i)
            .map(|&col| truncated_cast(ind.col(col), npts[i], class[i]));
        rec.update_derived()?;
    }

    let _guard = CheckGuard::force_enable();
    validate(records, &[RequiredField::Dep]).into_result()
}

fn truncated_cast(column: &[f64], npts: usize, class: StorageClass) -> DataVector {
    let take = npts.min(column.len());
    DataVector::cast(&column[..take], class)
}
