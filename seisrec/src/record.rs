//! The in-memory seismic record
//!
//! A record pairs one flat header buffer with its sample payload. All
//! header access goes through the layout table for the record's version;
//! there is no runtime reflection.

use crate::error::Result;
use seisrec_core::{
    blank, head_bytes, read_numeric, read_string, write_numeric, write_string, ByteOrder,
    CoreError, DataVector, Filetype, HeaderLayout,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One seismic time-series record: header plus sample payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Directory the record came from or will be written to
    pub path: String,
    /// Logical file name; empty until the caller assigns one
    pub name: String,
    /// Filetype tag; must be valid for `version`
    pub filetype: Filetype,
    /// Header version selecting the layout table
    pub version: i32,
    /// On-disk byte order
    pub byteorder: ByteOrder,
    /// True once sample payload has been materialized in memory
    pub hasdata: bool,
    /// Flat header buffer, exactly `layout.size` slots
    pub head: Vec<f64>,
    /// Dependent sample components; empty until data is materialized
    #[serde(default)]
    pub dep: Vec<DataVector>,
    /// Independent axis, retained only for uneven sampling
    #[serde(default)]
    pub ind: Option<DataVector>,
    /// Free-form auxiliary values, not subject to validation
    #[serde(default)]
    pub misc: Map<String, Value>,
}

impl Record {
    /// Create a record with a freshly blanked header
    ///
    /// The filetype code and version are stamped into the header; byte
    /// order defaults to the running machine's.
    pub fn new(filetype: Filetype, version: i32) -> Result<Self> {
        if !seisrec_core::version_is_valid(filetype, version) {
            return Err(CoreError::UnknownVersion(version).into());
        }
        let layout = HeaderLayout::for_version(version)?;
        let mut head = blank(layout);
        write_numeric(&mut head, layout, "iftype", filetype.to_code() as f64)?;
        write_numeric(&mut head, layout, "nvhdr", version as f64)?;
        Ok(Record {
            path: String::from("."),
            name: String::new(),
            filetype,
            version,
            byteorder: ByteOrder::native(),
            hasdata: false,
            head,
            dep: Vec::new(),
            ind: None,
            misc: Map::new(),
        })
    }

    /// Layout table for this record's version
    pub fn layout(&self) -> Result<&'static HeaderLayout> {
        Ok(HeaderLayout::for_version(self.version)?)
    }

    /// Write a numeric header field by name
    pub fn set_field(&mut self, name: &str, value: f64) -> Result<()> {
        let layout = HeaderLayout::for_version(self.version)?;
        write_numeric(&mut self.head, layout, name, value)?;
        Ok(())
    }

    /// Read a numeric header field by name; `None` when undefined
    pub fn field(&self, name: &str) -> Result<Option<f64>> {
        let layout = self.layout()?;
        Ok(read_numeric(&self.head, layout, name)?)
    }

    /// Write a string header field by name
    pub fn set_string_field(&mut self, name: &str, value: &str) -> Result<()> {
        let layout = HeaderLayout::for_version(self.version)?;
        write_string(&mut self.head, layout, name, value)?;
        Ok(())
    }

    /// Read a string header field by name; `None` when undefined
    pub fn string_field(&self, name: &str) -> Result<Option<String>> {
        let layout = self.layout()?;
        Ok(read_string(&self.head, layout, name)?)
    }

    /// Write a logical header field (1.0 true, 0.0 false)
    pub fn set_logical(&mut self, name: &str, value: bool) -> Result<()> {
        self.set_field(name, if value { 1.0 } else { 0.0 })
    }

    /// Read a logical header field; `None` when undefined
    pub fn logical(&self, name: &str) -> Result<Option<bool>> {
        Ok(self.field(name)?.map(|v| v != 0.0))
    }

    /// Number of points recorded in the header, zero when unset
    pub fn npts(&self) -> usize {
        match self.field("npts") {
            Ok(Some(v)) if v > 0.0 => v as usize,
            _ => 0,
        }
    }

    /// Nominal sample interval
    pub fn delta(&self) -> Option<f64> {
        self.field("delta").ok().flatten()
    }

    /// Independent-axis begin value
    pub fn b(&self) -> Option<f64> {
        self.field("b").ok().flatten()
    }

    /// Independent-axis end value
    pub fn e(&self) -> Option<f64> {
        self.field("e").ok().flatten()
    }

    /// Header buffer as raw bytes for the I/O collaborator
    pub fn head_bytes(&self) -> &[u8] {
        head_bytes(&self.head)
    }

    /// Recompute header fields derived from the sample payload
    ///
    /// Updates `npts` and the dependent min/max/mean; `e` follows from
    /// `b + delta*(npts-1)` for even sampling and from the last
    /// independent-axis sample otherwise.
    pub fn update_derived(&mut self) -> Result<()> {
        let npts = self.dep.first().map_or(0, DataVector::len);
        self.set_field("npts", npts as f64)?;

        let mins: Vec<f64> = self.dep.iter().filter_map(DataVector::min).collect();
        let maxs: Vec<f64> = self.dep.iter().filter_map(DataVector::max).collect();
        if let Some(min) = mins.into_iter().reduce(f64::min) {
            self.set_field("depmin", min)?;
        }
        if let Some(max) = maxs.into_iter().reduce(f64::max) {
            self.set_field("depmax", max)?;
        }
        let total: usize = self.dep.iter().map(DataVector::len).sum();
        if total > 0 {
            let sum: f64 = self
                .dep
                .iter()
                .flat_map(|d| (0..d.len()).filter_map(move |i| d.get(i)))
                .sum();
            self.set_field("depmen", sum / total as f64)?;
        }

        if npts > 0 {
            match self.logical("leven")? {
                Some(false) => {
                    let span = self.ind.as_ref().and_then(|ind| {
                        Some((ind.get(0)?, ind.get(ind.len().checked_sub(1)?)?))
                    });
                    if let Some((first, last)) = span {
                        self.set_field("b", first)?;
                        self.set_field("e", last)?;
                    }
                }
                _ => {
                    if let (Some(b), Some(delta)) = (self.b(), self.delta()) {
                        self.set_field("e", b + delta * (npts as f64 - 1.0))?;
                    }
                }
            }
        }
        Ok(())
    }
}
