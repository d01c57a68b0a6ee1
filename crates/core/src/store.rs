//! File-backed identity store: reads with defaulting, ordered writes.
//!
//! Reading never fails: a missing, unreadable, or blank file yields that
//! field's factory default. Writing applies the fields in a fixed order
//! (VID, PID, manufacturer, product) and stops at the first failure, so the
//! caller can report exactly which field could not be saved. A blank
//! optional field deletes its file instead of writing it. Earlier writes are
//! not rolled back when a later one fails.

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::identity::{IdentityField, UsbIdentity};
use crate::paths::IdentityPaths;
use crate::{DEFAULT_MANUFACTURER, DEFAULT_PID, DEFAULT_PRODUCT, DEFAULT_VID};

/// Reads and writes the four identity files.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    paths: IdentityPaths,
}

impl IdentityStore {
    pub fn new(paths: IdentityPaths) -> Self {
        Self { paths }
    }

    /// Load the effective identity.
    ///
    /// Each field is the trimmed content of its file, or the factory default
    /// when the file is missing, unreadable, or blank after trimming.
    pub fn load(&self) -> UsbIdentity {
        let identity = UsbIdentity {
            vid: read_or_default(&self.paths.vid, DEFAULT_VID),
            pid: read_or_default(&self.paths.pid, DEFAULT_PID),
            manufacturer: read_or_default(&self.paths.manufacturer, DEFAULT_MANUFACTURER),
            product: read_or_default(&self.paths.product, DEFAULT_PRODUCT),
        };
        debug!(?identity, "loaded usb identity");
        identity
    }

    /// Persist an identity, in field order, stopping at the first failure.
    ///
    /// VID and PID are always written, verbatim. Manufacturer and product
    /// are written when non-empty; a blank value deletes the file, ignoring
    /// delete errors (including the file not existing).
    pub fn save(&self, identity: &UsbIdentity) -> Result<()> {
        write_field(&self.paths.vid, IdentityField::Vid, &identity.vid)?;
        write_field(&self.paths.pid, IdentityField::Pid, &identity.pid)?;
        write_or_clear(
            &self.paths.manufacturer,
            IdentityField::Manufacturer,
            &identity.manufacturer,
        )?;
        write_or_clear(&self.paths.product, IdentityField::Product, &identity.product)?;

        debug!(
            vid = %identity.vid,
            pid = %identity.pid,
            manufacturer = %identity.manufacturer,
            product = %identity.product,
            "saved usb identity"
        );
        Ok(())
    }
}

/// Read a file's trimmed content, or `default` on any error or blank file.
fn read_or_default(path: &Path, default: &str) -> String {
    let Ok(data) = fs::read_to_string(path) else {
        return default.to_string();
    };
    let value = data.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Write a field's file verbatim (no trimming).
fn write_field(path: &Path, field: IdentityField, value: &str) -> Result<()> {
    fs::write(path, value).map_err(|source| {
        error!(path = %path.display(), %field, %source, "failed to write identity file");
        Error::Save { field, source }
    })
}

/// Write when non-empty, otherwise delete the file.
fn write_or_clear(path: &Path, field: IdentityField, value: &str) -> Result<()> {
    if value.is_empty() {
        let _ = fs::remove_file(path);
        Ok(())
    } else {
        write_field(path, field, value)
    }
}
