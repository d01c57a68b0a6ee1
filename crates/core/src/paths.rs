//! Locations of the persisted identity files.
//!
//! Each identity field lives in its own plain-text file. On the device the
//! files sit in the boot partition, where the gadget setup scripts pick them
//! up on the next boot. The paths are injected rather than hardcoded so
//! tests and the CLI can point the store at any directory.

use std::path::{Path, PathBuf};

/// Directory holding the identity files on the device.
pub const SYSTEM_DIR: &str = "/boot";

/// File name for the vendor ID.
pub const VID_FILE: &str = "usb.vid";
/// File name for the product ID.
pub const PID_FILE: &str = "usb.pid";
/// File name for the manufacturer string.
pub const MANUFACTURER_FILE: &str = "usb.manufacturer";
/// File name for the product string.
pub const PRODUCT_FILE: &str = "usb.product";

/// The four file paths backing an [`crate::store::IdentityStore`].
#[derive(Debug, Clone)]
pub struct IdentityPaths {
    pub vid: PathBuf,
    pub pid: PathBuf,
    pub manufacturer: PathBuf,
    pub product: PathBuf,
}

impl IdentityPaths {
    /// Identity files under an arbitrary directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vid: dir.join(VID_FILE),
            pid: dir.join(PID_FILE),
            manufacturer: dir.join(MANUFACTURER_FILE),
            product: dir.join(PRODUCT_FILE),
        }
    }

    /// The fixed system locations used on the device.
    pub fn system() -> Self {
        Self::in_dir(SYSTEM_DIR)
    }
}
