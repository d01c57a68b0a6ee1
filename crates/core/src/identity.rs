//! USB gadget identity model.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MANUFACTURER, DEFAULT_PID, DEFAULT_PRODUCT, DEFAULT_VID};

/// The tuple describing how the gadget presents itself to a USB host.
///
/// Field names follow the wire format used by the API and the on-disk file
/// naming (`usb.vid`, `usb.pid`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsbIdentity {
    /// USB Vendor ID, hexadecimal string (e.g. "0x046d").
    pub vid: String,
    /// USB Product ID, hexadecimal string (e.g. "0xc31c").
    pub pid: String,
    /// Manufacturer string descriptor. Blank clears the stored value.
    #[serde(default)]
    pub manufacturer: String,
    /// Product string descriptor. Blank clears the stored value.
    #[serde(default)]
    pub product: String,
}

impl Default for UsbIdentity {
    /// The factory identity the device falls back to.
    fn default() -> Self {
        Self {
            vid: DEFAULT_VID.into(),
            pid: DEFAULT_PID.into(),
            manufacturer: DEFAULT_MANUFACTURER.into(),
            product: DEFAULT_PRODUCT.into(),
        }
    }
}

/// The four persisted identity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityField {
    Vid,
    Pid,
    Manufacturer,
    Product,
}

impl IdentityField {
    /// All fields, in persistence order.
    pub const ALL: &'static [IdentityField] = &[
        IdentityField::Vid,
        IdentityField::Pid,
        IdentityField::Manufacturer,
        IdentityField::Product,
    ];

    /// Name used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vid => "VID",
            Self::Pid => "PID",
            Self::Manufacturer => "manufacturer",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for IdentityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
