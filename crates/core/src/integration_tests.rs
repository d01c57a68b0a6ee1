//! Integration tests: exercise the full save→load flow against a temporary
//! identity directory, the way the HTTP daemon and CLI drive the store.

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::identity::{IdentityField, UsbIdentity};
    use crate::paths::IdentityPaths;
    use crate::preset;
    use crate::store::IdentityStore;

    #[test]
    fn save_then_load_roundtrips_a_full_identity() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(IdentityPaths::in_dir(dir.path()));

        let submitted = UsbIdentity {
            vid: "0x1d6b".into(),
            pid: "0x0104".into(),
            manufacturer: "Linux Foundation".into(),
            product: "Multifunction Composite Gadget".into(),
        };
        store.save(&submitted).unwrap();
        assert_eq!(store.load(), submitted);
    }

    #[test]
    fn blank_optional_fields_fall_back_to_defaults_after_save() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(IdentityPaths::in_dir(dir.path()));

        // Seed a manufacturer so the blank submission has something to clear.
        fs::write(dir.path().join("usb.manufacturer"), "Acme").unwrap();

        store
            .save(&UsbIdentity {
                vid: "0x1234".into(),
                pid: "0x5678".into(),
                manufacturer: String::new(),
                product: "Acme".into(),
            })
            .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("usb.vid")).unwrap(),
            "0x1234"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("usb.pid")).unwrap(),
            "0x5678"
        );
        assert!(!dir.path().join("usb.manufacturer").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("usb.product")).unwrap(),
            "Acme"
        );

        let identity = store.load();
        assert_eq!(identity.vid, "0x1234");
        assert_eq!(identity.pid, "0x5678");
        assert_eq!(identity.manufacturer, "sipeed");
        assert_eq!(identity.product, "Acme");
    }

    #[test]
    fn applying_a_preset_roundtrips_through_the_store() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(IdentityPaths::in_dir(dir.path()));

        let preset = preset::find_preset("logitech").unwrap();
        store.save(&preset.identity()).unwrap();

        let loaded = store.load();
        assert_eq!(preset::matching_preset(&loaded).unwrap().name, "logitech");
    }

    #[test]
    fn unwritable_directory_reports_the_first_field_and_touches_nothing_else() {
        let dir = tempdir().unwrap();
        let store = IdentityStore::new(IdentityPaths::in_dir(dir.path().join("missing")));

        let err = store.save(&UsbIdentity::default()).unwrap_err();
        assert_eq!(err.field(), IdentityField::Vid);

        // The store never created the directory or any file.
        assert!(!dir.path().join("missing").exists());
        // Reads still produce a full identity.
        assert_eq!(store.load(), UsbIdentity::default());
    }
}
