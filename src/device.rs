//! Input-device types used throughout ksw.
//!
//! This module defines the vocabulary that all components share:
//! [`InputDevice`] is a read-only snapshot of one device's identity and
//! keyboard-layout configuration at query time, and
//! [`multi_layout_keyboards`] is the filter that decides which devices
//! participate in a layout switch.

use serde::Deserialize;

/// A snapshot of one input device, as reported by the compositor.
///
/// The field names follow Sway's `get_inputs` JSON objects; devices that
/// carry no XKB state (pointers, touchpads, …) simply report an empty
/// layout list and no active layout.  Unknown JSON fields (vendor,
/// product, libinput state, …) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputDevice {
    /// Opaque stable handle used to address the device in commands
    /// (`input <identifier> …`).
    pub identifier: String,

    /// Human-readable device name, used only in output messages.
    pub name: String,

    /// Device class as reported by the compositor; only `"keyboard"`
    /// is relevant to ksw.
    #[serde(rename = "type")]
    pub device_type: String,

    /// Configured layout names, in order.  The order defines index
    /// semantics: layout `i` is switched to by passing index `i`.
    #[serde(rename = "xkb_layout_names", default)]
    pub layout_names: Vec<String>,

    /// Name of the currently active layout, if the device reports one.
    #[serde(rename = "xkb_active_layout_name", default)]
    pub active_layout_name: Option<String>,
}

impl InputDevice {
    /// Whether this device participates in a layout switch: a keyboard
    /// with at least two configured layouts.
    pub fn is_multi_layout_keyboard(&self) -> bool {
        self.device_type == "keyboard" && self.layout_names.len() >= 2
    }

    /// Position of the active layout within this device's own layout list,
    /// by exact name match, first match wins.
    ///
    /// Returns `None` when the device reports no active layout or the
    /// reported name is not in the list.
    pub fn active_layout_index(&self) -> Option<usize> {
        let active = self.active_layout_name.as_deref()?;
        self.layout_names.iter().position(|l| l == active)
    }
}

/// Filter a device list down to the multi-layout keyboards, preserving
/// the original relative order.
pub fn multi_layout_keyboards(devices: Vec<InputDevice>) -> Vec<InputDevice> {
    devices
        .into_iter()
        .filter(InputDevice::is_multi_layout_keyboard)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard(identifier: &str, layouts: &[&str], active: Option<&str>) -> InputDevice {
        InputDevice {
            identifier: identifier.into(),
            name: format!("Keyboard {}", identifier),
            device_type: "keyboard".into(),
            layout_names: layouts.iter().map(|l| l.to_string()).collect(),
            active_layout_name: active.map(Into::into),
        }
    }

    #[test]
    fn keyboard_with_two_layouts_qualifies() {
        let dev = keyboard("1:1:kb", &["English (US)", "Russian"], Some("English (US)"));
        assert!(dev.is_multi_layout_keyboard());
    }

    #[test]
    fn single_layout_keyboard_does_not_qualify() {
        let dev = keyboard("1:1:kb", &["English (US)"], Some("English (US)"));
        assert!(!dev.is_multi_layout_keyboard());
    }

    #[test]
    fn non_keyboard_does_not_qualify() {
        let dev = InputDevice {
            identifier: "2:7:mouse".into(),
            name: "Mouse".into(),
            device_type: "pointer".into(),
            layout_names: vec!["a".into(), "b".into()],
            active_layout_name: None,
        };
        assert!(!dev.is_multi_layout_keyboard());
    }

    #[test]
    fn filter_preserves_query_order() {
        let devices = vec![
            keyboard("b", &["us", "de"], Some("us")),
            InputDevice {
                identifier: "mouse".into(),
                name: "Mouse".into(),
                device_type: "pointer".into(),
                layout_names: vec![],
                active_layout_name: None,
            },
            keyboard("a", &["us", "fr"], Some("fr")),
        ];
        let kept = multi_layout_keyboards(devices);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].identifier, "b");
        assert_eq!(kept[1].identifier, "a");
    }

    #[test]
    fn active_layout_index_first_match_wins() {
        let dev = keyboard("kb", &["us", "fr", "us"], Some("us"));
        assert_eq!(dev.active_layout_index(), Some(0));
    }

    #[test]
    fn active_layout_index_missing_name() {
        let dev = keyboard("kb", &["us", "fr"], Some("de"));
        assert_eq!(dev.active_layout_index(), None);
    }

    #[test]
    fn active_layout_index_no_active_layout() {
        let dev = keyboard("kb", &["us", "fr"], None);
        assert_eq!(dev.active_layout_index(), None);
    }

    #[test]
    fn deserialize_sway_keyboard_object() {
        let json = r#"{
            "identifier": "1452:627:Apple_Inc._Magic_Keyboard",
            "name": "Apple Inc. Magic Keyboard",
            "vendor": 1452,
            "product": 627,
            "type": "keyboard",
            "xkb_layout_names": ["English (US)", "Russian"],
            "xkb_active_layout_index": 0,
            "xkb_active_layout_name": "English (US)",
            "libinput": { "send_events": "enabled" }
        }"#;
        let dev: InputDevice = serde_json::from_str(json).unwrap();
        assert_eq!(dev.identifier, "1452:627:Apple_Inc._Magic_Keyboard");
        assert_eq!(dev.device_type, "keyboard");
        assert_eq!(dev.layout_names, vec!["English (US)", "Russian"]);
        assert_eq!(dev.active_layout_name.as_deref(), Some("English (US)"));
    }

    #[test]
    fn deserialize_pointer_without_xkb_fields() {
        let json = r#"{
            "identifier": "1133:16511:Logitech_G502",
            "name": "Logitech G502",
            "type": "pointer"
        }"#;
        let dev: InputDevice = serde_json::from_str(json).unwrap();
        assert!(dev.layout_names.is_empty());
        assert!(dev.active_layout_name.is_none());
        assert!(!dev.is_multi_layout_keyboard());
    }

    #[test]
    fn deserialize_null_active_layout() {
        let json = r#"{
            "identifier": "0:0:virtual",
            "name": "Virtual Keyboard",
            "type": "keyboard",
            "xkb_layout_names": ["us", "de"],
            "xkb_active_layout_name": null
        }"#;
        let dev: InputDevice = serde_json::from_str(json).unwrap();
        assert!(dev.active_layout_name.is_none());
        assert!(dev.is_multi_layout_keyboard());
    }
}
