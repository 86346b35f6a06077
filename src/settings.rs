//! Sensor setting catalog and the visibility rules derived from it.
//!
//! The firmware reports every setting as an integer in its `/status`
//! snapshot; the control kind decides how that integer is interpreted and
//! how an edited value is encoded for `/control`.

use serde::{Deserialize, Serialize};

/// Sensor fitted to the device, as reported by the page shell.
///
/// Only `ov2460` carries the extra gain-ceiling control group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraVariant {
    Ov2460,
    #[default]
    Generic,
}

/// Kind of UI control a setting is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    /// Checkbox, reported and sent as 0/1.
    Toggle,
    /// Range slider, raw integer value.
    Slider,
    /// Single-choice select, raw integer value.
    Choice,
}

/// Value of one setting, as mirrored from the device or edited locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    Toggle(bool),
    Level(i64),
    /// Momentary action control; sends a fixed trigger value, holds no state.
    Trigger,
}

impl SettingValue {
    /// Wire encoding for `/control?var=<id>&val=<..>`.
    pub fn encoded(&self) -> String {
        match self {
            SettingValue::Toggle(true) => "1".to_string(),
            SettingValue::Toggle(false) => "0".to_string(),
            SettingValue::Level(n) => n.to_string(),
            SettingValue::Trigger => "1".to_string(),
        }
    }

    /// Interpret a raw snapshot integer according to the control kind.
    pub fn from_reported(kind: ControlKind, raw: i64) -> Self {
        match kind {
            ControlKind::Toggle => SettingValue::Toggle(raw != 0),
            ControlKind::Slider | ControlKind::Choice => SettingValue::Level(raw),
        }
    }

    /// Momentary values are sent but never stored in the mirror.
    pub fn is_momentary(&self) -> bool {
        matches!(self, SettingValue::Trigger)
    }
}

/// Control kind for a state-bound setting identifier, or `None` if the
/// identifier is not part of the panel.
///
/// The catalog matches the fields served by the firmware's `/status`
/// endpoint; snapshot keys outside it are ignored.
pub fn control_kind(id: &str) -> Option<ControlKind> {
    match id {
        "aec" | "aec2" | "agc" | "awb" | "awb_gain" | "bpc" | "colorbar" | "dcw" | "hmirror"
        | "lenc" | "raw_gma" | "vflip" | "wpc" => Some(ControlKind::Toggle),
        "aec_value" | "ae_level" | "agc_gain" | "brightness" | "contrast" | "flash" | "quality"
        | "saturation" | "sharpness" => Some(ControlKind::Slider),
        "framesize" | "gainceiling" | "special_effect" | "wb_mode" => Some(ControlKind::Choice),
        _ => None,
    }
}

/// Query path for a single control write.
pub fn control_query(id: &str, value: &SettingValue) -> String {
    format!("/control?var={id}&val={}", value.encoded())
}

/// Visibility of the dependent control groups driven by one toggle.
///
/// Pure function of (driving id, value, camera variant). Groups not named
/// for a given input keep whatever state they had; groups never named stay
/// hidden. Rules for different driving controls are independent.
pub fn dependent_groups(
    id: &str,
    enabled: bool,
    variant: CameraVariant,
) -> Vec<(&'static str, bool)> {
    match id {
        // manual exposure controls only make sense with auto-exposure off
        "aec" => vec![("aec_value-group", !enabled)],
        "agc" => {
            let mut rules = vec![("agc_gain-group", !enabled)];
            if variant == CameraVariant::Ov2460 {
                rules.push(("gainceiling-group", enabled));
            }
            rules
        }
        "awb_gain" => vec![("wb_mode-group", enabled)],
        _ => Vec::new(),
    }
}
