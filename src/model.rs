use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::settings::{control_kind, dependent_groups, CameraVariant, SettingValue};

/// Full configuration snapshot as served by `GET /status`.
pub type DeviceStatus = BTreeMap<String, i64>;

/// Application Model - the complete panel state.
/// Also serves as the ViewModel when serialized.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Sensor variant, fixed at initialization.
    pub variant: CameraVariant,

    /// Device-setting mirror: last value observed from the device or sent
    /// to it. Eventually consistent; a failed write is only corrected by
    /// the next snapshot fetch.
    pub settings: BTreeMap<String, SettingValue>,

    /// Derived visibility of dependent control groups, keyed by group id.
    /// Groups absent from the map are hidden.
    pub groups: BTreeMap<String, bool>,

    // View surface state
    /// Source the shell should point the display surface at.
    pub view_source: Option<String>,
    pub view_visible: bool,
    pub is_streaming: bool,
}

impl Model {
    /// Apply a remote-origin configuration snapshot.
    ///
    /// Overwrites the mirror for every registered identifier and refreshes
    /// the visibility rules each drives. Never issues a write: this path
    /// has no way to construct an HTTP command.
    pub fn apply_snapshot(&mut self, status: &DeviceStatus) {
        for (id, raw) in status {
            let Some(kind) = control_kind(id) else {
                continue;
            };
            self.settings
                .insert(id.clone(), SettingValue::from_reported(kind, *raw));
            self.refresh_groups(id);
        }
    }

    /// Re-evaluate the visibility rules driven by one setting.
    ///
    /// Idempotent; a no-op for settings that drive no group or hold a
    /// non-toggle value.
    pub fn refresh_groups(&mut self, id: &str) {
        let Some(SettingValue::Toggle(enabled)) = self.settings.get(id) else {
            return;
        };
        for (group, visible) in dependent_groups(id, *enabled, self.variant) {
            self.groups.insert(group.to_string(), visible);
        }
    }

    /// Whether a dependent group is currently shown.
    pub fn group_visible(&self, group: &str) -> bool {
        self.groups.get(group).copied().unwrap_or(false)
    }

    pub fn start_stream(&mut self, source: String) {
        self.view_source = Some(source);
        self.view_visible = true;
        self.is_streaming = true;
    }

    /// Clear the streaming flag; the shell reacts by aborting the
    /// connection (its `window.stop()` equivalent). The last source is
    /// kept, matching the original panel.
    pub fn stop_stream(&mut self) {
        self.is_streaming = false;
    }

    /// Label for the stream toggle button.
    pub fn stream_label(&self) -> &'static str {
        if self.is_streaming {
            "Stop Stream"
        } else {
            "Start Stream"
        }
    }
}
