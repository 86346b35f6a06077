use serde::{Deserialize, Serialize};

use crate::model::DeviceStatus;
use crate::settings::{CameraVariant, SettingValue};

/// Events that can happen in the panel
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize {
        variant: CameraVariant,
    },

    // Local edit of a state-bound control
    SettingChanged {
        id: String,
        value: SettingValue,
    },

    // View surface actions
    TakeStill,
    ToggleStream,
    CloseView,

    // Device actions
    ResetDevice,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    SnapshotResponse(Result<DeviceStatus, String>),
    #[serde(skip)]
    ControlResponse {
        id: String,
        result: Result<(), String>,
    },
    #[serde(skip)]
    ResetResponse(Result<(), String>),
}
