mod config;
mod device;
mod view;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub(crate) use config::fetch_status;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Config sync domain
        Event::Initialize { .. }
        | Event::SnapshotResponse(_)
        | Event::SettingChanged { .. }
        | Event::ControlResponse { .. } => config::handle(event, model),

        // View surface domain
        Event::TakeStill | Event::ToggleStream | Event::CloseView => view::handle(event, model),

        // Device actions domain
        Event::ResetDevice | Event::ResetResponse(_) => device::handle(event, model),
    }
}
