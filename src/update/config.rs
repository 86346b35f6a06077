use crux_core::{render::render, Command};

use crate::events::Event;
use crate::http_helpers::{build_url, process_json_response, process_status_response};
use crate::model::{DeviceStatus, Model};
use crate::settings::control_query;
use crate::{Effect, HttpCmd};

/// Issue the full configuration snapshot fetch (Initial sync, also re-run
/// after a device reset).
pub(crate) fn fetch_status() -> Command<Effect, Event> {
    HttpCmd::get(build_url("/status"))
        .build()
        .then_send(|result| {
            Event::SnapshotResponse(process_json_response::<DeviceStatus>("Status", result))
        })
}

/// Handle config sync events (initial sync, snapshot, local edits)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { variant } => {
            model.variant = variant;
            Command::all([render(), fetch_status()])
        }

        Event::SnapshotResponse(result) => match result {
            Ok(status) => {
                // remote-origin update: mirror only, no outbound write
                model.apply_snapshot(&status);
                render()
            }
            Err(e) => {
                log::warn!("status fetch failed: {e}");
                Command::done()
            }
        },

        Event::SettingChanged { id, value } => {
            // optimistic: mirror and visibility first, request after
            if !value.is_momentary() {
                model.settings.insert(id.clone(), value.clone());
            }
            model.refresh_groups(&id);

            let query = control_query(&id, &value);
            let request = HttpCmd::get(build_url(&query))
                .build()
                .then_send(move |result| Event::ControlResponse {
                    id,
                    result: process_status_response("Control", result),
                });
            Command::all([render(), request])
        }

        Event::ControlResponse { id, result } => {
            match result {
                Ok(()) => log::info!("control request for {id} finished"),
                Err(e) => log::warn!("control request for {id} failed: {e}"),
            }
            Command::done()
        }

        _ => unreachable!("Non-config event passed to config handler"),
    }
}
