use crux_core::{render::render, Command};

use crate::events::Event;
use crate::http_helpers::{build_url, process_status_response};
use crate::model::Model;
use crate::update::fetch_status;
use crate::{Effect, HttpCmd};

/// Handle device action events (reset)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::ResetDevice => {
            model.stop_stream();
            let request = HttpCmd::get(build_url("/reset"))
                .build()
                .then_send(|result| Event::ResetResponse(process_status_response("Reset", result)));
            Command::all([render(), request])
        }

        Event::ResetResponse(result) => {
            match result {
                Ok(()) => log::info!("device reset requested"),
                Err(e) => log::warn!("device reset failed: {e}"),
            }
            // refresh the mirror either way; the device decides what stuck
            fetch_status()
        }

        _ => unreachable!("Non-device event passed to device handler"),
    }
}
