use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::req_id::request_id;
use crate::Effect;

/// Handle view surface events (still capture, stream toggle, close)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::TakeStill => {
            if model.is_streaming {
                // first click only stops the stream, as in the original panel
                model.stop_stream();
            } else {
                model.view_source = Some(format!("/capture?id={}", request_id()));
                model.view_visible = true;
            }
            render()
        }

        Event::ToggleStream => {
            if model.is_streaming {
                model.stop_stream();
            } else {
                model.start_stream(format!("/stream?id={}", request_id()));
            }
            render()
        }

        Event::CloseView => {
            model.stop_stream();
            model.view_visible = false;
            render()
        }

        _ => unreachable!("Non-view event passed to view handler"),
    }
}
