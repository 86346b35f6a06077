use super::*;
use crate::settings::ControlKind;
use crate::update::update;

fn apply(model: &mut Model, event: Event) {
    let _command = update(event, model);
}

fn snapshot(pairs: &[(&str, i64)]) -> DeviceStatus {
    pairs
        .iter()
        .map(|(id, raw)| (id.to_string(), *raw))
        .collect()
}

#[test]
fn initialize_records_variant() {
    let mut model = Model::default();

    apply(
        &mut model,
        Event::Initialize {
            variant: CameraVariant::Ov2460,
        },
    );

    assert_eq!(model.variant, CameraVariant::Ov2460);
}

#[test]
fn snapshot_mirrors_reported_values() {
    let mut model = Model::default();

    apply(
        &mut model,
        Event::SnapshotResponse(Ok(snapshot(&[("aec", 1), ("quality", 12), ("framesize", 8)]))),
    );

    assert_eq!(model.settings.get("aec"), Some(&SettingValue::Toggle(true)));
    assert_eq!(
        model.settings.get("quality"),
        Some(&SettingValue::Level(12))
    );
    assert_eq!(
        model.settings.get("framesize"),
        Some(&SettingValue::Level(8))
    );
}

#[test]
fn snapshot_drives_visibility_on_generic_sensor() {
    let mut model = Model::default();

    apply(
        &mut model,
        Event::SnapshotResponse(Ok(snapshot(&[("aec", 1), ("agc", 0), ("awb_gain", 1)]))),
    );

    assert!(!model.group_visible("aec_value-group"));
    assert!(model.group_visible("agc_gain-group"));
    assert!(model.group_visible("wb_mode-group"));
    // never shown off the ov2460
    assert!(!model.group_visible("gainceiling-group"));
}

#[test]
fn gain_ceiling_follows_agc_on_ov2460() {
    let mut model = Model {
        variant: CameraVariant::Ov2460,
        ..Default::default()
    };

    apply(&mut model, Event::SnapshotResponse(Ok(snapshot(&[("agc", 1)]))));
    assert!(model.group_visible("gainceiling-group"));
    assert!(!model.group_visible("agc_gain-group"));

    apply(&mut model, Event::SnapshotResponse(Ok(snapshot(&[("agc", 0)]))));
    assert!(!model.group_visible("gainceiling-group"));
    assert!(model.group_visible("agc_gain-group"));
}

#[test]
fn snapshot_ignores_unknown_identifiers() {
    let mut model = Model::default();

    apply(
        &mut model,
        Event::SnapshotResponse(Ok(snapshot(&[("bogus", 1), ("vflip", 1)]))),
    );

    assert!(!model.settings.contains_key("bogus"));
    assert_eq!(
        model.settings.get("vflip"),
        Some(&SettingValue::Toggle(true))
    );
}

#[test]
fn failed_snapshot_leaves_model_unchanged() {
    let mut model = Model::default();
    apply(&mut model, Event::SnapshotResponse(Ok(snapshot(&[("aec", 1)]))));
    let before = model.clone();

    apply(
        &mut model,
        Event::SnapshotResponse(Err("Status failed: HTTP 500 (No body)".to_string())),
    );

    assert_eq!(model, before);
}

#[test]
fn local_edit_is_optimistic() {
    let mut model = Model::default();
    apply(&mut model, Event::SnapshotResponse(Ok(snapshot(&[("aec", 1)]))));
    assert!(!model.group_visible("aec_value-group"));

    // no ControlResponse delivered: mirror and visibility update anyway
    apply(
        &mut model,
        Event::SettingChanged {
            id: "aec".to_string(),
            value: SettingValue::Toggle(false),
        },
    );

    assert_eq!(
        model.settings.get("aec"),
        Some(&SettingValue::Toggle(false))
    );
    assert!(model.group_visible("aec_value-group"));
}

#[test]
fn momentary_edit_is_not_mirrored() {
    let mut model = Model::default();

    apply(
        &mut model,
        Event::SettingChanged {
            id: "flash".to_string(),
            value: SettingValue::Trigger,
        },
    );

    assert!(!model.settings.contains_key("flash"));
}

#[test]
fn control_response_only_logs() {
    let mut model = Model::default();
    apply(&mut model, Event::SnapshotResponse(Ok(snapshot(&[("agc", 0)]))));
    let before = model.clone();

    apply(
        &mut model,
        Event::ControlResponse {
            id: "agc".to_string(),
            result: Err("Control failed: HTTP 500 (No body)".to_string()),
        },
    );

    assert_eq!(model, before);
}

#[test]
fn snapshot_application_issues_no_control_request() {
    let mut model = Model::default();

    let mut command = update(
        Event::SnapshotResponse(Ok(snapshot(&[("aec", 1), ("agc", 0), ("quality", 12)]))),
        &mut model,
    );

    // remote-origin updates must never amplify into writes
    let outbound = command
        .effects()
        .filter(|effect| matches!(effect, Effect::Http(_)))
        .count();
    assert_eq!(outbound, 0);
}

#[test]
fn local_edit_issues_exactly_one_control_request() {
    let mut model = Model::default();

    let mut command = update(
        Event::SettingChanged {
            id: "aec".to_string(),
            value: SettingValue::Toggle(false),
        },
        &mut model,
    );

    let outbound = command
        .effects()
        .filter(|effect| matches!(effect, Effect::Http(_)))
        .count();
    assert_eq!(outbound, 1);
}

#[test]
fn control_query_encodes_per_kind() {
    assert_eq!(
        control_query("aec", &SettingValue::Toggle(false)),
        "/control?var=aec&val=0"
    );
    assert_eq!(
        control_query("aec", &SettingValue::Toggle(true)),
        "/control?var=aec&val=1"
    );
    assert_eq!(
        control_query("aec_value", &SettingValue::Level(204)),
        "/control?var=aec_value&val=204"
    );
    assert_eq!(
        control_query("brightness", &SettingValue::Level(-2)),
        "/control?var=brightness&val=-2"
    );
    assert_eq!(
        control_query("flash", &SettingValue::Trigger),
        "/control?var=flash&val=1"
    );
}

#[test]
fn reported_values_decode_per_kind() {
    assert_eq!(
        SettingValue::from_reported(ControlKind::Toggle, 0),
        SettingValue::Toggle(false)
    );
    assert_eq!(
        SettingValue::from_reported(ControlKind::Toggle, 2),
        SettingValue::Toggle(true)
    );
    assert_eq!(
        SettingValue::from_reported(ControlKind::Slider, -2),
        SettingValue::Level(-2)
    );
    assert_eq!(
        SettingValue::from_reported(ControlKind::Choice, 8),
        SettingValue::Level(8)
    );
}

#[test]
fn visibility_rules_are_pure_and_idempotent() {
    let once = dependent_groups("agc", true, CameraVariant::Ov2460);
    let twice = dependent_groups("agc", true, CameraVariant::Ov2460);
    assert_eq!(once, twice);

    let mut model = Model::default();
    apply(&mut model, Event::SnapshotResponse(Ok(snapshot(&[("awb_gain", 1)]))));
    let after_first = model.groups.clone();
    model.refresh_groups("awb_gain");
    assert_eq!(model.groups, after_first);
}

#[test]
fn request_id_is_20_hex_digits() {
    let id = request_id();
    assert_eq!(id.len(), 20);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn request_ids_do_not_repeat() {
    assert_ne!(request_id(), request_id());
}

#[test]
fn stream_toggle_round_trip() {
    let mut model = Model::default();
    assert_eq!(model.stream_label(), "Start Stream");

    apply(&mut model, Event::ToggleStream);
    assert!(model.is_streaming);
    assert!(model.view_visible);
    assert_eq!(model.stream_label(), "Stop Stream");
    let source = model.view_source.clone().unwrap();
    assert!(source.starts_with("/stream?id="));

    apply(&mut model, Event::ToggleStream);
    assert!(!model.is_streaming);
    assert_eq!(model.stream_label(), "Start Stream");
}

#[test]
fn stream_sources_are_cache_busted() {
    let mut model = Model::default();

    apply(&mut model, Event::ToggleStream);
    let first = model.view_source.clone().unwrap();
    apply(&mut model, Event::ToggleStream);
    apply(&mut model, Event::ToggleStream);
    let second = model.view_source.clone().unwrap();

    assert_ne!(first, second);
}

#[test]
fn still_while_streaming_stops_stream_first() {
    let mut model = Model::default();
    apply(&mut model, Event::ToggleStream);
    let stream_source = model.view_source.clone();

    apply(&mut model, Event::TakeStill);
    assert!(!model.is_streaming);
    assert_eq!(model.stream_label(), "Start Stream");
    // stopping the stream does not retarget the view
    assert_eq!(model.view_source, stream_source);

    apply(&mut model, Event::TakeStill);
    assert!(model.view_source.unwrap().starts_with("/capture?id="));
    assert!(model.view_visible);
}

#[test]
fn close_view_hides_and_stops() {
    let mut model = Model::default();
    apply(&mut model, Event::ToggleStream);

    apply(&mut model, Event::CloseView);

    assert!(!model.is_streaming);
    assert!(!model.view_visible);
}

#[test]
fn reset_stops_stream_before_request() {
    let mut model = Model::default();
    apply(&mut model, Event::ToggleStream);

    apply(&mut model, Event::ResetDevice);

    assert!(!model.is_streaming);
}

#[test]
fn reset_response_failure_leaves_model_unchanged() {
    let mut model = Model::default();
    let before = model.clone();

    apply(
        &mut model,
        Event::ResetResponse(Err("Reset failed: HTTP 500 (No body)".to_string())),
    );

    assert_eq!(model, before);
}
