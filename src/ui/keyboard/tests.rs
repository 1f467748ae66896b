use super::*;

fn collect_with_key(
    key: egui::Key,
    modifiers: egui::Modifiers,
    mode: InteractionMode,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = modifiers;
    raw_input.events.push(egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    });

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, mode);
        });
    });

    events
}

#[test]
fn test_num1_selects_line_measurement() {
    let events = collect_with_key(
        egui::Key::Num1,
        egui::Modifiers::default(),
        InteractionMode::Idle,
    );

    assert!(events.contains(&AppIntent::ModeSelected {
        mode: InteractionMode::LineMeasurement
    }));
}

#[test]
fn test_enter_finishes_gesture_only_with_tool() {
    let events = collect_with_key(
        egui::Key::Enter,
        egui::Modifiers::default(),
        InteractionMode::FreeDraw,
    );
    assert!(events.contains(&AppIntent::FinishGestureRequested));

    let events = collect_with_key(
        egui::Key::Enter,
        egui::Modifiers::default(),
        InteractionMode::Idle,
    );
    assert!(events.is_empty());
}

#[test]
fn test_escape_resets_sequence() {
    let events = collect_with_key(
        egui::Key::Escape,
        egui::Modifiers::default(),
        InteractionMode::LineMeasurement,
    );

    assert_eq!(events, vec![AppIntent::ResetRequested]);
}

#[test]
fn test_ctrl_s_saves_options() {
    let events = collect_with_key(
        egui::Key::S,
        egui::Modifiers::COMMAND,
        InteractionMode::LineMeasurement,
    );

    assert_eq!(events, vec![AppIntent::SaveOptionsRequested]);
}

#[test]
fn test_u_toggles_distance_unit() {
    let events = collect_with_key(
        egui::Key::U,
        egui::Modifiers::default(),
        InteractionMode::Idle,
    );

    assert_eq!(events, vec![AppIntent::DistanceUnitToggled]);
}
