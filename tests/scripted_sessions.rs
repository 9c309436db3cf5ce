use glam::Vec3;
use scribe3d::{EditorConfig, SavedTexts, ScriptPlayer};
use scribe3d_core::{
    DropdownPolicy, FontChoice, FontSize, RenderMode, SessionOptions, SessionPhase, TextColor,
};
use scribe3d_ui3d::{EditorOverlay, SceneContext};

fn mount(initial: &str, options: SessionOptions) -> EditorOverlay {
    let context = SceneContext::looking_at_origin(Vec3::new(0.0, 0.0, 5.0), 75.0, (1280, 720));
    EditorOverlay::mount(Some(context), initial, options).expect("scene context present")
}

fn replay(overlay: &mut EditorOverlay, saved: &mut SavedTexts, script: &str) {
    ScriptPlayer::from_json(script)
        .expect("valid script")
        .run(overlay, saved)
        .expect("script runs");
}

#[test]
fn erase_type_and_save() {
    let mut overlay = mount("Hello World!", SessionOptions::default());
    let mut saved = SavedTexts::new();
    let script = include_str!("../scripts/erase_and_save.json");
    replay(&mut overlay, &mut saved, script);

    assert_eq!(overlay.session().phase(), SessionPhase::Closed);
    assert_eq!(saved.len(), 1);
    let entry = &saved.entries()[0];
    assert_eq!(entry.text, "Hello World?");
    assert_eq!(entry.meta.mode, RenderMode::ThreeD);
    assert_eq!(entry.meta.color, TextColor::Cyan);
    assert_eq!(entry.meta.font, FontChoice::SystemDefault);
    assert_eq!(entry.meta.font_size, FontSize::from_f32(1.1));

    // Reopening shows the saved buffer, not the initial text.
    replay(
        &mut overlay,
        &mut saved,
        r#"{"steps":[{"action":"click","control":"edit_toggle"}]}"#,
    );
    assert_eq!(overlay.session().buffer(), "Hello World?");
}

#[test]
fn cancel_restores_initial_text_and_keeps_panel_open() {
    let mut overlay = mount("Hello World!", SessionOptions::default());
    let mut saved = SavedTexts::new();
    replay(
        &mut overlay,
        &mut saved,
        r#"{"steps":[
            {"action":"click","control":"edit_toggle"},
            {"action":"click","control":"text_area"},
            {"action":"type","text":" again"},
            {"action":"click","control":"font_picker"},
            {"action":"click","control":"cancel"}
        ]}"#,
    );

    let session = overlay.session();
    assert_eq!(session.buffer(), "Hello World!");
    assert_eq!(session.phase(), SessionPhase::OpenUnfocused);
    assert!(!session.font_dropdown_open());
    assert!(saved.is_empty());
}

#[test]
fn clear_then_placeholder_until_focused() {
    let mut overlay = mount("Hello World!", SessionOptions::default());
    let mut saved = SavedTexts::new();
    replay(
        &mut overlay,
        &mut saved,
        r#"{"steps":[
            {"action":"click","control":"edit_toggle"},
            {"action":"click","control":"clear"}
        ]}"#,
    );
    assert!(overlay.session().snapshot().show_placeholder);

    replay(
        &mut overlay,
        &mut saved,
        r#"{"steps":[{"action":"click","control":"text_area"}]}"#,
    );
    let snapshot = overlay.session().snapshot();
    assert!(!snapshot.show_placeholder);
    assert_eq!(snapshot.display_text, "|");
}

#[test]
fn keys_pass_through_while_unfocused() {
    let mut overlay = mount("abc", SessionOptions::default());
    let mut saved = SavedTexts::new();
    replay(
        &mut overlay,
        &mut saved,
        r#"{"steps":[
            {"action":"type","text":"xyz"},
            {"action":"click","control":"edit_toggle"},
            {"action":"key","key":"Backspace"}
        ]}"#,
    );
    assert_eq!(overlay.session().buffer(), "abc");
    assert_eq!(overlay.router().passthrough_count(), 4);
    assert_eq!(overlay.router().handled_count(), 0);
}

#[test]
fn configured_limits_apply_to_scripts() {
    let config = EditorConfig {
        max_chars: Some(5),
        dropdown_policy: DropdownPolicy::Exclusive,
        ..EditorConfig::default()
    };
    let mut overlay = mount("abc", config.session_options());
    let mut saved = SavedTexts::new();
    replay(
        &mut overlay,
        &mut saved,
        r#"{"steps":[
            {"action":"click","control":"edit_toggle"},
            {"action":"click","control":"text_area"},
            {"action":"type","text":"defgh"},
            {"action":"click","control":"font_picker"},
            {"action":"click","control":"color_picker"}
        ]}"#,
    );
    let session = overlay.session();
    assert_eq!(session.buffer(), "abcde");
    assert!(session.color_picker_open());
    assert!(!session.font_dropdown_open());
}

#[test]
fn saving_twice_records_both() {
    let mut overlay = mount("one", SessionOptions::default());
    let mut saved = SavedTexts::new();
    let save_cycle = r#"{"steps":[
        {"action":"click","control":"edit_toggle"},
        {"action":"click","control":"save"}
    ]}"#;
    replay(&mut overlay, &mut saved, save_cycle);
    replay(&mut overlay, &mut saved, save_cycle);

    let texts: Vec<&str> = saved.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["one", "one"]);
}
