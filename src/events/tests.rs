use super::*;
use crate::context::{Operand, Operator};
use crate::dispatch::DragSelect;
use crate::host::SettingValue;
use crate::test_utils::MockSurface;

fn handler() -> EventHandler {
    EventHandler::new(Duration::from_secs(30))
}

#[test]
fn test_query_context_delegates() {
    let events = handler();
    let cmdline = MockSurface::cmdline(1, ":");

    let q = ContextQuery::new("vi_is_cmdline", Operator::Equal, Operand::Bool(true));
    assert_eq!(events.on_query_context(&cmdline, &q), Tristate::True);

    let q = ContextQuery::new("not_ours", Operator::Equal, Operand::Bool(true));
    assert_eq!(events.on_query_context(&cmdline, &q), Tristate::Unknown);
}

#[test]
fn test_query_completions_only_in_cmdline() {
    let mut events = handler();

    let view = MockSurface::view(1, ":tab");
    assert_eq!(events.on_query_completions(&view, "tab"), None);

    // Prefix must be the whole line after the colon
    let cmdline = MockSurface::cmdline(2, ":e tab");
    assert_eq!(events.on_query_completions(&cmdline, "tab"), None);

    let cmdline = MockSurface::cmdline(3, ":tabl");
    let items = events.on_query_completions(&cmdline, "tabl").unwrap();
    assert_eq!(
        items,
        vec![
            ("tabl".to_string(), "tablast".to_string()),
            ("tablast".to_string(), "tabl".to_string()),
        ]
    );
}

#[test]
fn test_completions_cycle_through_cached_answer() {
    let mut events = handler();
    let first = events
        .on_query_completions(&MockSurface::cmdline(1, ":tabn"), "tabn")
        .unwrap();

    // Accepting an entry replaces the prefix; asking again gives the same list
    let again = events
        .on_query_completions(&MockSurface::cmdline(1, ":tabnext"), "tabnext")
        .unwrap();
    assert_eq!(first, again);

    // Another surface has its own cache
    let other = events
        .on_query_completions(&MockSurface::cmdline(2, ":tabnext"), "tabnext")
        .unwrap();
    assert_eq!(other, vec![("tabnext".to_string(), "tabnext".to_string())]);
}

#[test]
fn test_text_command_uses_surface_mode() {
    let mut events = handler();
    let view = MockSurface::view(7, "text");
    let plain = TextCommand::DragSelect(DragSelect::default());

    assert_eq!(events.on_text_command(&view, &plain), None);

    events.set_mode(7, Mode::Visual).unwrap();
    assert_eq!(
        events.on_text_command(&view, &plain),
        Some(vec![
            Action::DragSelect(DragSelect::default()),
            Action::EnterNormalMode { from: Mode::Visual }
        ])
    );
}

#[test]
fn test_set_mode_rejects_internal_normal() {
    let mut events = handler();
    events.set_mode(1, Mode::Insert).unwrap();
    assert!(events.set_mode(1, Mode::InternalNormal).is_err());
    assert_eq!(events.mode(1), Mode::Insert);
}

#[test]
fn test_post_text_command_click() {
    let events = handler();
    let view = MockSurface::view(1, "text");
    let click = TextCommand::DragSelect(DragSelect::click(3, 4, 1));
    assert_eq!(events.on_post_text_command(&view, &click), vec![Action::UpdateXpos]);
}

#[test]
fn test_load_and_save_modeline() {
    let mut events = handler();
    let plain = MockSurface::view(1, "");
    let with_modeline =
        MockSurface::view(2, "").with_setting(MODELINE_SETTING, SettingValue::Bool(true));

    assert!(events.on_load(&plain).is_empty());
    assert!(events.is_tracked(1));
    assert_eq!(events.on_load(&with_modeline), vec![Action::ApplyModeline]);

    events.set_mode(2, Mode::VisualLine).unwrap();
    assert_eq!(
        events.on_post_save(&with_modeline),
        vec![
            Action::ApplyModeline,
            Action::FixEolCaret {
                mode: Mode::VisualLine
            }
        ]
    );
    assert_eq!(
        events.on_post_save(&plain),
        vec![Action::FixEolCaret { mode: Mode::Normal }]
    );
}

#[test]
fn test_close_drops_state() {
    let mut events = handler();
    events.set_mode(5, Mode::Visual).unwrap();
    assert!(events.is_tracked(5));

    events.on_close(5);
    assert!(!events.is_tracked(5));
    assert_eq!(events.mode(5), Mode::Normal);

    // Closing twice is fine
    events.on_close(5);
}

#[test]
fn test_view_switch_resets_mode() {
    let mut events = handler();
    let left = MockSurface::view(1, "");
    let right = MockSurface::view(2, "");
    events.set_mode(2, Mode::Visual).unwrap();

    events.on_deactivated(&left);
    let activated = events.on_activated(&right);
    assert_eq!(activated.activation, Activation::ViewSwitch);
    assert_eq!(activated.actions, vec![Action::CollapseOtherSelections]);
    assert_eq!(events.mode(2), Mode::Normal);
}

#[test]
fn test_application_switch_keeps_mode() {
    let mut events = handler();
    let view = MockSurface::view(1, "");
    events.set_mode(1, Mode::Insert).unwrap();

    let activated = events.on_activated(&view);
    assert_eq!(activated.activation, Activation::ApplicationSwitch);
    assert_eq!(events.mode(1), Mode::Insert);

    // Widgets get no selection clean-up
    let cmdline = MockSurface::cmdline(2, ":");
    assert!(events.on_activated(&cmdline).actions.is_empty());
}
