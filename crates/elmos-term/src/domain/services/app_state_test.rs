use std::sync::Arc;

use tui_textarea::Input;
use tui_textarea::Key;

use super::*;
use crate::domain::models::catalog::build_menu;
use crate::domain::models::ActionId;
use crate::domain::models::CommandError;

fn app_state() -> AppState {
    let leaf = |label: &str, action: ActionId, template: &str| {
        return MenuNode::action(label, "", action, template);
    };
    let menu = MenuTree::new(vec![
        leaf("Doctor", ActionId::DoctorCheck, "elmos doctor"),
        MenuNode::category(
            "Modules",
            "",
            vec![
                leaf("List", ActionId::ModuleList, "elmos module list"),
                leaf("Build One", ActionId::ModuleBuildOne, "elmos module build <name>")
                    .with_input("Module name:", "hello_world"),
            ],
        ),
        MenuNode::category(
            "Kernel",
            "",
            vec![
                leaf("Config", ActionId::KernelConfig, "elmos kernel config <type>")
                    .with_input("Config:", "defconfig"),
                leaf("Menuconfig", ActionId::KernelMenuconfig, "elmos kernel config menuconfig")
                    .interactive(),
            ],
        ),
    ])
    .unwrap();

    return AppState::new(AppStateProps {
        menu: Arc::new(menu),
    });
}

fn press(state: &mut AppState, key: Key) -> Effect {
    return state.handle_event(Event::KeyboardInput(Input {
        key,
        ..Default::default()
    }));
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, Key::Char(c));
    }
}

fn complete(state: &mut AppState, action: ActionId, error: Option<CommandError>, output: &str) {
    let effect = state.handle_event(Event::CommandCompleted(CommandCompletion {
        action,
        error,
        output: output.to_string(),
    }));
    assert_eq!(effect, Effect::None);
}

fn texts(state: &AppState) -> Vec<String> {
    return state
        .log
        .history()
        .iter()
        .map(|e| return e.text.clone())
        .collect();
}

#[test]
fn it_runs_doctor_and_logs_output_then_marker() {
    let mut state = AppState::new(AppStateProps {
        menu: Arc::new(build_menu("elmos").unwrap()),
    });
    while state.navigation.selected().unwrap().label != "Doctor" {
        press(&mut state, Key::Down);
    }

    let effect = press(&mut state, Key::Enter);
    match effect {
        Effect::Spawn(request) => {
            assert_eq!(request.action, ActionId::DoctorCheck);
            assert_eq!(request.args, vec!["doctor"]);
            assert_eq!(request.display, "elmos doctor");
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(state.mode, SessionMode::Running);
    let before = state.log.history().len();

    complete(&mut state, ActionId::DoctorCheck, None, "All checks passed");

    let history = state.log.history();
    assert_eq!(history.len(), before + 2);
    assert_eq!(history[before], LogLine::output("All checks passed"));
    assert_eq!(history[before + 1], LogLine::success());
    assert_eq!(state.mode, SessionMode::Browsing);
    assert!(state.running.is_none());
}

#[test]
fn it_logs_a_distinct_marker_on_failure() {
    let mut state = app_state();
    press(&mut state, Key::Enter);

    complete(
        &mut state,
        ActionId::DoctorCheck,
        Some(CommandError::Execution { code: Some(2) }),
        "missing qemu\n",
    );

    let last = state.log.history().last().unwrap().clone();
    assert_eq!(last.kind, LogKind::Failure);
    assert_eq!(last.text, "Error: exit status 2");
    assert_ne!(last, LogLine::success());
    assert_eq!(texts(&state), vec!["missing qemu", "Error: exit status 2"]);
    assert_eq!(state.mode, SessionMode::Browsing);
}

#[test]
fn it_reports_spawn_failures_through_the_log() {
    let mut state = app_state();
    press(&mut state, Key::Enter);

    complete(
        &mut state,
        ActionId::DoctorCheck,
        Some(CommandError::Spawn {
            program: "elmos".to_string(),
            reason: "No such file or directory".to_string(),
        }),
        "",
    );

    assert_eq!(
        texts(&state),
        vec!["Error: failed to start elmos: No such file or directory"]
    );
    assert_eq!(state.mode, SessionMode::Browsing);
}

#[test]
fn it_rejects_enter_while_running() {
    let mut state = app_state();
    assert!(matches!(press(&mut state, Key::Enter), Effect::Spawn(_)));

    assert_eq!(press(&mut state, Key::Enter), Effect::None);
    assert_eq!(press(&mut state, Key::Down), Effect::None);
    assert_eq!(state.navigation.cursor(), 0);
    assert_eq!(state.mode, SessionMode::Running);
    assert_eq!(state.running.as_ref().unwrap().action, ActionId::DoctorCheck);
}

#[test]
fn it_keeps_scrolling_live_while_running() {
    let mut state = app_state();
    state.log.set_height(2);
    state.log.append_output("a\nb\nc\nd");
    press(&mut state, Key::Enter);

    press(&mut state, Key::Char('['));
    assert_eq!(state.log.offset(), 0);
}

#[test]
fn it_descends_and_returns_with_symmetry() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    let before = state.navigation.current_level().clone();

    assert_eq!(press(&mut state, Key::Enter), Effect::None);
    assert_eq!(state.navigation.depth(), 1);
    press(&mut state, Key::Down);

    press(&mut state, Key::Esc);
    assert_eq!(state.navigation.current_level(), &before);
    assert_eq!(state.mode, SessionMode::Browsing);
}

#[test]
fn it_quits_only_from_the_root() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);

    assert_eq!(press(&mut state, Key::Char('q')), Effect::None);
    assert!(state.navigation.is_at_root());
    assert_eq!(state.mode, SessionMode::Browsing);

    assert_eq!(press(&mut state, Key::Char('q')), Effect::Quit);
    assert_eq!(state.mode, SessionMode::Quitting);
}

#[test]
fn it_keeps_quit_live_while_running() {
    let mut state = app_state();
    press(&mut state, Key::Enter);

    assert_eq!(press(&mut state, Key::Char('q')), Effect::Quit);
    assert_eq!(state.mode, SessionMode::Quitting);
}

#[test]
fn it_captures_input_for_parameterized_leaves() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    press(&mut state, Key::Down);

    assert_eq!(press(&mut state, Key::Enter), Effect::None);
    assert_eq!(state.mode, SessionMode::InputCapture);
    assert_eq!(
        state.input.as_ref().unwrap().pending().action,
        ActionId::ModuleBuildOne
    );

    // Keys that mean something while browsing are plain text here.
    type_text(&mut state, "hello q");
    for _ in 0..2 {
        press(&mut state, Key::Backspace);
    }

    match press(&mut state, Key::Enter) {
        Effect::Spawn(request) => {
            assert_eq!(request.args, vec!["module", "build", "hello"]);
            assert_eq!(request.display, "elmos module build hello");
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(state.mode, SessionMode::Running);
    assert!(state.input.is_none());
}

#[test]
fn it_silently_rejects_blank_input() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    type_text(&mut state, "   ");

    assert_eq!(press(&mut state, Key::Enter), Effect::None);
    assert_eq!(state.mode, SessionMode::InputCapture);
    assert!(state.log.history().is_empty());
    assert_eq!(state.input.as_ref().unwrap().value(), "   ");
}

#[test]
fn it_cancels_input_without_side_effects() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    type_text(&mut state, "abc");

    assert_eq!(press(&mut state, Key::Esc), Effect::None);
    assert_eq!(state.mode, SessionMode::Browsing);
    assert!(state.input.is_none());
    assert!(state.log.history().is_empty());
    assert_eq!(state.navigation.depth(), 1);
    assert_eq!(state.navigation.cursor(), 1);
}

#[test]
fn it_pastes_into_the_input() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);

    state.handle_event(Event::KeyboardPaste("hello\n".to_string()));
    assert_eq!(state.input.as_ref().unwrap().value(), "hello");
}

#[test]
fn it_hands_off_interactive_leaves() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    press(&mut state, Key::Down);

    match press(&mut state, Key::Enter) {
        Effect::HandOff(request) => {
            assert_eq!(request.args, vec!["kernel", "config", "menuconfig"]);
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(state.mode, SessionMode::InteractiveHandoff);
    assert_eq!(texts(&state), vec!["▶ elmos kernel config menuconfig"]);

    assert_eq!(press(&mut state, Key::Enter), Effect::None);

    state.handle_event(Event::HandoffReturned(HandoffReport {
        display: "elmos kernel config menuconfig".to_string(),
        error: Some(CommandError::Execution { code: Some(1) }),
    }));
    assert_eq!(state.mode, SessionMode::Browsing);
    assert_eq!(
        texts(&state),
        vec![
            "▶ elmos kernel config menuconfig",
            "◀ returned from elmos kernel config menuconfig (exit status 1)",
        ]
    );
}

#[test]
fn it_hands_off_terminal_configurators_typed_at_the_prompt() {
    let mut state = app_state();
    press(&mut state, Key::Down);
    press(&mut state, Key::Down);
    press(&mut state, Key::Enter);
    press(&mut state, Key::Enter);
    type_text(&mut state, "nconfig");

    match press(&mut state, Key::Enter) {
        Effect::HandOff(request) => {
            assert_eq!(request.args, vec!["kernel", "config", "nconfig"]);
            assert_eq!(request.display, "elmos kernel config nconfig");
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(state.mode, SessionMode::InteractiveHandoff);
}

#[test]
fn it_clears_the_visible_log_only_while_browsing() {
    let mut state = app_state();
    state.log.append_output("old output");

    press(&mut state, Key::Char('c'));
    assert!(state.log.visible().is_empty());
    assert_eq!(state.log.history().len(), 1);
}

#[test]
fn it_animates_the_spinner_only_while_busy() {
    let mut state = app_state();
    state.handle_event(Event::UITick);
    assert_eq!(state.spinner_frame, 0);

    press(&mut state, Key::Enter);
    state.handle_event(Event::UITick);
    state.handle_event(Event::UITick);
    assert_eq!(state.spinner_frame, 2);
    assert_eq!(state.spinner(), "⠹");
}
