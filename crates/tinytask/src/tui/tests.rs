use super::app::*;
use super::view::*;
use crate::config::KeyBindingsConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, style::Color};
use std::fmt::Display;
use std::result::Result as StdResult;
use tinytask_app::{
    Appearance, AppearanceService, DARK_MODE_KEY, MemorySettingsStore, SettingsError,
    SettingsStore, TasksConfig,
};
use tinytask_core::{PaletteColor, TaskColor};

fn expect_ok<T, E: Display>(result: StdResult<T, E>, ctx: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{ctx}: {err}"),
    }
}

fn expect_some<T>(value: Option<T>, ctx: &str) -> T {
    value.map_or_else(|| panic!("{ctx}"), |inner| inner)
}

fn ui_with<S: SettingsStore>(settings: S) -> Ui<S> {
    let appearance = expect_ok(AppearanceService::new(settings), "appearance should load");
    let app = App::new(appearance, TasksConfig::default());
    Ui::new(app, KeyBindingsConfig::default())
}

fn new_ui() -> Ui<MemorySettingsStore> {
    ui_with(MemorySettingsStore::new())
}

fn press(ui: &mut Ui<impl SettingsStore>, code: KeyCode) {
    ui.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn press_with(ui: &mut Ui<impl SettingsStore>, code: KeyCode, modifiers: KeyModifiers) {
    ui.handle_key(KeyEvent::new(code, modifiers));
}

fn type_text(ui: &mut Ui<impl SettingsStore>, text: &str) {
    for ch in text.chars() {
        press(ui, KeyCode::Char(ch));
    }
}

fn add_tasks(ui: &mut Ui<impl SettingsStore>, titles: &[&str]) {
    press(ui, KeyCode::Char('a'));
    for title in titles {
        type_text(ui, title);
        press(ui, KeyCode::Enter);
    }
    press(ui, KeyCode::Esc);
}

fn titles(ui: &Ui<impl SettingsStore>) -> Vec<String> {
    ui.app.tasks().iter().map(|task| task.title.clone()).collect()
}

fn message_text(ui: &Ui<impl SettingsStore>) -> Option<&str> {
    ui.message.as_ref().map(|msg| msg.text.as_str())
}

fn render(ui: &Ui<impl SettingsStore>, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = expect_ok(Terminal::new(TestBackend::new(width, height)), "terminal");
    expect_ok(terminal.draw(|f| ui.draw(f)), "draw should succeed");
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

struct ReadOnlySettings;

impl SettingsStore for ReadOnlySettings {
    fn get_bool(&self, _key: &str) -> StdResult<Option<bool>, SettingsError> {
        Ok(None)
    }

    fn set_bool(&mut self, _key: &str, _value: bool) -> StdResult<(), SettingsError> {
        Err(SettingsError::NoConfigDir)
    }
}

#[test]
fn input_bar_submission_adds_task() {
    let mut ui = new_ui();
    press(&mut ui, KeyCode::Char('a'));
    assert_eq!(ui.focus, Focus::NewTask);

    type_text(&mut ui, "Buy milk");
    press(&mut ui, KeyCode::Enter);

    assert_eq!(titles(&ui), vec!["Buy milk"]);
    assert!(ui.input.is_empty());
    assert_eq!(ui.focus, Focus::NewTask);
    assert_eq!(message_text(&ui), Some("Added \"Buy milk\""));
}

#[test]
fn blank_submission_is_silently_ignored() {
    let mut ui = new_ui();
    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "   ");
    press(&mut ui, KeyCode::Enter);

    assert!(ui.app.tasks().is_empty());
    assert!(ui.message.is_none());
}

#[test]
fn submitted_title_is_stored_verbatim() {
    let mut ui = new_ui();
    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "  indented note ");
    press(&mut ui, KeyCode::Enter);

    assert_eq!(titles(&ui), vec!["  indented note "]);
}

#[test]
fn escape_leaves_input_bar() {
    let mut ui = new_ui();
    press(&mut ui, KeyCode::Char('a'));
    type_text(&mut ui, "draft");
    press(&mut ui, KeyCode::Esc);

    assert_eq!(ui.focus, Focus::TaskList);
    assert!(ui.input.is_empty());
    assert!(ui.app.tasks().is_empty());
}

#[test]
fn new_task_uses_cycled_colour() {
    let mut ui = new_ui();
    press(&mut ui, KeyCode::Char('a'));
    press(&mut ui, KeyCode::Tab);
    let expected = TasksConfig::default().next_color(TaskColor::default());
    assert_eq!(ui.app.new_task_color(), expected);

    type_text(&mut ui, "Coloured");
    press(&mut ui, KeyCode::Enter);
    let task = expect_some(ui.app.tasks().first(), "task should exist");
    assert_eq!(task.color, expected);
}

#[test]
fn edit_form_saves_title_and_colour() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["Call mum"]);

    press(&mut ui, KeyCode::Char('e'));
    assert_eq!(ui.focus, Focus::EditForm);
    assert_eq!(ui.edit_field, EditField::Title);

    for _ in 0.."mum".len() {
        press(&mut ui, KeyCode::Backspace);
    }
    type_text(&mut ui, "dad");
    press(&mut ui, KeyCode::Tab);
    assert_eq!(ui.edit_field, EditField::Color);
    press(&mut ui, KeyCode::Right);
    press(&mut ui, KeyCode::Enter);

    assert_eq!(ui.focus, Focus::TaskList);
    let task = expect_some(ui.app.tasks().first(), "task should exist");
    assert_eq!(task.title, "Call dad");
    assert_eq!(
        task.color,
        TasksConfig::default().next_color(TaskColor::default())
    );
    assert_eq!(message_text(&ui), Some("Saved \"Call dad\""));
}

#[test]
fn edit_form_cancel_discards_draft() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["Keep me"]);

    press(&mut ui, KeyCode::Char('e'));
    type_text(&mut ui, " changed");
    press(&mut ui, KeyCode::Tab);
    press(&mut ui, KeyCode::Tab);
    press(&mut ui, KeyCode::Char(' '));
    press(&mut ui, KeyCode::Esc);

    assert_eq!(ui.focus, Focus::TaskList);
    assert_eq!(titles(&ui), vec!["Keep me"]);
    let task = expect_some(ui.app.tasks().first(), "task should exist");
    assert!(!task.is_important);
    assert!(ui.app.edit_session().is_none());
    assert_eq!(message_text(&ui), Some("Edit discarded"));
}

#[test]
fn edit_without_tasks_reports_error() {
    let mut ui = new_ui();
    press(&mut ui, KeyCode::Char('e'));

    assert_eq!(ui.focus, Focus::TaskList);
    let message = expect_some(ui.message.as_ref(), "message expected");
    assert_eq!(message.level, MessageLevel::Error);
}

#[test]
fn importance_key_toggles_twice() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["Pay rent"]);

    press(&mut ui, KeyCode::Char('i'));
    assert!(expect_some(ui.app.selected_task(), "selected").is_important);
    assert_eq!(message_text(&ui), Some("Marked \"Pay rent\" as important"));

    press(&mut ui, KeyCode::Char(' '));
    assert!(!expect_some(ui.app.selected_task(), "selected").is_important);
}

#[test]
fn shift_arrows_reorder_and_keep_selection() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["one", "two", "three"]);
    assert_eq!(ui.app.selected_index(), 2);

    press_with(&mut ui, KeyCode::Up, KeyModifiers::SHIFT);
    assert_eq!(titles(&ui), vec!["one", "three", "two"]);
    assert_eq!(ui.app.selected_index(), 1);

    press_with(&mut ui, KeyCode::Char('K'), KeyModifiers::SHIFT);
    assert_eq!(titles(&ui), vec!["three", "one", "two"]);
    assert_eq!(ui.app.selected_index(), 0);

    // Already at the top.
    press_with(&mut ui, KeyCode::Up, KeyModifiers::SHIFT);
    assert_eq!(titles(&ui), vec!["three", "one", "two"]);

    press_with(&mut ui, KeyCode::Down, KeyModifiers::SHIFT);
    assert_eq!(titles(&ui), vec!["one", "three", "two"]);
    assert_eq!(ui.app.selected_index(), 1);
}

#[test]
fn plain_arrows_only_move_selection() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["one", "two"]);

    press(&mut ui, KeyCode::Up);
    assert_eq!(ui.app.selected_index(), 0);
    press(&mut ui, KeyCode::Up);
    assert_eq!(ui.app.selected_index(), 0);
    press(&mut ui, KeyCode::Char('j'));
    assert_eq!(ui.app.selected_index(), 1);
    assert_eq!(titles(&ui), vec!["one", "two"]);
}

#[test]
fn delete_removes_selected_and_clamps() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["one", "two"]);

    press(&mut ui, KeyCode::Char('d'));
    assert_eq!(titles(&ui), vec!["one"]);
    assert_eq!(ui.app.selected_index(), 0);
    assert_eq!(message_text(&ui), Some("Task deleted"));

    press(&mut ui, KeyCode::Delete);
    assert!(ui.app.tasks().is_empty());

    press(&mut ui, KeyCode::Char('d'));
    let message = expect_some(ui.message.as_ref(), "message expected");
    assert_eq!(message.level, MessageLevel::Error);
}

#[test]
fn theme_key_toggles_appearance() {
    let mut ui = new_ui();
    assert_eq!(ui.app.appearance(), Appearance::Light);

    press(&mut ui, KeyCode::Char('t'));
    assert_eq!(ui.app.appearance(), Appearance::Dark);
    assert_eq!(message_text(&ui), Some("Switched to dark mode"));
}

#[test]
fn stored_dark_mode_is_applied_on_start() {
    let ui = ui_with(MemorySettingsStore::new().with_bool(DARK_MODE_KEY, true));
    assert_eq!(ui.app.appearance(), Appearance::Dark);
}

#[test]
fn failed_theme_save_keeps_appearance() {
    let mut ui = ui_with(ReadOnlySettings);
    press(&mut ui, KeyCode::Char('t'));

    assert_eq!(ui.app.appearance(), Appearance::Light);
    let message = expect_some(ui.message.as_ref(), "message expected");
    assert_eq!(message.level, MessageLevel::Error);
}

#[test]
fn release_events_are_ignored() {
    let mut ui = new_ui();
    ui.handle_key(KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert!(!ui.should_quit);

    press(&mut ui, KeyCode::Char('q'));
    assert!(ui.should_quit);
}

#[test]
fn fresh_message_survives_tick() {
    let mut ui = new_ui();
    ui.info("hello");
    ui.tick();
    assert_eq!(message_text(&ui), Some("hello"));
}

#[test]
fn render_shows_header_and_empty_state() {
    let ui = new_ui();
    let terminal = render(&ui, 60, 20);
    let text = screen_text(&terminal);

    assert!(text.contains("Todo"));
    assert!(text.contains("☾ light"));
    assert!(text.contains("No tasks yet"));
}

#[test]
fn render_paints_important_task_red() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["Urgent"]);
    press(&mut ui, KeyCode::Char('i'));
    press(&mut ui, KeyCode::Char('t'));

    let terminal = render(&ui, 60, 20);
    assert!(screen_text(&terminal).contains("☀ dark"));

    let buffer = terminal.backend().buffer();
    let (r, g, b) = PaletteColor::Red.rgb();
    let red = Color::Rgb(r, g, b);
    let painted = buffer
        .content
        .iter()
        .any(|cell| cell.symbol() == "U" && cell.bg == red);
    assert!(painted, "important task row should use a red fill");
}

#[test]
fn render_edit_popup_shows_draft() {
    let mut ui = new_ui();
    add_tasks(&mut ui, &["Draft me"]);
    press(&mut ui, KeyCode::Char('e'));
    type_text(&mut ui, "!");

    let text = screen_text(&render(&ui, 80, 24));
    assert!(text.contains("Edit task"));
    assert!(text.contains("Draft me!"));
}

#[test]
fn long_titles_are_truncated_by_grapheme() {
    use super::widgets::truncate_with_ellipsis;

    assert_eq!(truncate_with_ellipsis("short", 10), "short");
    assert_eq!(truncate_with_ellipsis("a long task title", 9), "a long...");
    assert_eq!(truncate_with_ellipsis("e\u{301}e\u{301}e\u{301}e\u{301}", 2), "e\u{301}e\u{301}");
    assert_eq!(truncate_with_ellipsis("anything", 0), "");
}
