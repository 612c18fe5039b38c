//! End-to-end screen tests
//!
//! Drive `App` with synthetic key and mouse events and draw it into a
//! `TestBackend`, then read the composed screen back.

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use shine_core::{Sender, ShineConfig, ViewState, CANNED_REPLY};
use shine_tui::App;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

fn setup() -> (App, Terminal<TestBackend>) {
    let app = App::with_size(&ShineConfig::default(), WIDTH, HEIGHT);
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    (app, terminal)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> String {
    app.tick(Duration::from_millis(16));
    app.render(terminal).expect("render");
    screen(terminal)
}

/// Screen position of the first occurrence of `needle` on row `y`
fn find_on_row(terminal: &Terminal<TestBackend>, y: u16, needle: char) -> Option<u16> {
    let buf = terminal.backend().buffer();
    (0..buf.area.width).find(|&x| buf[(x, y)].symbol().starts_with(needle))
}

#[test]
fn test_starts_on_dashboard() {
    let (mut app, mut terminal) = setup();
    let text = draw(&mut app, &mut terminal);
    assert!(text.contains("Welcome, Sarah"));
    assert!(text.contains("Home"));
    assert!(!text.contains("Your Growth Story"));
}

#[test]
fn test_navigation_replaces_view_without_residue() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);

    press(&mut app, KeyCode::F(3));
    let text = draw(&mut app, &mut terminal);
    assert!(text.contains("Your Growth Story"));
    assert!(!text.contains("Welcome, Sarah"));

    press(&mut app, KeyCode::F(1));
    let text = draw(&mut app, &mut terminal);
    assert!(text.contains("Welcome, Sarah"));
    assert!(!text.contains("Your Growth Story"));
}

#[test]
fn test_celebration_overlay_opens_and_closes() {
    let (mut app, mut terminal) = setup();
    press(&mut app, KeyCode::F(3));
    press(&mut app, KeyCode::Enter);
    assert!(app.context().celebration_visible());

    // Let the burst reach full size before reading the card
    for _ in 0..90 {
        app.tick(Duration::from_millis(16));
    }
    let text = draw(&mut app, &mut terminal);
    assert!(text.contains("Incredible Achievement!"));
    assert!(text.contains("Conversation Catalyst"));

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.context().celebration_visible());
    let text = draw(&mut app, &mut terminal);
    assert!(!text.contains("Incredible Achievement!"));
    assert!(text.contains("Your Growth Story"));
}

#[test]
fn test_clicking_nav_switches_view() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);

    let nav_row = HEIGHT - 2;
    let Some(col) = find_on_row(&terminal, nav_row, 'G') else {
        panic!("Growth button not drawn on row {nav_row}");
    };
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: col,
        row: nav_row,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.context().view(), ViewState::Progress);

    let text = draw(&mut app, &mut terminal);
    assert!(text.contains("Your Growth Story"));
}

#[tokio::test(start_paused = true)]
async fn test_typed_message_gets_a_reply() {
    let (mut app, mut terminal) = setup();
    press(&mut app, KeyCode::F(2));
    for c in "hello".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.conversation().draft(), "hello");

    let before = app.conversation().turns().len();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.conversation().turns().len(), before + 1);
    assert_eq!(app.conversation().draft(), "");

    tokio::time::sleep(Duration::from_millis(1600)).await;
    app.tick(Duration::from_millis(16));

    let turns = app.conversation().turns();
    assert_eq!(turns.len(), before + 2);
    let last = &turns[turns.len() - 1];
    assert_eq!(last.sender(), Sender::Assistant);
    assert_eq!(last.content(), CANNED_REPLY);

    let text = draw(&mut app, &mut terminal);
    assert!(text.contains("hello"));
}
