use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('+' | '=' | 'k' | 'l') | KeyCode::Right | KeyCode::Up => app.increment(),
        KeyCode::Char('-' | '_' | 'j' | 'h') | KeyCode::Left | KeyCode::Down => app.decrement(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
