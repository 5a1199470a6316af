use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked the player to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    TogglePlay,
    Next,
    Previous,
    VolumeUp,
    VolumeDown,
    /// Jump to this share of the track, in percent.
    Seek(f64),
    TogglePanel,
    Quit,
}

/// Map a key press to an intent. Unbound keys yield `None`.
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    let intent = match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => Intent::TogglePlay,
        KeyCode::Char('l') | KeyCode::Right => Intent::Next,
        KeyCode::Char('h') | KeyCode::Left => Intent::Previous,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Intent::VolumeUp,
        KeyCode::Char('-') | KeyCode::Down => Intent::VolumeDown,
        KeyCode::Char(c @ '0'..='9') => Intent::Seek(f64::from(c as u8 - b'0') * 10.0),
        KeyCode::Char('m') => Intent::TogglePanel,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}
