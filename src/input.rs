use std::thread;
use std::time::Duration;

use crossterm::event::{
    self as ct_event, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::terminal::supports_keyboard_enhancement;

use crate::bridge::EventPoster;
use crate::event::{Key, Modifiers, MouseButton};

/// Start the input-reading thread — the single designated producer.
///
/// The thread owns the poster and exits on its own when the worker loop
/// drops its receiver (posts start returning false) or the terminal
/// read fails.
pub fn spawn(poster: EventPoster) {
    // Without the kitty keyboard protocol, terminals report key presses
    // but never releases, so each press gets a synthesized release.
    let synthesize_release = !supports_keyboard_enhancement().unwrap_or(false);

    thread::spawn(move || loop {
        // Poll with a timeout so a dead receiver is noticed even when
        // the user isn't typing.
        match ct_event::poll(Duration::from_millis(100)) {
            Ok(true) => match ct_event::read() {
                Ok(event) => {
                    if !forward(&poster, event, synthesize_release) {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {}
            Err(_) => break,
        }
    });
}

/// Translate one native notification into posts. Returns false once the
/// receiver side is gone.
fn forward(poster: &EventPoster, event: CtEvent, synthesize_release: bool) -> bool {
    match event {
        CtEvent::Key(key) => {
            // Ctrl+C is the terminal's close request.
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return poster.post_exit();
            }
            let Some(canonical) = translate_key(key.code) else {
                return true;
            };
            let modifiers = translate_modifiers(key.modifiers);
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if !poster.post_key(canonical, modifiers, true) {
                        return false;
                    }
                    if synthesize_release {
                        return poster.post_key(canonical, modifiers, false);
                    }
                    true
                }
                KeyEventKind::Release => poster.post_key(canonical, modifiers, false),
            }
        }
        CtEvent::Mouse(mouse) => {
            let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));
            match mouse.kind {
                MouseEventKind::Down(button) => {
                    poster.post_mouse_button(x, y, translate_button(button), true)
                }
                MouseEventKind::Up(button) => {
                    poster.post_mouse_button(x, y, translate_button(button), false)
                }
                MouseEventKind::Moved | MouseEventKind::Drag(_) => poster.post_mouse_move(x, y),
                MouseEventKind::ScrollUp => poster.post_mouse_wheel(x, y, 1),
                MouseEventKind::ScrollDown => poster.post_mouse_wheel(x, y, -1),
                MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => true,
            }
        }
        CtEvent::Resize(width, height) => poster.post_size(u32::from(width), u32::from(height)),
        CtEvent::FocusGained | CtEvent::FocusLost | CtEvent::Paste(_) => true,
    }
}

/// Native key code → canonical key. Codes outside the fixed vocabulary
/// map to `None` and are dropped. Terminals don't report numpad keys
/// distinctly, so the `NumPad*` variants are never produced here.
fn translate_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PrintScreen => Some(Key::Print),
        KeyCode::F(n) => translate_function_key(n),
        KeyCode::Char(c) => translate_char(c),
        _ => None,
    }
}

fn translate_function_key(n: u8) -> Option<Key> {
    match n {
        1 => Some(Key::F1),
        2 => Some(Key::F2),
        3 => Some(Key::F3),
        4 => Some(Key::F4),
        5 => Some(Key::F5),
        6 => Some(Key::F6),
        7 => Some(Key::F7),
        8 => Some(Key::F8),
        9 => Some(Key::F9),
        10 => Some(Key::F10),
        11 => Some(Key::F11),
        12 => Some(Key::F12),
        _ => None,
    }
}

fn translate_char(c: char) -> Option<Key> {
    let key = match c.to_ascii_lowercase() {
        ' ' => Key::Space,
        '+' => Key::Plus,
        '-' => Key::Minus,
        '0' => Key::Digit0,
        '1' => Key::Digit1,
        '2' => Key::Digit2,
        '3' => Key::Digit3,
        '4' => Key::Digit4,
        '5' => Key::Digit5,
        '6' => Key::Digit6,
        '7' => Key::Digit7,
        '8' => Key::Digit8,
        '9' => Key::Digit9,
        'a' => Key::A,
        'b' => Key::B,
        'c' => Key::C,
        'd' => Key::D,
        'e' => Key::E,
        'f' => Key::F,
        'g' => Key::G,
        'h' => Key::H,
        'i' => Key::I,
        'j' => Key::J,
        'k' => Key::K,
        'l' => Key::L,
        'm' => Key::M,
        'n' => Key::N,
        'o' => Key::O,
        'p' => Key::P,
        'q' => Key::Q,
        'r' => Key::R,
        's' => Key::S,
        't' => Key::T,
        'u' => Key::U,
        'v' => Key::V,
        'w' => Key::W,
        'x' => Key::X,
        'y' => Key::Y,
        'z' => Key::Z,
        _ => return None,
    };
    Some(key)
}

/// Native modifier flags → canonical bitmask. Terminals don't say which
/// side was held, so the left bit stands in for both.
fn translate_modifiers(native: KeyModifiers) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if native.contains(KeyModifiers::ALT) {
        modifiers |= Modifiers::LEFT_ALT;
    }
    if native.contains(KeyModifiers::CONTROL) {
        modifiers |= Modifiers::LEFT_CTRL;
    }
    if native.contains(KeyModifiers::SHIFT) {
        modifiers |= Modifiers::LEFT_SHIFT;
    }
    if native.contains(KeyModifiers::SUPER) || native.contains(KeyModifiers::META) {
        modifiers |= Modifiers::LEFT_META;
    }
    modifiers
}

fn translate_button(native: ct_event::MouseButton) -> MouseButton {
    match native {
        ct_event::MouseButton::Left => MouseButton::Left,
        ct_event::MouseButton::Middle => MouseButton::Middle,
        ct_event::MouseButton::Right => MouseButton::Right,
    }
}
