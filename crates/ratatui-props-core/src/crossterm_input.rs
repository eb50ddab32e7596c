use crate::input::InputEvent;
use crate::input::Key;
use crate::input::KeyCode;

/// Converts a crossterm event. Key releases/repeats and Alt chords yield `None`.
pub fn input_event_from_crossterm(ev: crossterm::event::Event) -> Option<InputEvent> {
    match ev {
        crossterm::event::Event::Key(key) => {
            if key.kind != crossterm::event::KeyEventKind::Press {
                return None;
            }
            Some(InputEvent::Key(key_from_crossterm(key)?))
        }
        crossterm::event::Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

pub fn key_from_crossterm(key: crossterm::event::KeyEvent) -> Option<Key> {
    if key.modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        return None;
    }
    let code = match key.code {
        crossterm::event::KeyCode::Char(c) => KeyCode::Char(c),
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };

    Some(Key {
        code,
        ctrl: key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> InputEvent {
        input_event_from_crossterm(crossterm::event::Event::Key(
            crossterm::event::KeyEvent::new(code, mods),
        ))
        .expect("key press converts")
    }

    #[test]
    fn shifted_char_keeps_only_the_character() {
        assert_eq!(
            press(
                crossterm::event::KeyCode::Char('G'),
                crossterm::event::KeyModifiers::SHIFT
            ),
            InputEvent::Key(Key::char('G'))
        );
    }

    #[test]
    fn ctrl_is_carried() {
        assert_eq!(
            press(
                crossterm::event::KeyCode::Char('d'),
                crossterm::event::KeyModifiers::CONTROL
            ),
            InputEvent::Key(Key::ctrl('d'))
        );
    }

    #[test]
    fn release_alt_and_unbound_keys_are_dropped() {
        let mut release = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('q'),
            crossterm::event::KeyModifiers::NONE,
        );
        release.kind = crossterm::event::KeyEventKind::Release;
        assert_eq!(
            input_event_from_crossterm(crossterm::event::Event::Key(release)),
            None
        );

        let alt = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('q'),
            crossterm::event::KeyModifiers::ALT,
        );
        assert_eq!(key_from_crossterm(alt), None);

        let enter = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        );
        assert_eq!(key_from_crossterm(enter), None);
    }
}
