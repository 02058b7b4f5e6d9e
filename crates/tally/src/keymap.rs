use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally_config::KeyBindings;
use tally_store::{add_count, reset_count, subtract_count, Action};

/// What a key press asks the interactive loop to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Quit,
}

/// Map a key press to a command using the configured bindings
///
/// Arrow keys mirror increment/decrement; Esc and Ctrl+C always quit.
pub fn command_for_key(key: &KeyEvent, keys: &KeyBindings) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up => Some(Command::Dispatch(add_count())),
        KeyCode::Down => Some(Command::Dispatch(subtract_count())),
        KeyCode::Char(c) if c == keys.increment => Some(Command::Dispatch(add_count())),
        KeyCode::Char(c) if c == keys.decrement => Some(Command::Dispatch(subtract_count())),
        KeyCode::Char(c) if c == keys.reset => Some(Command::Dispatch(reset_count())),
        KeyCode::Char(c) if c == keys.quit => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(
            command_for_key(&press(KeyCode::Char('+')), &keys),
            Some(Command::Dispatch(add_count()))
        );
        assert_eq!(
            command_for_key(&press(KeyCode::Char('-')), &keys),
            Some(Command::Dispatch(subtract_count()))
        );
        assert_eq!(
            command_for_key(&press(KeyCode::Char('r')), &keys),
            Some(Command::Dispatch(reset_count()))
        );
        assert_eq!(
            command_for_key(&press(KeyCode::Char('q')), &keys),
            Some(Command::Quit)
        );
        assert_eq!(command_for_key(&press(KeyCode::Char('x')), &keys), None);
    }

    #[test]
    fn test_custom_bindings() {
        let keys = KeyBindings {
            increment: 'k',
            decrement: 'j',
            reset: '0',
            quit: 'x',
        };
        assert_eq!(
            command_for_key(&press(KeyCode::Char('k')), &keys),
            Some(Command::Dispatch(add_count()))
        );
        assert_eq!(
            command_for_key(&press(KeyCode::Char('x')), &keys),
            Some(Command::Quit)
        );
        // Default keys no longer bound
        assert_eq!(command_for_key(&press(KeyCode::Char('+')), &keys), None);
    }

    #[test]
    fn test_fixed_keys() {
        let keys = KeyBindings::default();
        assert_eq!(
            command_for_key(&press(KeyCode::Up), &keys),
            Some(Command::Dispatch(add_count()))
        );
        assert_eq!(
            command_for_key(&press(KeyCode::Down), &keys),
            Some(Command::Dispatch(subtract_count()))
        );
        assert_eq!(command_for_key(&press(KeyCode::Esc), &keys), Some(Command::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&ctrl_c, &keys), Some(Command::Quit));
    }
}
