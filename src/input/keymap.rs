// ============================================================================
// Keyboard Bindings
// Maps key names (as reported by the host's key events) to actions
// ============================================================================

use crate::domain::{Action, Digit, Operation};

/// Action bound to `key`, or `None` if the key is ignored.
///
/// | Key | Action |
/// |---|---|
/// | `0`–`9` | digit input |
/// | `+ - * / ^` | operator |
/// | `.` | decimal point |
/// | `Enter`, `=` | equals |
/// | `Escape` | clear |
/// | `Backspace` | clear (there is no last-character delete) |
pub fn action_for_key(key: &str) -> Option<Action> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = Digit::from_char(c) {
            return Some(Action::InputDigit(digit));
        }
        if let Some(operation) = Operation::from_key(c) {
            return Some(Action::PerformOperation(operation));
        }
    }

    match key {
        "." => Some(Action::InputDecimal),
        "Enter" | "=" => Some(Action::PerformEquals),
        "Escape" | "Backspace" => Some(Action::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            assert_eq!(
                action_for_key(&d.to_string()),
                Some(Action::InputDigit(Digit::new(d).unwrap()))
            );
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            action_for_key("+"),
            Some(Action::PerformOperation(Operation::Add))
        );
        assert_eq!(
            action_for_key("-"),
            Some(Action::PerformOperation(Operation::Subtract))
        );
        assert_eq!(
            action_for_key("*"),
            Some(Action::PerformOperation(Operation::Multiply))
        );
        assert_eq!(
            action_for_key("/"),
            Some(Action::PerformOperation(Operation::Divide))
        );
        assert_eq!(
            action_for_key("^"),
            Some(Action::PerformOperation(Operation::Power))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key("."), Some(Action::InputDecimal));
        assert_eq!(action_for_key("Enter"), Some(Action::PerformEquals));
        assert_eq!(action_for_key("="), Some(Action::PerformEquals));
        assert_eq!(action_for_key("Escape"), Some(Action::Clear));
        assert_eq!(action_for_key("Backspace"), Some(Action::Clear));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(action_for_key("Tab"), None);
        assert_eq!(action_for_key("12"), None);
        assert_eq!(action_for_key("a"), None);
        assert_eq!(action_for_key(""), None);
        assert_eq!(action_for_key("٣"), None);
    }
}
