use crate::carousel::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Step(Direction),
}

impl ModalKey {
    /// Maps a `KeyboardEvent.key` value to a modal action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Step(Direction::Next)),
            "ArrowLeft" => Some(Self::Step(Direction::Prev)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_escape_keys_are_bound() {
        assert_eq!(ModalKey::from_key("Escape"), Some(ModalKey::Close));
        assert_eq!(ModalKey::from_key("ArrowRight"), Some(ModalKey::Step(Direction::Next)));
        assert_eq!(ModalKey::from_key("ArrowLeft"), Some(ModalKey::Step(Direction::Prev)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(ModalKey::from_key("Enter"), None);
        assert_eq!(ModalKey::from_key("arrowright"), None);
    }
}
