use serde::{Deserialize, Serialize};

/// The four control keys the robot responds to.
///
/// Any host (desktop window, headless driver, test) maps its own key events
/// into these; everything else about the platform's keyboard stays outside
/// the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl DirectionKey {
    /// Map a character key to a direction, WASD layout. Unknown characters
    /// return `None` and are ignored by callers.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Self::Forward),
            's' => Some(Self::Backward),
            'a' => Some(Self::TurnLeft),
            'd' => Some(Self::TurnRight),
            _ => None,
        }
    }

    const ALL: [Self; 4] = [
        Self::Forward,
        Self::Backward,
        Self::TurnLeft,
        Self::TurnRight,
    ];

    fn index(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
            Self::TurnLeft => 2,
            Self::TurnRight => 3,
        }
    }
}

/// Pressed-state snapshot for the four direction keys.
///
/// Mutated by host press/release events, read once per frame by the robot
/// controller. Keys start released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pressed: [bool; 4],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: DirectionKey) {
        self.pressed[key.index()] = true;
    }

    pub fn release(&mut self, key: DirectionKey) {
        self.pressed[key.index()] = false;
    }

    /// Set pressed state directly (press == true), matching host event
    /// handlers that receive an element state.
    pub fn set(&mut self, key: DirectionKey, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    pub fn is_pressed(&self, key: DirectionKey) -> bool {
        self.pressed[key.index()]
    }

    pub fn any_pressed(&self) -> bool {
        self.pressed.iter().any(|p| *p)
    }

    /// Release all keys, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed = [false; 4];
    }

    /// Iterate over currently pressed keys.
    pub fn pressed_keys(&self) -> impl Iterator<Item = DirectionKey> + '_ {
        DirectionKey::ALL
            .into_iter()
            .filter(move |k| self.is_pressed(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_start_released() {
        let keys = KeyState::new();
        assert!(!keys.any_pressed());
        assert!(!keys.is_pressed(DirectionKey::Forward));
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut keys = KeyState::new();
        keys.press(DirectionKey::Forward);
        assert!(keys.is_pressed(DirectionKey::Forward));
        assert!(!keys.is_pressed(DirectionKey::Backward));

        keys.release(DirectionKey::Forward);
        assert!(!keys.any_pressed());
    }

    #[test]
    fn set_mirrors_element_state() {
        let mut keys = KeyState::new();
        keys.set(DirectionKey::TurnLeft, true);
        assert!(keys.is_pressed(DirectionKey::TurnLeft));
        keys.set(DirectionKey::TurnLeft, false);
        assert!(!keys.is_pressed(DirectionKey::TurnLeft));
    }

    #[test]
    fn unknown_characters_are_ignored() {
        assert_eq!(DirectionKey::from_char('w'), Some(DirectionKey::Forward));
        assert_eq!(DirectionKey::from_char('A'), Some(DirectionKey::TurnLeft));
        assert_eq!(DirectionKey::from_char('x'), None);
        assert_eq!(DirectionKey::from_char(' '), None);
    }

    #[test]
    fn clear_releases_everything() {
        let mut keys = KeyState::new();
        keys.press(DirectionKey::Forward);
        keys.press(DirectionKey::TurnRight);
        keys.clear();
        assert!(!keys.any_pressed());
    }

    #[test]
    fn pressed_keys_iterates_only_held() {
        let mut keys = KeyState::new();
        keys.press(DirectionKey::Backward);
        keys.press(DirectionKey::TurnLeft);
        let held: Vec<_> = keys.pressed_keys().collect();
        assert_eq!(held, vec![DirectionKey::Backward, DirectionKey::TurnLeft]);
    }
}
