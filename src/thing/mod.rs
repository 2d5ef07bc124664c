//! Things that react to colors
//!
//! A thing is a notifiable entity with a fixed set of colors it cares about.
//! Things never print; they hand back a reaction message and the caller
//! decides what to do with it.

use std::fmt;

pub mod dispatch;
pub mod registry;

/// Colors that can be broadcast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Black,
    Yellow,
}

impl Color {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "white" => Some(Self::White),
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            "blue" => Some(Self::Blue),
            "black" => Some(Self::Black),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of things known to the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThingKind {
    Salt,
    Frog,
}

impl ThingKind {
    /// Registry key, lowercase
    pub fn key(&self) -> &'static str {
        match self {
            ThingKind::Salt => "salt",
            ThingKind::Frog => "frog",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThingKind::Salt => "Salt",
            ThingKind::Frog => "Frog",
        }
    }

    /// Colors this kind reacts to
    pub fn colors(&self) -> &'static [Color] {
        match self {
            ThingKind::Salt => &[Color::White],
            ThingKind::Frog => &[Color::Blue, Color::Yellow],
        }
    }

    fn reaction(&self, color: Color) -> String {
        match self {
            ThingKind::Frog => format!("I’m Frog! I am {} today.", color),
            ThingKind::Salt => format!("I’m Salt! I’m sometimes {}!", color),
        }
    }
}

/// Something that can be told about a color
pub trait Observer {
    fn handles(&self, color: Color) -> bool;
    fn react(&self, color: Color) -> Option<String>;
}

/// A notifiable thing. `subscribed` is the only state that changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thing {
    kind: ThingKind,
    subscribed: bool,
}

impl Thing {
    pub fn new(kind: ThingKind) -> Self {
        Self { kind, subscribed: false }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn colors(&self) -> &'static [Color] {
        self.kind.colors()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn set_subscribed(&mut self, subscribed: bool) {
        self.subscribed = subscribed;
    }
}

impl Observer for Thing {
    fn handles(&self, color: Color) -> bool {
        self.subscribed && self.colors().contains(&color)
    }

    fn react(&self, color: Color) -> Option<String> {
        if self.handles(color) { Some(self.kind.reaction(color)) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str_case_insensitive() {
        assert_eq!(Color::from_str("white"), Some(Color::White));
        assert_eq!(Color::from_str("WHITE"), Some(Color::White));
        assert_eq!(Color::from_str("YeLLow"), Some(Color::Yellow));
        assert_eq!(Color::from_str("purple"), None);
        assert_eq!(Color::from_str(""), None);
    }

    #[test]
    fn test_color_display_is_capitalized() {
        let all = [Color::White, Color::Green, Color::Red, Color::Blue, Color::Black, Color::Yellow];
        for color in all {
            let shown = color.to_string();
            assert!(shown.chars().next().is_some_and(|c| c.is_uppercase()));
            assert_eq!(Color::from_str(&shown), Some(color));
        }
    }

    #[test]
    fn test_new_thing_is_unsubscribed() {
        assert!(!Thing::new(ThingKind::Salt).is_subscribed());
        assert!(!Thing::new(ThingKind::Frog).is_subscribed());
    }

    #[test]
    fn test_unsubscribed_thing_does_not_react() {
        let frog = Thing::new(ThingKind::Frog);
        assert!(!frog.handles(Color::Blue));
        assert_eq!(frog.react(Color::Blue), None);
    }

    #[test]
    fn test_salt_reaction() {
        let mut salt = Thing::new(ThingKind::Salt);
        salt.set_subscribed(true);
        assert_eq!(salt.react(Color::White), Some("I’m Salt! I’m sometimes White!".to_string()));
        assert_eq!(salt.react(Color::Blue), None);
    }

    #[test]
    fn test_frog_reaction() {
        let mut frog = Thing::new(ThingKind::Frog);
        frog.set_subscribed(true);
        assert_eq!(frog.react(Color::Yellow), Some("I’m Frog! I am Yellow today.".to_string()));
        assert_eq!(frog.react(Color::Blue), Some("I’m Frog! I am Blue today.".to_string()));
        assert_eq!(frog.react(Color::White), None);
    }
}
