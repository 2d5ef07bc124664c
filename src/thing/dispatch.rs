//! Color broadcasting

use super::{Color, Observer};

/// Broadcast a color to every observer in order, collecting reactions
pub fn broadcast<'a, I>(color: Color, observers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a dyn Observer>,
{
    let mut reactions = Vec::new();

    for observer in observers {
        if observer.handles(color) {
            match observer.react(color) {
                Some(message) => reactions.push(message),
                None => log::debug!("Observer handled {} but had nothing to say", color),
            }
        }
    }

    log::debug!("Broadcast {} produced {} reaction(s)", color, reactions.len());
    reactions
}
