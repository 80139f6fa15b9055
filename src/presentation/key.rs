//! Positional keys addressing slides and shapes.

use std::str::FromStr;

use crate::error::Error;

/// A positional address into a deck.
///
/// The two granularities of the positional contract are spelled out as
/// variants, so callers match exhaustively instead of inspecting runtime
/// types. The original string forms still parse: `"3"` addresses slide 3,
/// `"3 1"` addresses shape 1 on slide 3.
///
/// # Examples
///
/// ```
/// use pitaya::Key;
///
/// assert_eq!("4".parse::<Key>()?, Key::Slide(4));
/// assert_eq!("4 2".parse::<Key>()?, Key::Shape(4, 2));
/// assert!("4 2 1".parse::<Key>().is_err());
/// # Ok::<(), pitaya::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A slide, by deck position
    Slide(usize),
    /// A shape, by (slide, shape) position
    Shape(usize, usize),
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidKey(s.to_string());
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(page), None, _) => page.parse().map(Key::Slide).map_err(|_| invalid()),
            (Some(page), Some(shape), None) => {
                let page = page.parse().map_err(|_| invalid())?;
                let shape = shape.parse().map_err(|_| invalid())?;
                Ok(Key::Shape(page, shape))
            }
            _ => Err(invalid()),
        }
    }
}

impl From<usize> for Key {
    fn from(slide: usize) -> Self {
        Key::Slide(slide)
    }
}

impl From<(usize, usize)> for Key {
    fn from((slide, shape): (usize, usize)) -> Self {
        Key::Shape(slide, shape)
    }
}
