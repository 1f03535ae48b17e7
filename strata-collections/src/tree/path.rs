//! Root-relative paths through a binary tree.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// One step down the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Descend into the left child.
    Left,
    /// Descend into the right child.
    Right,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Error> {
        match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(Error::InvalidCharacter(other)),
        }
    }
}

/// A sequence of [`Direction`]s starting at the root.
///
/// The empty path names the root itself. Paths parse from text where `L`
/// and `R` are the only accepted characters:
///
/// ```
/// use strata_collections::tree::{Direction, Path};
///
/// let path: Path = "LR".parse().unwrap();
/// assert_eq!(path.steps(), &[Direction::Left, Direction::Right]);
/// assert!("LX".parse::<Path>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Direction>,
}

impl Path {
    /// The empty path (the root).
    #[inline]
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    #[inline]
    pub fn push(&mut self, direction: Direction) {
        self.steps.push(direction);
    }

    /// The steps, root first.
    #[inline]
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` for the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        s.chars()
            .map(Direction::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(|steps| Self { steps })
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            let c = match step {
                Direction::Left => 'L',
                Direction::Right => 'R',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
