//! Snake body entity.
//!
//! The body is an ordered sequence of cells: the front is the tail (oldest segment),
//! the back is the head (most recently added segment).

use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Position>", try_from = "Vec<Position>")]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a single-segment snake at `origin`.
    pub fn new(origin: Position) -> Self {
        Self { body: VecDeque::from([origin]) }
    }

    /// Build a snake from tail to head. Returns `None` for an empty body.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Position {
        // Never empty: every constructor enforces at least one segment.
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, pos: Position) {
        self.body.push_back(pos);
    }

    /// Drop the tail, keeping at least one segment.
    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_front();
        }
    }
}

impl From<Snake> for Vec<Position> {
    fn from(snake: Snake) -> Self {
        snake.body.into()
    }
}

impl TryFrom<Vec<Position>> for Snake {
    type Error = &'static str;

    fn try_from(segments: Vec<Position>) -> Result<Self, Self::Error> {
        Snake::from_segments(segments).ok_or("snake body must have at least one segment")
    }
}
