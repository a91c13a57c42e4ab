//! High-level runtime engine settings
//!
//! Selects which stages run in each frame of a `Scenario`

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub collisions: bool, // false = bodies pass through each other, true = elastic collisions
}

impl Default for Engine {
    fn default() -> Self {
        Self { collisions: true }
    }
}
