//! Cellular automaton rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;

pub use life::Life;

/// A cellular automaton rule.
///
/// A rule decides the next state of a cell from its current state
/// and the number of its living neighbors. It must not depend on anything
/// else, so that every cell of a generation can be decided independently.
pub trait Rule {
    /// The state of a cell in the next generation.
    ///
    /// `living_neighbors` is the number of living neighbors inside the grid,
    /// at most 8.
    fn next_state(&self, alive: bool, living_neighbors: usize) -> bool;
}
