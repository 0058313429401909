//! Players apply a rule to a grid.

use crate::{
    error::Error,
    grid::Grid,
    rules::{Life, Rule},
};
use log::trace;

/// Applies a [`Rule`] to a [`Grid`], one generation at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Player<R: Rule = Life> {
    rule: R,
}

impl<R: Rule> Player<R> {
    /// Creates a player with the given rule.
    pub fn new(rule: R) -> Self {
        Player { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Replaces the rule used in later generations.
    pub fn set_rule(&mut self, rule: R) {
        self.rule = rule;
    }

    /// Advances the grid by one generation.
    ///
    /// All neighborhoods are read before any cell is written,
    /// so the result does not depend on the order of the cells.
    pub fn play(&self, grid: &mut Grid) -> Result<(), Error> {
        let nbhds = grid.neighborhoods();
        for nbhd in nbhds {
            let coord = nbhd.cell_location();
            if self
                .rule
                .next_state(nbhd.cell_status(), nbhd.count_alive_neighbors())
            {
                grid.activate(coord)?;
            } else {
                grid.deactivate(coord)?;
            }
        }
        trace!("generation played, {} living cells", grid.cell_count());
        Ok(())
    }
}
