//! The standard Life transition function, b3s23.
//!
//! See: https://conwaylife.com/wiki/Rulestring

/// Decide whether a cell is alive in the next generation.
///
/// The complete rule table:
/// * alive with 2 or 3 live neighbours survives
/// * alive with any other count dies (under- or overpopulation)
/// * dead with exactly 3 live neighbours is born
/// * dead otherwise stays dead
///
/// Pure and total over all neighbour counts.
pub fn apply_rules(is_alive: bool, live_neighbours: usize) -> bool {
    if is_alive {
        (2..=3).contains(&live_neighbours)
    } else {
        live_neighbours == 3
    }
}

#[cfg(test)]
mod test {
    use super::apply_rules;

    #[test]
    fn live_cell_survives_on_two_or_three() {
        for n in 0..=8 {
            assert_eq!(apply_rules(true, n), n == 2 || n == 3, "alive, {n} neighbours");
        }
    }

    #[test]
    fn dead_cell_born_on_exactly_three() {
        for n in 0..=8 {
            assert_eq!(apply_rules(false, n), n == 3, "dead, {n} neighbours");
        }
    }
}
