//! Tour representation and path cost evaluation.

use crate::map::DistanceTable;

/// Sums the frozen travel costs along consecutive stops of `order`.
///
/// The route is scored as an open path: the first city has no incoming
/// edge and the last city does not return to the start. (Conventional
/// TSP closes the cycle; this cost deliberately does not — see
/// DESIGN.md.) A single-city order costs 0. Deterministic given a
/// fixed table.
pub fn evaluate(table: &DistanceTable, order: &[usize]) -> u32 {
    order.windows(2).map(|w| table.get(w[0], w[1])).sum()
}

/// Checks that `order` visits every index in `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &city in order {
        if city >= order.len() || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// An ordered visit over all cities plus its cached path cost.
///
/// The cached cost always equals `evaluate(table, order)` against the
/// table the tour was scored with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
    cost: u32,
}

impl Tour {
    /// The identity tour `0, 1, .., N-1` with its evaluated cost.
    pub fn initial(table: &DistanceTable) -> Self {
        let order: Vec<usize> = (0..table.len()).collect();
        let cost = evaluate(table, &order);
        Self { order, cost }
    }

    /// Visiting order over city indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached path cost of [`Self::order`].
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the order is a valid permutation of all city indices.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.order)
    }

    /// Swaps the cities at two positions and adopts the already
    /// evaluated cost of the resulting order.
    pub(crate) fn swap_positions(&mut self, i: usize, j: usize, new_cost: u32) {
        self.order.swap(i, j);
        self.cost = new_cost;
    }

    /// Overwrites this tour with an order of the same length and its
    /// already evaluated cost.
    pub(crate) fn replace_with(&mut self, order: &[usize], cost: u32) {
        self.order.copy_from_slice(order);
        self.cost = cost;
    }
}
