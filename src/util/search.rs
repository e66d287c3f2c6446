use {
    num::Zero,
    std::{cmp::Ordering, collections::BinaryHeap, hash::Hash, ops::Add},
};

pub struct OpenSetElement<V, C>(pub V, pub C);

impl<V, C: Ord> PartialEq for OpenSetElement<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<V, C: Ord> PartialOrd for OpenSetElement<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Reverse the order so that cost is minimized when popping from the heap
        Some(other.1.cmp(&self.1))
    }
}

impl<V, C: Ord> Eq for OpenSetElement<V, C> {}

impl<V, C: Ord> Ord for OpenSetElement<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the order so that cost is minimized when popping from the heap
        other.1.cmp(&self.1)
    }
}

pub struct BestFirstSearchState<V, C> {
    frontier: BinaryHeap<OpenSetElement<V, C>>,
    neighbors: Vec<OpenSetElement<V, C>>,
}

impl<V, C> BestFirstSearchState<V, C> {
    fn clear(&mut self) {
        self.frontier.clear();
        self.neighbors.clear();
    }
}

impl<V, C> Default for BestFirstSearchState<V, C>
where
    OpenSetElement<V, C>: Ord,
{
    fn default() -> Self {
        Self {
            frontier: Default::default(),
            neighbors: Default::default(),
        }
    }
}

pub fn zero_heuristic<B: BestFirstSearch + ?Sized>(_search: &B, _vertex: &B::Vertex) -> B::Cost {
    B::Cost::zero()
}

/// An implementation of https://en.wikipedia.org/wiki/A*_search_algorithm and
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// The implementor owns the table of best known costs from the start; the search owns the
/// frontier. A vertex may sit in the frontier multiple times with different priorities: pushing a
/// fresh element on improvement is cheaper than re-prioritizing in place, and a stale element is
/// recognized and skipped when popped.
pub trait BestFirstSearch {
    type Vertex: Clone + Eq + Hash;
    type Cost: Add<Self::Cost, Output = Self::Cost> + Copy + Ord + Zero;

    fn start(&self) -> &Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;

    /// The best known cost from the start to `vertex`, or `None` if `vertex` hasn't been reached
    /// yet
    fn cost_from_start(&self, vertex: &Self::Vertex) -> Option<Self::Cost>;
    fn heuristic(&self, vertex: &Self::Vertex) -> Self::Cost;

    /// The cost is from `vertex` to the neighbor.
    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    );
    fn update_vertex(&mut self, from: &Self::Vertex, to: &Self::Vertex, cost: Self::Cost);

    /// Must record the start vertex with a zero cost from start.
    fn reset(&mut self);

    fn run_internal<F: Fn(&Self, &Self::Vertex) -> Self::Cost>(
        &mut self,
        state: &mut BestFirstSearchState<Self::Vertex, Self::Cost>,
        heuristic: F,
    ) -> Option<Self::Cost> {
        self.reset();
        state.clear();

        let start: Self::Vertex = self.start().clone();
        let start_estimate: Self::Cost = heuristic(self, &start);

        state.frontier.push(OpenSetElement(start, start_estimate));

        while let Some(OpenSetElement(current, priority)) = state.frontier.pop() {
            let start_to_current: Self::Cost = self
                .cost_from_start(&current)
                .expect("frontier vertices have a recorded cost from start");

            // An element pushed before its vertex was improved further is stale.
            if priority > start_to_current + heuristic(self, &current) {
                continue;
            }

            if self.is_end(&current) {
                return Some(start_to_current);
            }

            self.neighbors(&current, &mut state.neighbors);

            for OpenSetElement(neighbor, neighbor_cost) in state.neighbors.drain(..) {
                let start_to_neighbor: Self::Cost = start_to_current + neighbor_cost;

                if self
                    .cost_from_start(&neighbor)
                    .map_or(true, |cost_from_start| start_to_neighbor < cost_from_start)
                {
                    let neighbor_priority: Self::Cost =
                        start_to_neighbor + heuristic(self, &neighbor);

                    self.update_vertex(&current, &neighbor, start_to_neighbor);
                    state
                        .frontier
                        .push(OpenSetElement(neighbor, neighbor_priority));
                }
            }
        }

        None
    }

    fn run_a_star_internal(
        &mut self,
        state: &mut BestFirstSearchState<Self::Vertex, Self::Cost>,
    ) -> Option<Self::Cost> {
        self.run_internal(state, Self::heuristic)
    }

    fn run_a_star(&mut self) -> Option<Self::Cost> {
        self.run_a_star_internal(&mut BestFirstSearchState::default())
    }

    fn run_dijkstra_internal(
        &mut self,
        state: &mut BestFirstSearchState<Self::Vertex, Self::Cost>,
    ) -> Option<Self::Cost> {
        self.run_internal(state, zero_heuristic::<Self>)
    }

    fn run_dijkstra(&mut self) -> Option<Self::Cost> {
        self.run_dijkstra_internal(&mut BestFirstSearchState::default())
    }
}
