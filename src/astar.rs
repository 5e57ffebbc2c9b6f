//! This module implements a best-first A* search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! but every enqueued state gets its own [SearchNode] in an arena so that the parent chain of the
//! goal can be handed to the caller as a [PathHandle].

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::{Hash, Hasher};

use crate::coordinate::Coordinate;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the root node.
const NO_PARENT: usize = usize::MAX;

/// One discovered search state. Nodes live in the arena of a single search and refer to the node
/// they were expanded from by index. Equality and hashing only consider the position, so nodes
/// reached along different routes are the same state.
#[derive(Clone, Debug)]
pub struct SearchNode<N = Coordinate> {
    pub position: N,
    parent: usize,
    /// Cost of the cheapest known path from the start.
    pub g: f64,
    /// Estimated remaining cost to the goal.
    pub h: f64,
    pub f: f64,
}

impl<N> SearchNode<N> {
    fn new(position: N, parent: usize, g: f64, h: f64) -> SearchNode<N> {
        SearchNode {
            position,
            parent,
            g,
            h,
            f: g + h,
        }
    }

    /// Arena index of the node this one was expanded from, [None] for the start node.
    pub fn parent(&self) -> Option<usize> {
        (self.parent != NO_PARENT).then_some(self.parent)
    }
}

impl<N: PartialEq> PartialEq for SearchNode<N> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<N: Eq> Eq for SearchNode<N> {}

impl<N: Hash> Hash for SearchNode<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

/// Per-position bookkeeping: the best `f` among pending entries and whether the position is
/// finalised.
#[derive(Clone, Copy, Debug)]
struct NodeState {
    best_f: f64,
    closed: bool,
}

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: f64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the node furthest from the start and
        // finally the one pushed first, so that pops are fully deterministic
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => self
                .cost
                .total_cmp(&other.cost)
                .then_with(|| other.index.cmp(&self.index)),
            s => s,
        }
    }
}

/// The goal node of a successful search together with the arena holding its ancestors.
#[derive(Clone, Debug)]
pub struct PathHandle<N = Coordinate> {
    nodes: Vec<SearchNode<N>>,
    goal: usize,
    expansions: usize,
}

impl<N: Clone> PathHandle<N> {
    pub fn goal_node(&self) -> &SearchNode<N> {
        &self.nodes[self.goal]
    }

    pub fn node(&self, index: usize) -> Option<&SearchNode<N>> {
        self.nodes.get(index)
    }

    /// Total cost of the path.
    pub fn cost(&self) -> f64 {
        self.goal_node().g
    }

    /// Number of nodes expanded before the goal was popped.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Walks from the goal node back to the start node.
    pub fn parent_chain(&self) -> impl Iterator<Item = &SearchNode<N>> + '_ {
        std::iter::successors(Some(self.goal_node()), move |node| {
            node.parent().map(|ix| &self.nodes[ix])
        })
    }

    /// The positions from start to goal, both inclusive.
    pub fn path(&self) -> Vec<N> {
        let mut path: Vec<N> = self
            .parent_chain()
            .map(|node| node.position.clone())
            .collect();
        path.reverse();
        path
    }
}

/// Result of a search that passed its preconditions. Not finding a path is a regular outcome.
#[must_use]
#[derive(Clone, Debug)]
pub enum SearchOutcome<N = Coordinate> {
    Found(PathHandle<N>),
    /// The frontier ran empty without reaching the goal.
    NoPath,
    /// The expansion budget ran out first.
    Aborted { expansions: usize },
}

impl<N: Clone> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn handle(&self) -> Option<&PathHandle<N>> {
        match self {
            SearchOutcome::Found(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn into_handle(self) -> Option<PathHandle<N>> {
        match self {
            SearchOutcome::Found(handle) => Some(handle),
            _ => None,
        }
    }

    /// Shorthand for reconstructing the path of a successful search.
    pub fn path(&self) -> Option<Vec<N>> {
        self.handle().map(PathHandle::path)
    }
}

/// Runs A* from `start` until `success` accepts a popped node. `successors` yields the reachable
/// neighbours of a node along with the step cost, `heuristic` must never overestimate the
/// remaining cost. A position is expanded at most once; the first time it is popped its `g` is
/// final.
pub fn astar<N, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, f64)>,
    FH: FnMut(&N) -> f64,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: Vec<SearchNode<N>> = Vec::new();
    let mut states: FxIndexMap<N, NodeState> = FxIndexMap::default();
    let mut to_see = BinaryHeap::new();

    let start_node = SearchNode::new(start.clone(), NO_PARENT, 0.0, heuristic(start));
    states.insert(
        start.clone(),
        NodeState {
            best_f: start_node.f,
            closed: false,
        },
    );
    to_see.push(SmallestCostHolder {
        estimated_cost: start_node.f,
        cost: 0.0,
        index: 0,
    });
    nodes.push(start_node);

    let mut expansions = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let position = nodes[index].position.clone();
        // A cheaper duplicate of this position has already been expanded.
        if states.get(&position).is_some_and(|s| s.closed) {
            continue;
        }
        if success(&position) {
            debug!(
                "Goal popped after {} expansions, {} nodes created",
                expansions,
                nodes.len()
            );
            return SearchOutcome::Found(PathHandle {
                nodes,
                goal: index,
                expansions,
            });
        }
        if max_expansions.is_some_and(|max| expansions >= max) {
            return SearchOutcome::Aborted { expansions };
        }
        if let Some(state) = states.get_mut(&position) {
            state.closed = true;
        }
        expansions += 1;

        for (successor, move_cost) in successors(&position) {
            let new_cost = cost + move_cost;
            let n = nodes.len();
            let node = match states.entry(successor) {
                Vacant(e) => {
                    let node = SearchNode::new(e.key().clone(), index, new_cost, heuristic(e.key()));
                    e.insert(NodeState {
                        best_f: node.f,
                        closed: false,
                    });
                    node
                }
                Occupied(mut e) => {
                    if e.get().closed {
                        continue;
                    }
                    let node = SearchNode::new(e.key().clone(), index, new_cost, heuristic(e.key()));
                    if e.get().best_f <= node.f {
                        continue;
                    }
                    e.get_mut().best_f = node.f;
                    node
                }
            };
            to_see.push(SmallestCostHolder {
                estimated_cost: node.f,
                cost: node.g,
                index: n,
            });
            nodes.push(node);
        }
    }
    SearchOutcome::NoPath
}
