//! Structural upper bounds on the optimal cyclic bandwidth.
//!
//! A tight starting bound shrinks the search window the driver has to
//! bisect. Recognized shapes get exact or near-exact bounds; everything
//! else falls through to a density heuristic. Total cost is O(n + m).

use carousel_base::utils::{ceil_div, ceil_log2};
use carousel_base::Graph;
use std::collections::VecDeque;

/// Per-vertex degrees and neighbor lists, derived once from a graph and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Adjacency {
    degree: Vec<usize>,
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds the view from the graph's edge list.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let n = graph.num_vertices();
        let mut degree = vec![0; n];
        let mut neighbors = vec![Vec::new(); n];
        for &(u, v) in graph.edges() {
            degree[u - 1] += 1;
            degree[v - 1] += 1;
            neighbors[u - 1].push(v - 1);
            neighbors[v - 1].push(u - 1);
        }
        Self { degree, neighbors }
    }

    /// Degree of vertex `v` (1-indexed; duplicate edges counted).
    #[must_use]
    pub fn degree_of(&self, v: usize) -> usize {
        self.degree[v - 1]
    }

    /// Whether every vertex is reachable from vertex 1.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.bfs_farthest(0).2 == self.neighbors.len()
    }

    /// BFS from `start` (0-based). Returns the distance and index of a
    /// farthest reached vertex, plus the number of vertices reached.
    fn bfs_farthest(&self, start: usize) -> (usize, usize, usize) {
        let n = self.neighbors.len();
        let mut dist = vec![usize::MAX; n];
        dist[start] = 0;
        let mut queue = VecDeque::from([start]);
        let mut farthest = (0, start);
        let mut reached = 1;
        while let Some(v) = queue.pop_front() {
            for &w in &self.neighbors[v] {
                if dist[w] == usize::MAX {
                    dist[w] = dist[v] + 1;
                    reached += 1;
                    if dist[w] > farthest.0 {
                        farthest = (dist[w], w);
                    }
                    queue.push_back(w);
                }
            }
        }
        (farthest.0, farthest.1, reached)
    }

    /// Tree diameter via double BFS: the farthest vertex from any start is
    /// a diameter endpoint, so a second sweep from it measures the diameter.
    fn tree_diameter(&self) -> usize {
        let (_, endpoint, _) = self.bfs_farthest(0);
        self.bfs_farthest(endpoint).0
    }
}

/// Upper bound on the optimal cyclic bandwidth.
///
/// Ordered special-case cascade, first match wins; falls through to the
/// density heuristic. The returned k is always feasible, so the search
/// window [1, k] always contains the optimum. The path and cycle cases
/// carry a connectivity guard: a disjoint union of cycles is 2-regular
/// too, but cannot be labeled with k = 1.
#[must_use]
pub fn upper_bound(graph: &Graph) -> usize {
    let n = graph.num_vertices();
    let m = graph.num_edges();
    let adj = Adjacency::new(graph);

    let deg1 = (1..=n).filter(|&v| adj.degree_of(v) == 1).count();
    let deg2 = (1..=n).filter(|&v| adj.degree_of(v) == 2).count();
    let full = (1..=n).filter(|&v| adj.degree_of(v) == n - 1).count();

    // Clique.
    if full == n {
        return ceil_div(n, 2);
    }
    // Star: one center, n−1 leaves.
    if full == 1 && deg1 == n - 1 {
        return ceil_div(n, 2);
    }

    let connected = adj.is_connected();
    // Simple path.
    if connected && deg1 == 2 && deg2 == n - 2 {
        return 1;
    }
    // Simple cycle.
    if connected && deg2 == n {
        return 1;
    }
    // General tree: its radius ⌈diameter/2⌉.
    if connected && m == n - 1 {
        return ceil_div(adj.tree_diameter(), 2);
    }

    let density = (2 * m) as f64 / (n * (n - 1)) as f64;
    if density < 0.1 {
        ceil_log2(n)
    } else if density < 0.5 {
        ceil_div(n, 4)
    } else {
        ceil_div(n, 2)
    }
}

/// Degree-count-only bound: path and cycle are recognized, everything else
/// gets ⌈n/2⌉. For callers that cannot afford the adjacency view; trades
/// tightness for speed. No connectivity guard is possible without
/// adjacency, so the caller vouches for the degree profile.
#[must_use]
pub fn quick_upper_bound(graph: &Graph) -> usize {
    let n = graph.num_vertices();
    let mut degree = vec![0usize; n];
    for &(u, v) in graph.edges() {
        degree[u - 1] += 1;
        degree[v - 1] += 1;
    }
    let deg1 = degree.iter().filter(|&&d| d == 1).count();
    let deg2 = degree.iter().filter(|&&d| d == 2).count();

    if deg1 == 2 && deg2 == n - 2 {
        return 1;
    }
    if deg2 == n {
        return 1;
    }
    ceil_div(n, 2)
}
