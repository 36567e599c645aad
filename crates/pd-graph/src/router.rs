//! Routing trait and Dijkstra implementations.
//!
//! # Pluggability
//!
//! The dispatcher calls routing through the [`Router`] trait, so a different
//! shortest-path strategy can be dropped in without touching the dispatch
//! loop.  Both provided routers recompute from scratch on every query and
//! keep no state between calls.
//!
//! # Unreachable
//!
//! `None` is the "infinite distance" sentinel.  Callers treat it as "not
//! eligible", never as an error.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pd_core::ZoneId;

use crate::ZoneGraph;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Shortest travel time between two zones.
pub trait Router {
    /// Minimum total minutes from `from` to `to`, or `None` if no path
    /// exists (or either zone is outside the graph).  `from == to` is `Some(0)`.
    fn shortest_time(&self, graph: &ZoneGraph, from: ZoneId, to: ZoneId) -> Option<u32>;
}

impl<R: Router + ?Sized> Router for &R {
    fn shortest_time(&self, graph: &ZoneGraph, from: ZoneId, to: ZoneId) -> Option<u32> {
        (**self).shortest_time(graph, from, to)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Array-scan Dijkstra over the dense matrix: O(V²) per query.
///
/// The textbook choice for dense graphs, and the default router.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_time(&self, graph: &ZoneGraph, from: ZoneId, to: ZoneId) -> Option<u32> {
        if !graph.contains(from) || !graph.contains(to) {
            return None;
        }

        let n = graph.zone_count();
        let mut dist    = vec![u32::MAX; n];
        let mut visited = vec![false; n];
        dist[from.index()] = 0;

        for _ in 0..n {
            // Closest unvisited zone; stop once the rest are unreachable.
            let Some(u) = (0..n)
                .filter(|&v| !visited[v] && dist[v] != u32::MAX)
                .min_by_key(|&v| dist[v])
            else {
                break;
            };
            visited[u] = true;
            if u == to.index() {
                break;
            }

            for (v, w) in graph.neighbors(ZoneId(u as u32)) {
                let v = v.index();
                if visited[v] {
                    continue;
                }
                let candidate = dist[u].saturating_add(w);
                if candidate < dist[v] {
                    dist[v] = candidate;
                }
            }
        }

        match dist[to.index()] {
            u32::MAX => None,
            d => Some(d),
        }
    }
}

// ── HeapDijkstraRouter ────────────────────────────────────────────────────────

/// Binary-heap Dijkstra: O((V + E) log V) per query.
///
/// Gives the same answers as [`DijkstraRouter`]; preferable once maps grow
/// past a few hundred zones and rows become mostly empty.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeapDijkstraRouter;

impl Router for HeapDijkstraRouter {
    fn shortest_time(&self, graph: &ZoneGraph, from: ZoneId, to: ZoneId) -> Option<u32> {
        if !graph.contains(from) || !graph.contains(to) {
            return None;
        }

        let mut dist = vec![u32::MAX; graph.zone_count()];
        dist[from.index()] = 0;

        // Reverse turns the max-heap into a min-heap; the ZoneId secondary
        // key keeps pop order deterministic.
        let mut heap: BinaryHeap<Reverse<(u32, ZoneId)>> = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        while let Some(Reverse((cost, zone))) = heap.pop() {
            if zone == to {
                return Some(cost);
            }
            // Skip stale heap entries.
            if cost > dist[zone.index()] {
                continue;
            }
            for (next, w) in graph.neighbors(zone) {
                let new_cost = cost.saturating_add(w);
                if new_cost < dist[next.index()] {
                    dist[next.index()] = new_cost;
                    heap.push(Reverse((new_cost, next)));
                }
            }
        }

        None
    }
}
