//! Zone graph representation.
//!
//! # Data layout
//!
//! A dense `zone_count × zone_count` matrix of travel minutes stored
//! row-major in one `Vec<u32>`.  Row `u` lists the travel time from `u` to
//! every other zone; `0` marks "no edge".  Every edge is written to both
//! `(u, v)` and `(v, u)`, so the matrix is always symmetric.
//!
//! Delivery maps are a handful of zones, so the O(V²) footprint is
//! irrelevant and a row scan is the fastest neighbour iteration there is.
//! Construction refuses more than [`MAX_ZONES`] zones, which caps the
//! matrix at 64 MiB.

use pd_core::ZoneId;

use crate::{GraphError, GraphResult};

/// Largest zone count a [`ZoneGraph`] accepts.
pub const MAX_ZONES: usize = 4096;

/// An undirected edge as supplied by the setup collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from:    ZoneId,
    pub to:      ZoneId,
    /// Travel time in minutes.  `0` clears the edge.
    pub minutes: u32,
}

impl Edge {
    pub fn new(from: u32, to: u32, minutes: u32) -> Self {
        Self { from: ZoneId(from), to: ZoneId(to), minutes }
    }
}

/// Weighted undirected graph over a fixed set of zones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneGraph {
    zone_count: usize,
    weights:    Vec<u32>,
}

impl ZoneGraph {
    /// Create a graph of `zone_count` zones with no edges.
    ///
    /// Fails with [`GraphError::TooManyZones`] above [`MAX_ZONES`].
    pub fn try_new(zone_count: usize) -> GraphResult<Self> {
        let cells = zone_count
            .checked_mul(zone_count)
            .filter(|_| zone_count <= MAX_ZONES)
            .ok_or(GraphError::TooManyZones { zone_count, max: MAX_ZONES })?;
        Ok(Self { zone_count, weights: vec![0; cells] })
    }

    /// Build a graph from a finished edge list.
    pub fn from_edges(zone_count: usize, edges: &[Edge]) -> GraphResult<Self> {
        let mut graph = Self::try_new(zone_count)?;
        for e in edges {
            graph.add_edge(e.from, e.to, e.minutes)?;
        }
        Ok(graph)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    pub fn is_empty(&self) -> bool {
        self.zone_count == 0
    }

    /// `true` if `zone` is a vertex of this graph.
    #[inline]
    pub fn contains(&self, zone: ZoneId) -> bool {
        zone.index() < self.zone_count
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for u in 0..self.zone_count {
            for v in (u + 1)..self.zone_count {
                if self.weights[u * self.zone_count + v] != 0 {
                    count += 1;
                }
            }
        }
        count
    }

    // ── Mutation (setup only) ─────────────────────────────────────────────

    /// Set the symmetric edge `u ↔ v` to `minutes`.  A later call for the
    /// same pair overwrites the earlier weight; `minutes == 0` removes it.
    pub fn add_edge(&mut self, u: ZoneId, v: ZoneId, minutes: u32) -> GraphResult<()> {
        self.check(u)?;
        self.check(v)?;
        let n = self.zone_count;
        self.weights[u.index() * n + v.index()] = minutes;
        self.weights[v.index() * n + u.index()] = minutes;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Travel minutes of the direct edge `u ↔ v`, or `None` if there is no
    /// edge or either zone is out of range.
    #[inline]
    pub fn weight(&self, u: ZoneId, v: ZoneId) -> Option<u32> {
        if !self.contains(u) || !self.contains(v) {
            return None;
        }
        match self.weights[u.index() * self.zone_count + v.index()] {
            0 => None,
            w => Some(w),
        }
    }

    /// Iterator over `(neighbour, minutes)` for every edge leaving `zone`.
    ///
    /// Empty for an out-of-range zone.
    pub fn neighbors(&self, zone: ZoneId) -> impl Iterator<Item = (ZoneId, u32)> + '_ {
        let row: &[u32] = if self.contains(zone) {
            let start = zone.index() * self.zone_count;
            &self.weights[start..start + self.zone_count]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(v, &w)| (ZoneId(v as u32), w))
    }

    /// Error unless `zone` is in range.
    pub fn check(&self, zone: ZoneId) -> GraphResult<()> {
        if self.contains(zone) {
            Ok(())
        } else {
            Err(GraphError::ZoneOutOfRange { zone, zone_count: self.zone_count })
        }
    }
}
