//! `pd-graph` — zone graph and shortest-time routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `ZoneGraph` (dense symmetric matrix), `Edge`, `MAX_ZONES`    |
//! | [`router`] | `Router` trait, `DijkstraRouter`, `HeapDijkstraRouter`       |
//! | [`loader`] | `load_edges_csv`, `load_edges_reader`                        |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Known limitation
//!
//! A stored weight of `0` means "no edge".  A genuinely free edge between two
//! zones therefore cannot be represented; `add_edge(u, v, 0)` removes the
//! edge instead.

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::{Edge, MAX_ZONES, ZoneGraph};
pub use loader::{load_edges_csv, load_edges_reader};
pub use router::{DijkstraRouter, HeapDijkstraRouter, Router};
