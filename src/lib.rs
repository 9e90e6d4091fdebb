//! densegraph - weighted directed graphs over a dense adjacency matrix
//!
//! This crate provides a bounded-capacity graph with classic analyses:
//! depth/breadth-first traversal, cycle detection, connectivity
//! classification, Floyd–Warshall, Dijkstra and Prim, plus report export
//! for the command line tool.

pub mod algorithms;
pub mod export;
pub mod graph;
