//! Search algorithms running on top of [`WorldGraph`](crate::WorldGraph)

pub mod astar;
