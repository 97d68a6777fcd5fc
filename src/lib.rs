//! Sub Shop Simulation Library
//!
//! A sandwich shop simulation core that can run headless or behind any front end.

pub mod simulation;
