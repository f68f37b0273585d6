//! Decision providers for controlled units.

pub mod ai;
