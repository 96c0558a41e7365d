//! Storage-area contracts and lightweight host adapters.

pub mod area;
