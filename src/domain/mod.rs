// Domain layer: backend entities, pure filters and ports.

pub mod filter;
pub mod model;
pub mod ports;
