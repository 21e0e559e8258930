// Domain layer: the movie model and the ports the adapters implement.

pub mod model;
pub mod ports;
