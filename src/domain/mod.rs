// Domain layer: request/outcome models and the ports the formatter talks through.

pub mod model;
pub mod ports;
