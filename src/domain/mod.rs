// Domain layer: value types and ports (interfaces). No arithmetic lives here.

pub mod model;
pub mod ports;
