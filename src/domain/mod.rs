// Domain layer: entities, value holders and ports (interfaces). No storage code lives here.

pub mod container;
pub mod model;
pub mod ports;
