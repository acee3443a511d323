// Domain layer: capability contracts (ports) and the announcement model.

pub mod model;
pub mod ports;
