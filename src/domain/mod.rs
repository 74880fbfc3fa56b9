// Domain layer: restaurant model, registry and the source port consumed by the report.

pub mod model;
pub mod ports;
pub mod registry;
