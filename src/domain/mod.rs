// Domain layer: the value model and the worker port. No runtime dependencies beyond serde/indexmap.

pub mod ports;
pub mod value;
