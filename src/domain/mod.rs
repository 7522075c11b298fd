// Domain layer: the object model and its capability traits. No I/O.

pub mod model;
pub mod ports;
