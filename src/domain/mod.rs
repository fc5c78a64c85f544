// Domain layer: the draft model and the ports the form holder prints through.

pub mod model;
pub mod ports;
