// Domain layer: the person record, the predicate capability and the named criteria.

pub mod criteria;
pub mod model;
pub mod ports;
