// Domain layer: entities, creation dispatch, and the prototype cloner.

pub mod factory;
pub mod model;
