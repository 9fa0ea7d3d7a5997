// Domain layer: the loosely-typed input model. No dependencies beyond std/serde.

pub mod model;
