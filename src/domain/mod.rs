// Domain layer: the data model shared by the classifier, the evaluators and
// the shell. No dependencies beyond std.

pub mod model;
