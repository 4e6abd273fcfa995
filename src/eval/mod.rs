/// Frame evaluation of a backdrop definition.
pub mod evaluator;
