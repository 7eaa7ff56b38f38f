pub(crate) mod dims;
pub(crate) mod evaluator;
