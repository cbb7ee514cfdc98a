/// Numeric conversion helpers.
///
/// Small helpers shared by value promotion and the evaluator for moving
/// between `i64` and `f64` and for inspecting floats.
pub mod num;
