/// Per-frame forces applied on top of the spring toward the target.
pub mod gesture;

pub use gesture::GestureField;
