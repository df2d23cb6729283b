pub mod tap;

pub use tap::{GestureListener, TapGesture};
