pub mod driver;
pub mod scale;
pub mod state;

pub use driver::Animator;
pub use scale::{divide_scale, Motion};
pub use state::ScaleState;
