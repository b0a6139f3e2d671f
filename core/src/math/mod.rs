pub mod guard;
pub mod rounding;

pub use guard::{require_efficiency, require_positive};
pub use rounding::{round_half_even, staggered_concurrency};
