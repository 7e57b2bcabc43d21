pub mod cue;
pub mod timestamp;

pub use cue::*;
pub use timestamp::*;
