pub mod stage0_parse;
pub mod stage1_consolidate;
pub mod stage2_render;

pub use stage0_parse::*;
pub use stage1_consolidate::*;
pub use stage2_render::*;
