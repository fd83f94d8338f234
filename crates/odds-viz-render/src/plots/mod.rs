pub mod distribution;
pub mod frequency;

mod axes_draw;
