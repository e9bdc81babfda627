pub mod entry;
pub mod join;
pub mod normalize;
pub mod pos;
