pub mod encoder;
pub mod shared_filter;

pub use encoder::{EncodeOutput, SicclEncoder};
pub use shared_filter::SharedVariableFilter;
