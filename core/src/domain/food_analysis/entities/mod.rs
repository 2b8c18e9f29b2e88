pub mod analysis_result;
pub mod chat;

pub use analysis_result::*;
pub use chat::*;
