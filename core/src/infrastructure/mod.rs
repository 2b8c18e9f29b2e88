pub mod llm;
pub mod nutrition;
