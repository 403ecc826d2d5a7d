pub mod course;
pub mod generate;
pub mod identity;
pub mod llm_config;
pub mod openai;
pub mod practice;
