pub mod dir;
pub mod errors;
pub mod logger;
pub mod string;
pub mod variables;
