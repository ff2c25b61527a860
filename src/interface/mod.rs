pub mod parser;
pub mod session;
