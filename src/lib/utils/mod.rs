pub mod constants;
pub mod fs;
pub mod logger;
pub mod paths;
pub mod reader;
