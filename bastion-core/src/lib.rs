pub mod cli;
pub mod conf;
pub mod logging;
