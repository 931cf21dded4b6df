pub mod environment;
pub mod logging;
pub mod runtime;
