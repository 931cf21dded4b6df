pub mod close;
pub mod limiter;
pub mod shutdown_token;

#[cfg(test)]
mod tests;
