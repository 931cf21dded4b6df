//! The proxy: pairs every master connection with its own slave
//! connection and relays chunks between them in strict alternation.

pub mod handler;
pub mod listener;

#[cfg(test)]
mod tests;
