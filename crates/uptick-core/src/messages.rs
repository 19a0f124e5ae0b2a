//! Texts that appear on screen.

/// First line of every run.
pub const GREETING: &str = "Hello world!";

/// Last line of every run.
pub const DONE: &str = "Done";

/// Counter line for the given count.
#[must_use]
pub fn counter(count: u64) -> String {
    format!("I've been up for {} seconds", count)
}
