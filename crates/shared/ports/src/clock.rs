use gbce_core::Timestamp;

/// Source of "now" for the stock market
///
/// Trades recorded without an explicit time are stamped from it, and the
/// volume weighted price window ends at it. The wall-clock implementation
/// backs the binary; a frozen, manually advanced one backs the tests.
pub trait Clock: Send + Sync {
    /// Time used to stamp trades and end the trailing window
    fn now(&self) -> Timestamp;

    /// Label shown in the market's startup log line
    fn name(&self) -> &str {
        "Clock"
    }
}
