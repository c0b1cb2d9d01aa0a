/// Where completed readings go.
///
/// Writes are fire and forget; the sink has no way to signal failure back
/// and the meter never retries.
pub trait DisplaySink: Send {
    /// Discard any previously displayed content.
    fn clear(&mut self);

    /// Show one formatted line.
    fn print(&mut self, text: &str);
}
