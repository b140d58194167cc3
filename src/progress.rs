// src/progress.rs
/// Lightweight progress reporting for batch extraction.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page extracted. `index` is its position in the input list.
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// One page could not be read or parsed; the batch goes on.
    fn item_failed(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
