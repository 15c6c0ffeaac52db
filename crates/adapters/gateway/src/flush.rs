//! Log sink flushing, bound to the lifetime of a request.

use std::io::Write;
use std::sync::Arc;

/// A log sink that buffers output and must be flushed once per invocation.
pub trait LogFlush {
    fn flush(&self);
}

impl<T: LogFlush + ?Sized> LogFlush for Arc<T> {
    fn flush(&self) {
        (**self).flush();
    }
}

/// Flushes process stdout, where the Lambda log collector reads from.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutFlush;

impl LogFlush for StdoutFlush {
    fn flush(&self) {
        // nowhere left to report a failed flush
        let _ = std::io::stdout().flush();
    }
}

/// Flushes the wrapped sink when dropped, whichever way the scope is left.
pub(crate) struct FlushGuard<'a, F: LogFlush + ?Sized> {
    sink: &'a F,
}

impl<'a, F: LogFlush + ?Sized> FlushGuard<'a, F> {
    pub(crate) fn new(sink: &'a F) -> Self {
        Self { sink }
    }
}

impl<F: LogFlush + ?Sized> Drop for FlushGuard<'_, F> {
    fn drop(&mut self) {
        self.sink.flush();
    }
}
