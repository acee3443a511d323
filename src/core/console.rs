use crate::domain::model::Announcement;
use std::cell::RefCell;
use std::io::Write;

thread_local! {
    static CAPTURE: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Writes one announcement line to stdout, or to the active capture buffer.
pub fn announce(announcement: Announcement) {
    let line = announcement.to_string();
    tracing::trace!(?announcement, "announce");

    let pending = CAPTURE.with(|capture| match capture.borrow_mut().as_mut() {
        Some(buffer) => {
            buffer.push(line);
            None
        }
        None => Some(line),
    });

    if let Some(line) = pending {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line) {
            tracing::warn!("Failed to write announcement '{}': {}", line, e);
        }
    }
}

/// Puts the enclosing capture back, also when the closure unwinds.
struct RestoreCapture {
    previous: Option<Option<Vec<String>>>,
}

impl RestoreCapture {
    fn install() -> Self {
        let previous = CAPTURE.with(|capture| capture.replace(Some(Vec::new())));
        Self {
            previous: Some(previous),
        }
    }

    fn finish(mut self) -> Vec<String> {
        let previous = self.previous.take().unwrap_or_default();
        CAPTURE
            .with(|capture| capture.replace(previous))
            .unwrap_or_default()
    }
}

impl Drop for RestoreCapture {
    fn drop(&mut self) {
        // Only reached with `previous` still set when `f` panicked
        if let Some(previous) = self.previous.take() {
            CAPTURE.with(|capture| *capture.borrow_mut() = previous);
        }
    }
}

/// Runs `f` with announcements on this thread collected instead of printed.
///
/// Returns the closure's result and the captured lines in emission order.
/// An enclosing capture is restored afterwards, even if `f` panics.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let guard = RestoreCapture::install();
    let result = f();
    (result, guard.finish())
}
