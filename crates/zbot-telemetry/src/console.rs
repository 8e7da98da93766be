//! Browser-console sink for `tracing-subscriber`'s fmt layer.

/// Turn buffered formatter output into one console line.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn take_line(buffer: &mut Vec<u8>) -> Option<String> {
    if buffer.is_empty() {
        return None;
    }
    let line = String::from_utf8_lossy(buffer).trim_end().to_string();
    buffer.clear();
    if line.is_empty() { None } else { Some(line) }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::ConsoleMakeWriter;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::io;

    use gloo::console;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    use super::take_line;

    /// Hands out one writer per event, tagged with the event's level.
    pub(crate) struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on flush or drop.
    pub(crate) struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn emit(&mut self) {
            let Some(line) = take_line(&mut self.buffer) else {
                return;
            };
            match self.level {
                Level::ERROR => console::error!(line),
                Level::WARN => console::warn!(line),
                Level::INFO => console::info!(line),
                _ => console::debug!(line),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.emit();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            self.emit();
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::take_line;

    #[test]
    fn trailing_newline_is_trimmed() {
        let mut buffer = b"INFO switched locale locale=vi\n".to_vec();
        assert_eq!(
            take_line(&mut buffer).as_deref(),
            Some("INFO switched locale locale=vi")
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn empty_output_emits_nothing() {
        let mut buffer = Vec::new();
        assert_eq!(take_line(&mut buffer), None);
        let mut blank = b"\n".to_vec();
        assert_eq!(take_line(&mut blank), None);
    }
}
