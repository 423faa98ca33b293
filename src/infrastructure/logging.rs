use crossbeam_channel::{Receiver, Sender};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

// A writer that sends log lines to the UI via a crossbeam channel
pub struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).trim_end().to_string();
        // A full or disconnected panel must never block logging
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Console logging on stderr only, so the headless binary keeps stdout for results.
pub fn init_console(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Stdout plus a channel layer whose lines end up in the diagnostics panel.
pub fn init_with_ui_channel(filter: &str, capacity: usize) -> Receiver<String> {
    let (log_tx, log_rx) = crossbeam_channel::bounded(capacity);

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false) // No color codes for UI text
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(stdout_layer)
        .with(ui_layer)
        .try_init();

    log_rx
}
