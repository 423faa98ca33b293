use crate::interfaces::design_system::DesignSystem;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::collections::VecDeque;

/// Most recent log lines received from the tracing channel layer.
pub struct LogPanel {
    log_rx: Receiver<String>,
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogPanel {
    pub fn new(log_rx: Receiver<String>, capacity: usize) -> Self {
        Self {
            log_rx,
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Move pending lines from the channel, dropping the oldest past capacity.
    pub fn drain(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(line);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.drain();

        egui::CollapsingHeader::new("Diagnostics")
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(120.0)
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.lines {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };
                            ui.label(egui::RichText::new(line).monospace().size(11.0).color(color));
                        }
                    });
            });
    }
}
