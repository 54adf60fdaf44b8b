//! Optional diagnostic line log owned by one slider instance.
//!
//! ## Usage
//!
//! Hand a [`LogPanel`] clone to the slider and keep another clone to render
//! an overlay. Lines are recorded only while the slider runs with `debug`
//! enabled; every line is also emitted through `tracing`.

use std::{collections::VecDeque, fmt, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

/// Title line shown at the bottom of a debug panel.
pub const PANEL_TITLE: &str = "QuickSlider Debugging";

const DEFAULT_PANEL_CAPACITY: usize = 64;

/// Receiver for diagnostic lines.
///
/// The slider calls [`attach`](Self::attach) once when built with `debug`
/// enabled, [`record`](Self::record) for each line, and
/// [`detach`](Self::detach) once when it is dropped.
pub trait DiagnosticSink {
    /// Creates whatever the sink needs to display lines.
    fn attach(&mut self) {}

    /// Appends one line.
    fn record(&mut self, line: &str);

    /// Tears down what [`attach`](Self::attach) created.
    fn detach(&mut self) {}
}

/// Sink that discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _line: &str) {}
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for Box<D> {
    fn attach(&mut self) {
        (**self).attach();
    }

    fn record(&mut self, line: &str) {
        (**self).record(line);
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}

#[derive(Debug)]
struct PanelState {
    lines: VecDeque<String>,
    capacity: usize,
    attached: bool,
}

/// Shared, bounded, newest-first line buffer.
///
/// Clones share the same buffer, so a renderer can read what the slider
/// writes.
#[derive(Clone, Debug)]
pub struct LogPanel {
    state: Arc<RwLock<PanelState>>,
}

impl LogPanel {
    /// Creates a detached panel keeping the default number of lines.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PANEL_CAPACITY)
    }

    /// Creates a detached panel keeping at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(PanelState {
                lines: VecDeque::with_capacity(capacity),
                capacity: capacity.max(1),
                attached: false,
            })),
        }
    }

    /// Whether the owning slider currently displays the panel.
    pub fn is_attached(&self) -> bool {
        self.state.read().attached
    }

    /// Recorded lines, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.state.read().lines.iter().cloned().collect()
    }

    /// Panel text as displayed: newest line first, title last.
    pub fn render(&self) -> String {
        let state = self.state.read();
        let mut text = String::new();
        for line in &state.lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str(PANEL_TITLE);
        text
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogPanel {
    fn attach(&mut self) {
        let mut state = self.state.write();
        state.lines.clear();
        state.attached = true;
    }

    fn record(&mut self, line: &str) {
        let mut state = self.state.write();
        if !state.attached {
            return;
        }
        state.lines.push_front(line.to_string());
        if state.lines.len() > state.capacity {
            state.lines.pop_back();
        }
    }

    fn detach(&mut self) {
        let mut state = self.state.write();
        state.lines.clear();
        state.attached = false;
    }
}

/// A sink bound to one slider, with the debug switch applied.
///
/// Attaches the sink on creation when enabled and detaches it on drop.
pub struct Diagnostics<D: DiagnosticSink> {
    sink: D,
    enabled: bool,
}

impl<D: DiagnosticSink> Diagnostics<D> {
    /// Binds `sink`, attaching it if `enabled`.
    pub fn new(mut sink: D, enabled: bool) -> Self {
        if enabled {
            sink.attach();
        }
        Self { sink, enabled }
    }

    /// Whether lines reach the sink.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emits one diagnostic line.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        debug!("{args}");
        if self.enabled {
            self.sink.record(&args.to_string());
        }
    }

    /// The bound sink.
    pub fn sink(&self) -> &D {
        &self.sink
    }
}

impl<D: DiagnosticSink> Drop for Diagnostics<D> {
    fn drop(&mut self) {
        if self.enabled {
            self.sink.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_keeps_newest_first_within_capacity() {
        let mut panel = LogPanel::with_capacity(2);
        panel.attach();
        panel.record("one");
        panel.record("two");
        panel.record("three");

        assert_eq!(panel.lines(), vec!["three".to_string(), "two".to_string()]);
        assert_eq!(panel.render(), "three\ntwo\nQuickSlider Debugging");
    }

    #[test]
    fn detached_panel_drops_lines() {
        let mut panel = LogPanel::new();
        panel.record("lost");
        assert!(panel.lines().is_empty());
        assert_eq!(panel.render(), PANEL_TITLE);
    }

    #[test]
    fn disabled_diagnostics_never_attach() {
        let panel = LogPanel::new();
        {
            let mut diagnostics = Diagnostics::new(panel.clone(), false);
            diagnostics.line(format_args!("move to page {}", 1));
            assert!(!panel.is_attached());
        }
        assert!(panel.lines().is_empty());
    }

    #[test]
    fn enabled_diagnostics_detach_on_drop() {
        let panel = LogPanel::new();
        {
            let mut diagnostics = Diagnostics::new(panel.clone(), true);
            diagnostics.line(format_args!("move to page {}", 1));
            assert!(panel.is_attached());
            assert_eq!(panel.lines(), vec!["move to page 1".to_string()]);
        }
        assert!(!panel.is_attached());
        assert!(panel.lines().is_empty());
    }
}
