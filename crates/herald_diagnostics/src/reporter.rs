//! The reporter facade driving aggregation, delegation, and rendering.

use crate::render::SummaryRenderer;
use crate::severity::Severity;
use crate::sink::ReportSink;
use crate::store::DiagnosticStore;
use crate::style::Styles;
use crate::Diagnostic;
use herald_config::ReporterConfig;
use herald_source::Position;
use tracing::debug;

/// A downstream consumer that must observe every reporter event.
///
/// Injected as an optional capability: when present, the reporter forwards
/// `record`/`comment` before its own bookkeeping and `flush`/`reset` before
/// its own rendering or clearing, so the consumer sees every event exactly
/// once, in arrival order, independent of the summary step.
pub trait DiagnosticConsumer {
    /// Observes one recorded diagnostic event.
    fn record(&mut self, severity: Severity, message: &str, position: &Position);

    /// Observes a comment event (never stored or summarized locally).
    fn comment(&mut self, position: &Position, message: &str);

    /// Observes a cycle reset.
    fn reset(&mut self);

    /// Observes a flush, before the local detail/summary rendering runs.
    fn flush(&mut self);
}

/// The boundary facade of the reporting pipeline.
///
/// Accepts diagnostic events, stores them with stable ids, and on
/// [`flush`](Self::flush) renders every stored diagnostic in full detail
/// followed by the aggregate per-file summary. There is no terminal state: a
/// flush marks a cycle boundary without stopping acceptance, and
/// [`reset`](Self::reset) may be called at any time, including mid-cycle.
pub struct SummaryReporter<S: ReportSink> {
    store: DiagnosticStore,
    renderer: SummaryRenderer,
    sink: S,
    delegate: Option<Box<dyn DiagnosticConsumer>>,
}

impl<S: ReportSink> SummaryReporter<S> {
    /// Creates a reporter over the given sink with plain (unstyled) rendering.
    pub fn new(sink: S) -> Self {
        Self {
            store: DiagnosticStore::new(),
            renderer: SummaryRenderer::new(Styles::plain()),
            sink,
            delegate: None,
        }
    }

    /// Creates a reporter wired from a loaded configuration.
    ///
    /// Resolves the configured color mode against `is_tty` and applies the
    /// configured display base path.
    pub fn from_config(config: &ReporterConfig, is_tty: bool, sink: S) -> Self {
        let styles = Styles::new(config.report.color.should_use_colors(is_tty));
        let mut renderer = SummaryRenderer::new(styles);
        if let Some(base) = &config.report.base_path {
            renderer = renderer.with_base_path(base);
        }
        Self::new(sink).with_renderer(renderer)
    }

    /// Replaces the renderer (styles and base path).
    pub fn with_renderer(mut self, renderer: SummaryRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Installs the delegate consumer forwarded every event.
    pub fn with_delegate(mut self, delegate: Box<dyn DiagnosticConsumer>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Records a diagnostic event.
    ///
    /// The delegate observes the event first; the diagnostic is then stored
    /// with the next sequential id.
    pub fn record(&mut self, severity: Severity, message: impl Into<String>, position: Position) {
        let message = message.into();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.record(severity, &message, &position);
        }
        self.store.record(severity, message, position);
    }

    /// Forwards a comment to the delegate; comments are never stored.
    pub fn comment(&mut self, position: &Position, message: &str) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.comment(position, message);
        }
    }

    /// Renders the current cycle: every detail block, then the summary.
    ///
    /// The delegate's flush runs first. Each detail block is emitted on the
    /// channel matching its diagnostic's severity; the summary is emitted
    /// once on the channel of the highest severity present, or the info
    /// channel when nothing is stored (the emission still happens even with
    /// no content). Rendering does not mutate the store, so flushing twice
    /// over an unchanged store emits identical text.
    pub fn flush(&mut self) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.flush();
        }
        debug!(diagnostics = self.store.len(), "rendering cycle summary");
        for diag in self.store.all() {
            let detail = self.renderer.render_detail(diag);
            self.sink.emit(diag.severity, &detail);
        }
        let summary = self.renderer.render_summary(self.store.all());
        let channel = self.store.max_severity().unwrap_or(Severity::Info);
        self.sink.emit(channel, &summary);
    }

    /// Clears the store; ids restart at 1 for the next cycle.
    ///
    /// The delegate's reset runs before the local clear.
    pub fn reset(&mut self) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.reset();
        }
        debug!("clearing diagnostic store");
        self.store.reset();
    }

    /// Returns `true` if any error-severity diagnostics are stored.
    pub fn has_errors(&self) -> bool {
        self.store.has_errors()
    }

    /// Returns `true` if any warning-severity diagnostics are stored.
    pub fn has_warnings(&self) -> bool {
        self.store.has_warnings()
    }

    /// Returns all stored diagnostics in id order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.store.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared event log letting sink and delegate probes record interleaving.
    type EventLog = Rc<RefCell<Vec<String>>>;

    #[derive(Clone, Default)]
    struct SinkProbe {
        events: EventLog,
    }

    impl ReportSink for SinkProbe {
        fn error(&mut self, message: &str) {
            self.events.borrow_mut().push(format!("sink:error:{message}"));
        }
        fn warn(&mut self, message: &str) {
            self.events.borrow_mut().push(format!("sink:warning:{message}"));
        }
        fn info(&mut self, message: &str) {
            self.events.borrow_mut().push(format!("sink:info:{message}"));
        }
    }

    #[derive(Clone, Default)]
    struct DelegateProbe {
        events: EventLog,
    }

    impl DiagnosticConsumer for DelegateProbe {
        fn record(&mut self, severity: Severity, message: &str, position: &Position) {
            self.events.borrow_mut().push(format!(
                "delegate:record:{severity}:{message}:{}",
                position.group_key()
            ));
        }
        fn comment(&mut self, _position: &Position, message: &str) {
            self.events
                .borrow_mut()
                .push(format!("delegate:comment:{message}"));
        }
        fn reset(&mut self) {
            self.events.borrow_mut().push("delegate:reset".to_string());
        }
        fn flush(&mut self) {
            self.events.borrow_mut().push("delegate:flush".to_string());
        }
    }

    fn reporter_with_log() -> (SummaryReporter<SinkProbe>, EventLog) {
        let events: EventLog = Rc::default();
        let sink = SinkProbe {
            events: Rc::clone(&events),
        };
        (SummaryReporter::new(sink), events)
    }

    #[test]
    fn end_to_end_cycle() {
        let (mut reporter, events) = reporter_with_log();
        reporter.record(Severity::Error, "msg1", Position::new("fileA", 10));
        reporter.record(Severity::Warning, "msg2", Position::new("fileB", 3));
        reporter.record(Severity::Error, "msg3", Position::new("fileA", 12));

        let ids: Vec<u32> = reporter.diagnostics().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        reporter.flush();
        let events = events.borrow();
        assert_eq!(
            *events,
            vec![
                "sink:error:[1] fileA:10:\n    msg1".to_string(),
                "sink:warning: [2] fileB:3:\n     msg2".to_string(),
                "sink:error:[3] fileA:12:\n    msg3".to_string(),
                "sink:error:2 fileA 1,3 @ 10,12\n\
                 1 fileB 2 @ 3\n\
                 1 warning found.\n\
                 2 errors found."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn flush_twice_is_idempotent() {
        let (mut reporter, events) = reporter_with_log();
        reporter.record(Severity::Error, "m", Position::new("a.c", 1));
        reporter.record(Severity::Warning, "m", Position::new("b.c", 2));

        reporter.flush();
        let first: Vec<String> = events.borrow().clone();
        events.borrow_mut().clear();
        reporter.flush();
        assert_eq!(*events.borrow(), first);
    }

    #[test]
    fn summary_channel_follows_highest_severity() {
        let (mut reporter, events) = reporter_with_log();
        reporter.record(Severity::Info, "note", Position::new("a.c", 1));
        reporter.record(Severity::Warning, "careful", Position::new("a.c", 2));
        reporter.flush();
        assert_eq!(
            events.borrow().last().unwrap(),
            "sink:warning:1 warning found."
        );
    }

    #[test]
    fn empty_flush_emits_empty_summary_on_info_channel() {
        let (mut reporter, events) = reporter_with_log();
        reporter.flush();
        assert_eq!(*events.borrow(), vec!["sink:info:".to_string()]);
    }

    #[test]
    fn delegate_observes_events_in_arrival_order() {
        let events: EventLog = Rc::default();
        let sink = SinkProbe {
            events: Rc::clone(&events),
        };
        let delegate = DelegateProbe {
            events: Rc::clone(&events),
        };
        let mut reporter = SummaryReporter::new(sink).with_delegate(Box::new(delegate));

        reporter.record(Severity::Error, "boom", Position::new("a.c", 1));
        reporter.comment(&Position::new("a.c", 2), "aside");
        reporter.flush();
        reporter.reset();

        let events = events.borrow();
        assert_eq!(events[0], "delegate:record:error:boom:a.c");
        assert_eq!(events[1], "delegate:comment:aside");
        // Delegate flush precedes any sink emission.
        assert_eq!(events[2], "delegate:flush");
        assert!(events[3].starts_with("sink:error:[1] a.c:1:"));
        assert_eq!(events.last().unwrap(), "delegate:reset");
    }

    #[test]
    fn comments_are_never_stored() {
        let (mut reporter, _events) = reporter_with_log();
        reporter.comment(&Position::new("a.c", 1), "aside");
        assert!(reporter.diagnostics().is_empty());
        assert!(!reporter.has_errors());
    }

    #[test]
    fn reset_restarts_ids_and_forwards_first() {
        let (mut reporter, _events) = reporter_with_log();
        reporter.record(Severity::Error, "m", Position::new("a.c", 1));
        reporter.reset();
        assert!(reporter.diagnostics().is_empty());
        reporter.record(Severity::Warning, "m", Position::new("a.c", 2));
        assert_eq!(reporter.diagnostics()[0].id, 1);
    }

    #[test]
    fn severity_queries_pass_through() {
        let (mut reporter, _events) = reporter_with_log();
        assert!(!reporter.has_errors());
        assert!(!reporter.has_warnings());
        reporter.record(Severity::Warning, "m", Position::new("a.c", 1));
        assert!(reporter.has_warnings());
        reporter.record(Severity::Error, "m", Position::new("a.c", 2));
        assert!(reporter.has_errors());
    }

    #[test]
    fn from_config_applies_base_path_and_color_mode() {
        let config = herald_config::load_config_from_str(
            "[report]\ncolor = \"never\"\nbase_path = \"/work/demo\"\n",
        )
        .unwrap();
        let events: EventLog = Rc::default();
        let sink = SinkProbe {
            events: Rc::clone(&events),
        };
        let mut reporter = SummaryReporter::from_config(&config, true, sink);
        reporter.record(
            Severity::Error,
            "boom",
            Position::new("/work/demo/src/top.c", 3),
        );
        reporter.flush();
        // Base path stripped, no ANSI codes despite is_tty = true.
        assert!(events.borrow()[0].starts_with("sink:error:[1] src/top.c:3:"));
    }
}
