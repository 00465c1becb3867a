//! Diagnostic aggregation, range compression, and summary rendering.
//!
//! This crate sits in front of a compiler/build diagnostic stream. The
//! [`SummaryReporter`] facade receives positioned diagnostics, forwards each
//! event to an optional [`DiagnosticConsumer`] delegate, and accumulates them
//! in a [`DiagnosticStore`] with stable sequential ids. On `flush` it renders
//! a full-detail block per diagnostic followed by a compact per-file summary
//! in which the [`ranges`] module compresses id and line numbers into
//! readable spans ("7-14, 20" instead of "7,8,9,...,14,20"). Rendered text is
//! handed to a [`ReportSink`] channel selected by severity.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod ranges;
pub mod render;
pub mod reporter;
pub mod severity;
pub mod sink;
pub mod store;
pub mod style;

pub use diagnostic::Diagnostic;
pub use render::SummaryRenderer;
pub use reporter::{DiagnosticConsumer, SummaryReporter};
pub use severity::Severity;
pub use sink::{ReportSink, TracingSink, WriterSink};
pub use store::{group_by_file, DiagnosticStore};
pub use style::{Style, Styles};
