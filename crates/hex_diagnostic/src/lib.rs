//! Error reporting for pattern loading.
//!
//! Loading a pattern file never aborts on a bad line: the line is skipped
//! and reported. Reports are deduplicated so the same problem in the same
//! file is only surfaced once per reporting context.
//!
//! ```text
//! let ctx = reporter.begin_context("list default");
//! reporter.report(ctx, "default/spell", ReportKind::UnrecognizedLine { .. });
//! reporter.report(ctx, "default/spell", ReportKind::UnrecognizedLine { .. }); // dropped
//! reporter.end_context(ctx);
//! let reports = reporter.take_reports();
//! ```

mod report;
pub mod reporter;

pub use report::{Report, ReportKind};
pub use reporter::{ContextId, ErrorReporter};
