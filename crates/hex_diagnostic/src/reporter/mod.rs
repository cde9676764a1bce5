//! Context-scoped, deduplicating report sink.
//!
//! Features:
//! - Explicit `begin_context` / `end_context` scoping, no ambient
//!   "current context" state
//! - Deduplication keyed by `(context, file, kind)`
//! - Ending a context forgets its keys, so a later context may report the
//!   same problem again

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Report, ReportKind};

/// Handle for an open reporting context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContextId(u32);

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
struct ReportKey {
    context: ContextId,
    file: String,
    kind: ReportKind,
}

/// Collects reports, dropping repeats within a context.
#[derive(Clone, Debug, Default)]
pub struct ErrorReporter {
    next_context: u32,
    /// Open contexts and their labels.
    contexts: FxHashMap<ContextId, String>,
    /// Keys already reported in an open context.
    seen: FxHashSet<ReportKey>,
    /// Accepted reports, in arrival order.
    reports: Vec<Report>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new reporting context.
    pub fn begin_context(&mut self, label: impl Into<String>) -> ContextId {
        let id = ContextId(self.next_context);
        self.next_context = self.next_context.wrapping_add(1);
        self.contexts.insert(id, label.into());
        id
    }

    /// Close a context and forget which problems it has seen.
    ///
    /// Reports already accepted stay available through [`Self::reports`].
    pub fn end_context(&mut self, context: ContextId) {
        self.contexts.remove(&context);
        self.seen.retain(|key| key.context != context);
    }

    /// Report a problem.
    ///
    /// Returns `true` if the report was accepted, `false` if the same
    /// `(file, kind)` was already reported in this context or the context
    /// is not open.
    pub fn report(&mut self, context: ContextId, file: &str, kind: ReportKind) -> bool {
        let Some(label) = self.contexts.get(&context) else {
            tracing::debug!(?context, "report outside an open context dropped");
            return false;
        };
        let key = ReportKey {
            context,
            file: file.to_string(),
            kind,
        };
        if self.seen.contains(&key) {
            return false;
        }
        let report = Report {
            context: label.clone(),
            file: key.file.clone(),
            kind: key.kind.clone(),
        };
        tracing::warn!(context = %report.context, "{report}");
        self.seen.insert(key);
        self.reports.push(report);
        true
    }

    /// Whether the context is still open.
    pub fn is_open(&self, context: ContextId) -> bool {
        self.contexts.contains_key(&context)
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn has_reports(&self) -> bool {
        !self.reports.is_empty()
    }

    /// Drain accepted reports.
    pub fn take_reports(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }
}
