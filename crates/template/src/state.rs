use crate::model::{TableRef, Value};

/// Per-statement scratch state filled in by the emitter.
///
/// Invariants while a statement is being emitted:
/// - `buffer` holds exactly one statement's template text;
/// - every placeholder `?` written to `buffer` has a matching entry in
///   `params`, in left-to-right source order;
/// - literals inside aggregate arguments are inlined and never recorded
///   as params;
/// - `tables` records references in first-visit order.
///
/// [`TemplateState::reset`] clears content but retains buffer and vector
/// capacity so pooled states stay allocation-free across calls.
#[derive(Debug)]
pub struct TemplateState {
    buffer: String,
    params: Vec<Value>,
    tables: Vec<TableRef>,
    agg_depth: u32,
    dedup_tables: bool,
}

impl TemplateState {
    /// Create a state with the given parameter preallocation.
    pub fn new(params_capacity: usize, dedup_tables: bool) -> Self {
        Self {
            buffer: String::new(),
            params: Vec::with_capacity(params_capacity),
            tables: Vec::new(),
            agg_depth: 0,
            dedup_tables,
        }
    }

    /// Clear all statement-scoped content, retaining capacity.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.params.clear();
        self.tables.clear();
        self.agg_depth = 0;
    }

    /// Template text accumulated so far.
    pub fn template(&self) -> &str {
        &self.buffer
    }

    /// Extracted parameters, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Table references, in first-visit order.
    pub fn tables(&self) -> &[TableRef] {
        &self.tables
    }

    /// Append literal template text.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append one template character.
    pub fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Whether the template currently ends with `ch`.
    pub fn buffer_ends_with(&self, ch: char) -> bool {
        self.buffer.ends_with(ch)
    }

    /// Record an extracted literal for the placeholder just written.
    pub fn push_param(&mut self, value: Value) {
        self.params.push(value);
    }

    /// Record a table reference.
    ///
    /// Every visit is recorded unless dedup mode is on, in which case a
    /// reference equal to an already-recorded one is dropped.
    pub fn push_table(&mut self, table: TableRef) {
        if self.dedup_tables && self.tables.contains(&table) {
            return;
        }
        self.tables.push(table);
    }

    /// Whether emission is currently inside aggregate-function arguments.
    pub fn in_aggregate(&self) -> bool {
        self.agg_depth > 0
    }

    /// Enter aggregate-argument context; literals inline until exit.
    pub fn enter_aggregate(&mut self) {
        self.agg_depth += 1;
    }

    /// Leave aggregate-argument context.
    pub fn exit_aggregate(&mut self) {
        self.agg_depth = self.agg_depth.saturating_sub(1);
    }
}
