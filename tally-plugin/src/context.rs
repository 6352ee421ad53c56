//! Evaluation Context

use tally_core::Value;

/// Per-session options for calls made through the registry
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    pub tracing: bool,
    pub trace: Vec<TraceStep>,
}

/// Single recorded function call
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub function: String,
    pub args: Vec<Value>,
    pub result: Value,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn record_trace(&mut self, function: String, args: &[Value], result: &Value) {
        if self.tracing {
            self.trace.push(TraceStep {
                function,
                args: args.to_vec(),
                result: result.clone(),
            });
        }
    }
}
