//! Reference context threaded through signature builders.

/// Ambient state a host carries between documented objects.
///
/// Builders receive the context by reference and never mutate it. A builder
/// that must ignore part of it (the hook adapter) derives a new value for
/// its own call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefContext {
    /// Current module, as set by the most recent module declaration.
    pub module: Option<String>,
}

impl RefContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with the given current module.
    pub fn with_module(module: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
        }
    }

    /// Copy of this context with the module cleared.
    pub fn without_module(&self) -> Self {
        let mut ctx = self.clone();
        ctx.module = None;
        ctx
    }
}
