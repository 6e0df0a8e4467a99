use crate::{ParameterMetadata, Result, Value};
use std::fmt::{Debug, Display};

/// A parameterized query whose placeholders are substituted on the client.
///
/// The placeholder count is computed once, when the query is prepared. Values
/// are stored by 1-based index and turned into literals only by [`Prepared::render`].
///
/// # Binding Semantics
/// * `bind` stores a value at the index following the last one bound.
/// * `bind_index` stores a value at `index`, starting from 1.
/// * Binding the same index twice keeps the last value.
///
/// Methods return `&mut Self` for fluent chaining:
/// ```rust,ignore
/// prepared.bind(42)?.bind("hello")?;
/// ```
pub trait Prepared: Debug + Send + Sync + Display {
    /// Remove every bound value.
    fn clear_bindings(&mut self) -> Result<&mut Self>;
    /// Bind a value at the next index.
    fn bind(&mut self, value: impl Into<Value>) -> Result<&mut Self>;
    /// Bind a value at a specific 1-based index.
    fn bind_index(&mut self, value: impl Into<Value>, index: u64) -> Result<&mut Self>;
    /// Number of placeholders in the query text.
    fn parameter_count(&self) -> usize;
    /// The query text with every placeholder replaced by the literal of its value.
    fn render(&self) -> Result<String>;
    fn metadata(&self) -> ParameterMetadata;
}
