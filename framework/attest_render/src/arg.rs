use std::fmt;
use std::sync::Arc;

use crate::Prettifier;

/// A message argument whose rendering is deferred to report time.
///
/// Implementors receive the prettifier in effect when the message is
/// finally expanded, so truncation and other presentation policy apply
/// at read time, not at capture time.
pub trait RenderArg: Send + Sync {
    /// Render this argument for substitution into a template.
    fn render(&self, prettifier: &Prettifier) -> String;
}

/// A captured, type-erased message argument.
///
/// Cloning is O(1): the underlying value is shared via `Arc`. The three
/// constructors cover the three kinds of argument a message carries:
///
/// - [`ArgValue::value`] - an operand, rendered through the prettifier
///   (strings come out quoted, collections bracketed)
/// - [`ArgValue::raw`] - literal text spliced in verbatim (descriptions,
///   identifiers)
/// - [`ArgValue::list`] - a sequence rendered as comma-separated items,
///   for "one of (1, 2, 3)" style messages
///
/// Composed results splice sub-messages in through custom [`RenderArg`]
/// implementations via [`ArgValue::lazy`].
#[derive(Clone)]
pub struct ArgValue(Arc<dyn RenderArg>);

impl ArgValue {
    /// Capture an operand value.
    pub fn value(value: impl fmt::Debug + Send + Sync + 'static) -> Self {
        ArgValue(Arc::new(DebugArg(value)))
    }

    /// Literal text, spliced in without quoting or truncation.
    pub fn raw(text: impl Into<String>) -> Self {
        ArgValue(Arc::new(RawArg(text.into())))
    }

    /// An operand rendering captured at apply time.
    ///
    /// For unsized operands that cannot be captured by ownership: the
    /// debug rendering is taken eagerly, but the prettifier's
    /// truncation policy still applies when the message is read.
    pub fn rendered(text: impl Into<String>) -> Self {
        ArgValue(Arc::new(RenderedArg(text.into())))
    }

    /// Capture a sequence, rendered as `item, item, item`.
    pub fn list<T: fmt::Debug + Send + Sync + 'static>(items: Vec<T>) -> Self {
        ArgValue(Arc::new(ListArg(items)))
    }

    /// Wrap a custom deferred argument.
    pub fn lazy(arg: impl RenderArg + 'static) -> Self {
        ArgValue(Arc::new(arg))
    }

    /// Render with the given prettifier.
    pub fn render(&self, prettifier: &Prettifier) -> String {
        self.0.render(prettifier)
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.render(&Prettifier::new()))
    }
}

struct DebugArg<T>(T);

impl<T: fmt::Debug + Send + Sync> RenderArg for DebugArg<T> {
    fn render(&self, prettifier: &Prettifier) -> String {
        prettifier.apply(&self.0)
    }
}

struct RawArg(String);

impl RenderArg for RawArg {
    fn render(&self, _prettifier: &Prettifier) -> String {
        self.0.clone()
    }
}

struct RenderedArg(String);

impl RenderArg for RenderedArg {
    fn render(&self, prettifier: &Prettifier) -> String {
        prettifier.clip(self.0.clone())
    }
}

struct ListArg<T>(Vec<T>);

impl<T: fmt::Debug + Send + Sync> RenderArg for ListArg<T> {
    fn render(&self, prettifier: &Prettifier) -> String {
        let items: Vec<String> = self.0.iter().map(|i| prettifier.apply(i)).collect();
        items.join(", ")
    }
}
