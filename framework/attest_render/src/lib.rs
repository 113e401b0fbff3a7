//! Attest Render - value prettification and message templates.
//!
//! This crate provides the formatting layer under the matcher engine:
//! - `Prettifier` - renders arbitrary values for diagnostic messages,
//!   with optional truncation of long renderings
//! - `ArgValue` - a cheaply clonable, type-erased message argument whose
//!   rendering is deferred until a message is actually requested
//! - `templates` - the raw message template vocabulary, with `{0}`-style
//!   positional placeholders
//! - `expand` - pure placeholder substitution
//!
//! # Deferred rendering
//!
//! Failure messages are almost never read: a passing assertion discards
//! its result without formatting anything. Everything here is therefore
//! built around raw templates plus captured arguments, expanded only
//! when a message accessor is called.

mod arg;
mod prettifier;
pub mod templates;

pub use arg::{ArgValue, RenderArg};
pub use prettifier::Prettifier;
pub use templates::expand;
