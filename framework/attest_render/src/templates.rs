//! Raw message templates and placeholder expansion.
//!
//! Templates use `{0}`-style positional placeholders. The vocabulary
//! here is the glue shared by every matcher; matcher-specific templates
//! live next to the matchers that own them.

use crate::{ArgValue, Prettifier};

/// Joins a satisfied clause to a failed one: "a was 3, but b was not 4".
pub const COMMA_BUT: &str = "{0}, but {1}";

/// Joins two clauses of the same polarity: "a was 3, and b was 4".
pub const COMMA_AND: &str = "{0}, and {1}";

/// Expand `{N}` placeholders in `template` using `args`.
///
/// Pure: the same template, arguments, and prettifier configuration
/// always produce the same string. Escapes follow the usual doubling
/// convention (`{{` renders `{`, `}}` renders `}`). A placeholder with
/// no matching argument, or one that is not a number, is left verbatim.
pub fn expand(template: &str, args: &[ArgValue], prettifier: &Prettifier) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        digits.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let closed = chars.peek() == Some(&'}');
                let index = digits.parse::<usize>().ok();
                match (closed, index.and_then(|i| args.get(i))) {
                    (true, Some(arg)) => {
                        chars.next();
                        out.push_str(&arg.render(prettifier));
                    }
                    _ => {
                        // Not a placeholder we can resolve - emit verbatim.
                        out.push('{');
                        out.push_str(&digits);
                    }
                }
            }
            other => out.push(other),
        }
    }
    out
}
