//! Small function utilities.
//!
//! - [`identity`] / [`id`]: returns its argument unchanged
//! - [`noop`]: discards its argument
//! - [`compose`] / [`comp`]: right-to-left composition
//!
//! # Examples
//!
//! ```
//! use carrier::compose::{comp, id};
//! use carrier::control::Maybe;
//!
//! let describe = comp(|n: usize| format!("{n} chars"), str::len);
//! assert_eq!(Maybe::pure("four").map(describe), Maybe::Some("4 chars".to_string()));
//! assert_eq!(Maybe::pure(3).map(id), Maybe::Some(3));
//! ```

mod utils;

pub use utils::{comp, compose, id, identity, noop};
