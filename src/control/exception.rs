//! Captured exceptions.
//!
//! [`Exception`] is the failure payload of [`Try`](super::Try). It is a cheap,
//! shared handle around any `std::error::Error + Send + Sync + 'static`, or
//! around a plain message. Clones share the same underlying error, and two
//! handles are considered equal only when they point at the same error.
//!
//! An exception can be *raised* with [`Exception::raise`]. Raising unwinds the
//! stack; the nearest `Try` capture boundary (`Try::catching`, `Try::map`,
//! `Try::bind`, ...) stops the unwind and stores the very same exception.
//!
//! # Examples
//!
//! ```rust
//! use carrier::control::{Exception, Try};
//!
//! let exception = Exception::msg("boom");
//! let raised = exception.clone();
//!
//! let captured: Try<i32> = Try::catching(move || raised.raise());
//! assert_eq!(captured, Try::failure(exception));
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// A shared, clonable handle to a captured error.
///
/// `Exception` deliberately does not implement [`std::error::Error`] itself, so
/// that it can be built from any error with `?` or `.into()`. Use
/// [`Exception::as_error`] to reach the wrapped error.
#[derive(Clone)]
pub struct Exception {
    inner: SharedError,
}

/// Error type backing message-only exceptions.
#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for Message {}

impl Exception {
    /// Wraps an error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Exception;
    ///
    /// let exception = Exception::new(std::fmt::Error);
    /// assert!(exception.downcast_ref::<std::fmt::Error>().is_some());
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an exception carrying only a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrier::control::Exception;
    ///
    /// assert_eq!(Exception::msg("disk full").to_string(), "disk full");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Wraps an already boxed error without boxing it again.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
        }
    }

    /// Converts a panic payload into an exception.
    ///
    /// A payload that already is an `Exception` is returned unchanged, so a
    /// raised exception keeps its identity. `&str` and `String` payloads become
    /// message exceptions; anything else becomes `"Unknown panic"`.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(exception) => return *exception,
            Err(payload) => payload,
        };
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::msg(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::msg(message.clone())
        } else {
            Self::msg("Unknown panic")
        }
    }

    /// Raises this exception by unwinding the stack.
    ///
    /// The unwind is stopped by the nearest `Try` capture boundary, which
    /// stores this exact exception. Outside of any boundary the unwind
    /// terminates the current thread like a panic.
    ///
    /// # Panics
    ///
    /// Always unwinds.
    pub fn raise(self) -> ! {
        std::panic::resume_unwind(Box::new(self))
    }

    /// Returns `true` if both handles share the same underlying error.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the wrapped error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempts to downcast the wrapped error to a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if the wrapped error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<E> From<E> for Exception
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Exception").field(&self.inner).finish()
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Exception {}

impl Hash for Exception {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner).cast::<()>(), state);
    }
}
