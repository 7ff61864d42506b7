use alloc::string::{String, ToString};
use core::fmt::Display;

use thiserror::Error;

// -----------------------------------------------------------------------------
// InjectError

/// Failure to build a value through a [`Provider`](crate::Provider).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InjectError {
    #[error("no service of type `{type_path}` has been registered")]
    Unresolvable { type_path: &'static str },

    #[error("type `{type_path}` has no injection recipe")]
    NotInjectable { type_path: &'static str },

    #[error("factory of service `{type_path}` failed: {message}")]
    Factory {
        type_path: &'static str,
        message: String,
    },
}

impl InjectError {
    /// A required service `T` is missing.
    #[inline]
    pub fn unresolvable<T: ?Sized>() -> Self {
        Self::Unresolvable {
            type_path: core::any::type_name::<T>(),
        }
    }

    /// The factory of service `T` reported `message`.
    #[inline]
    pub fn factory<T: ?Sized>(message: impl Display) -> Self {
        Self::Factory {
            type_path: core::any::type_name::<T>(),
            message: message.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::InjectError;

    struct Clock;

    #[test]
    fn messages_name_the_type() {
        let err = InjectError::unresolvable::<Clock>();
        assert!(err.to_string().contains("Clock"));

        let err = InjectError::factory::<Clock>("no time source");
        assert!(err.to_string().ends_with("failed: no time source"));
    }
}
