use crate::args::Args;
use std::any::type_name;
use thiserror::Error;

/// Errors that can occur while registering keys with a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The number of supplied keys does not match the number of variants.
    ///
    /// Every registration must supply exactly one key per variant, in
    /// registry order.
    #[error("expected exactly {expected} key(s), one per variant, got {supplied}")]
    Arity {
        /// Number of variants in the closed type set.
        expected: usize,
        /// Number of keys actually supplied.
        supplied: usize,
    },
}

/// Errors that can occur when resolving a key and constructing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The supplied key has no type bound to it.
    ///
    /// Carries the key formatted with `Debug`.
    #[error("no type bound to key {0}")]
    UnknownKey(String),

    /// The bound type could not be constructed from the supplied arguments.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// The bound type is not constructible from the supplied arguments.
///
/// Construction is strict: no implicit conversions are applied, so both the
/// argument count and every argument's exact type must match a constructor
/// shape the target type accepts. The error identifies the target type and
/// the offending argument shapes so the caller can correct the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The argument count does not match any constructor shape of the target.
    #[error("`{target}` is not constructible from {} argument(s) of shape ({})", .supplied.len(), .supplied.join(", "))]
    Arity {
        /// Type name of the construction target.
        target: &'static str,
        /// Type names of the supplied arguments, in order.
        supplied: Vec<&'static str>,
    },

    /// An argument's type does not match what the target expects at that position.
    #[error("argument {index} for `{target}` has type `{found}`, expected `{expected}`")]
    Mismatch {
        /// Type name of the construction target.
        target: &'static str,
        /// Zero-based position of the offending argument.
        index: usize,
        /// Type name the target expects at this position.
        expected: &'static str,
        /// Type name of the argument actually supplied.
        found: &'static str,
    },
}

impl ConstructionError {
    /// Builds a [`ConstructionError::Arity`] for target `T` from the
    /// supplied argument list.
    ///
    /// Convenience for [`FromArgs`](crate::FromArgs) implementations
    /// rejecting an argument count they do not accept.
    pub fn arity<T: 'static>(args: &Args) -> Self {
        ConstructionError::Arity {
            target: type_name::<T>(),
            supplied: args.shape(),
        }
    }
}
