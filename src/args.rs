use crate::error::ConstructionError;
use std::any::{type_name, Any};
use std::fmt;

/// A single type-erased construction argument, with its type name retained
/// for diagnostics.
struct Arg {
    name: &'static str,
    value: Box<dyn Any>,
}

impl Arg {
    fn new<T: Any>(value: T) -> Self {
        Self {
            name: type_name::<T>(),
            value: Box::new(value),
        }
    }
}

/// An ordered, type-erased list of construction arguments.
///
/// Arguments are supplied positionally and consumed in the same order during
/// construction. Each slot keeps the name of the type it was created from, so
/// a failed construction can report the exact argument shapes it was given.
///
/// # Examples
///
/// ```
/// use variant_dispatch::Args;
///
/// let args = Args::new().with(42i32).with("hello".to_string());
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.shape()[0], "i32");
/// assert!(args.shape()[1].ends_with("String"));
/// ```
#[derive(Default)]
pub struct Args {
    slots: Vec<Arg>,
}

impl Args {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Appends an argument, returning the list for chaining.
    pub fn with<T: Any>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends an argument in place.
    pub fn push<T: Any>(&mut self, value: T) {
        self.slots.push(Arg::new(value));
    }

    /// Number of arguments in the list.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the list holds no arguments.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Type names of all arguments, in supply order.
    pub fn shape(&self) -> Vec<&'static str> {
        self.slots.iter().map(|arg| arg.name).collect()
    }

    /// Begins consuming the arguments on behalf of target type `T`.
    ///
    /// The returned reader pulls arguments front to back with
    /// [`ArgReader::take`] and reports failures against `T`'s type name.
    pub fn expecting<T: 'static>(self) -> ArgReader {
        let shape = self.shape();
        ArgReader {
            target: type_name::<T>(),
            shape,
            slots: self.slots.into_iter(),
            index: 0,
        }
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Args").field(&self.shape()).finish()
    }
}

/// Positional consumer of an [`Args`] list for one construction target.
///
/// Created by [`Args::expecting`]. Every argument must be taken with its
/// exact type; call [`finish`](ArgReader::finish) at the end to reject
/// leftover arguments.
pub struct ArgReader {
    target: &'static str,
    shape: Vec<&'static str>,
    slots: std::vec::IntoIter<Arg>,
    index: usize,
}

impl ArgReader {
    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    /// Takes the next argument as a `T`.
    ///
    /// # Errors
    ///
    /// - [`ConstructionError::Arity`] if no arguments remain
    /// - [`ConstructionError::Mismatch`] if the next argument is not exactly
    ///   a `T` (no implicit conversions are attempted)
    pub fn take<T: Any>(&mut self) -> Result<T, ConstructionError> {
        let Some(arg) = self.slots.next() else {
            return Err(ConstructionError::Arity {
                target: self.target,
                supplied: self.shape.clone(),
            });
        };
        let index = self.index;
        self.index += 1;
        match arg.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(ConstructionError::Mismatch {
                target: self.target,
                index,
                expected: type_name::<T>(),
                found: arg.name,
            }),
        }
    }

    /// Ends consumption, rejecting any arguments left untaken.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Arity`] if arguments remain.
    pub fn finish(mut self) -> Result<(), ConstructionError> {
        if self.slots.next().is_some() {
            return Err(ConstructionError::Arity {
                target: self.target,
                supplied: self.shape,
            });
        }
        Ok(())
    }
}
