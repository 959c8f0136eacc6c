use crate::args::Args;
use crate::error::ConstructionError;

/// A closed set of alternative types, rendered as a Rust enum.
///
/// Implement this on the enum whose variants enumerate every type the
/// dispatcher can construct. The set is fixed at compile time; variants are
/// identified by their zero-based declaration order (the *tag*), and the
/// dispatcher pairs registration keys with tags positionally.
///
/// # Examples
///
/// ```
/// use variant_dispatch::{Args, ConstructionError, FromArgs, VariantSet};
///
/// #[derive(Debug)]
/// enum Value {
///     Int(i32),
///     Text(String),
/// }
///
/// impl VariantSet for Value {
///     const COUNT: usize = 2;
///
///     fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
///         match tag {
///             0 => i32::from_args(args).map(Value::Int),
///             1 => String::from_args(args).map(Value::Text),
///             _ => unreachable!("tag out of range"),
///         }
///     }
///
///     fn tag(&self) -> usize {
///         match self {
///             Value::Int(_) => 0,
///             Value::Text(_) => 1,
///         }
///     }
///
///     fn variant_name(tag: usize) -> &'static str {
///         match tag {
///             0 => "Int",
///             1 => "Text",
///             _ => "<unknown>",
///         }
///     }
/// }
/// ```
pub trait VariantSet: Sized {
    /// Number of variants in the set.
    const COUNT: usize;

    /// Constructs the variant at `tag` from the supplied arguments.
    ///
    /// The dispatcher only ever passes tags below [`COUNT`](Self::COUNT);
    /// implementations may panic on an out-of-range tag, since that is an
    /// internal inconsistency rather than caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the variant's payload type is not
    /// constructible from `args`.
    fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError>;

    /// Tag of the variant this value currently holds.
    fn tag(&self) -> usize;

    /// Human-readable name of the variant at `tag`, for diagnostics.
    fn variant_name(tag: usize) -> &'static str;
}

/// Construction of a value from a positional, type-erased argument list.
///
/// This is where the crate's strict construction policy lives: an
/// implementation decides which argument shapes it accepts, and every
/// non-accepted shape must come back as a [`ConstructionError`] rather than
/// being coerced. The provided implementations for the common scalar and
/// string types accept exactly two shapes:
///
/// - **zero arguments** — the type's [`Default`] value
/// - **one argument of exactly the implementing type** — that value, moved
///   in without copying
///
/// No implicit conversions are applied: an `i64` is not constructible from a
/// `char`, an `i32` is not constructible from an `i16`, and so on. User types
/// implement the trait themselves to define richer constructor shapes, using
/// [`Args::expecting`] to pull arguments and report failures.
///
/// # Examples
///
/// ```
/// use variant_dispatch::{Args, ConstructionError, FromArgs};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl FromArgs for Point {
///     fn from_args(args: Args) -> Result<Self, ConstructionError> {
///         match args.len() {
///             0 => Ok(Point { x: 0.0, y: 0.0 }),
///             2 => {
///                 let mut reader = args.expecting::<Point>();
///                 let x = reader.take::<f64>()?;
///                 let y = reader.take::<f64>()?;
///                 reader.finish()?;
///                 Ok(Point { x, y })
///             }
///             _ => Err(ConstructionError::arity::<Point>(&args)),
///         }
///     }
/// }
///
/// let point = Point::from_args(Args::new().with(1.0f64).with(2.0f64)).unwrap();
/// assert_eq!(point.x, 1.0);
/// assert_eq!(point.y, 2.0);
///
/// // A shape the type does not accept is an error, never a coercion.
/// assert!(Point::from_args(Args::new().with(1.0f64)).is_err());
/// ```
pub trait FromArgs: Sized + 'static {
    /// Constructs a value from `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if `args` does not match a constructor
    /// shape this type accepts.
    fn from_args(args: Args) -> Result<Self, ConstructionError>;
}

macro_rules! strict_from_args {
    ($($ty:ty),* $(,)?) => {$(
        impl FromArgs for $ty {
            fn from_args(args: Args) -> Result<Self, ConstructionError> {
                match args.len() {
                    0 => Ok(<$ty>::default()),
                    1 => {
                        let mut reader = args.expecting::<$ty>();
                        let value = reader.take::<$ty>()?;
                        reader.finish()?;
                        Ok(value)
                    }
                    _ => Err(ConstructionError::arity::<$ty>(&args)),
                }
            }
        }
    )*};
}

strict_from_args!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
