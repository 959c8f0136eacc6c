//! # variant-dispatch
//!
//! Dispatch runtime keys to a closed set of types and construct tagged values.
//!
//! `variant-dispatch` maps an arbitrary runtime key to one of a fixed set of
//! types known at compile time, constructs a value of the resolved type from
//! caller-supplied arguments, and hands back the result as a plain Rust enum
//! covering all registered types. The caller then branches on the enum as
//! usual — no downcasting, no trait objects in the result.
//!
//! ## Key Features
//!
//! - **Closed type set**: the candidate types are the variants of your enum,
//!   fixed at compile time
//! - **Runtime keys**: any `Eq + Hash + Debug` key type selects which variant
//!   to construct
//! - **Strict construction**: arguments must match a constructor shape
//!   exactly; there are no implicit conversions, ever
//! - **Typed errors**: an unknown key and a non-constructible argument list
//!   are distinct, recoverable error values — nothing panics on caller input
//! - **No macros**: implement two small traits by hand; no derive magic
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use variant_dispatch::{
//!     Args, ConstructionError, DispatchError, FromArgs, TypeDispatcher, VariantSet,
//! };
//!
//! // The closed set of types the dispatcher can construct.
//! #[derive(Debug)]
//! enum Value {
//!     Letter(char),
//!     Number(i32),
//!     Wide(i64),
//! }
//!
//! impl VariantSet for Value {
//!     const COUNT: usize = 3;
//!
//!     fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
//!         match tag {
//!             0 => char::from_args(args).map(Value::Letter),
//!             1 => i32::from_args(args).map(Value::Number),
//!             2 => i64::from_args(args).map(Value::Wide),
//!             _ => unreachable!("tag out of range"),
//!         }
//!     }
//!
//!     fn tag(&self) -> usize {
//!         match self {
//!             Value::Letter(_) => 0,
//!             Value::Number(_) => 1,
//!             Value::Wide(_) => 2,
//!         }
//!     }
//!
//!     fn variant_name(tag: usize) -> &'static str {
//!         match tag {
//!             0 => "Letter",
//!             1 => "Number",
//!             2 => "Wide",
//!             _ => "<unknown>",
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One key per variant, paired in declaration order.
//!     let dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3])?;
//!
//!     // No arguments constructs the variant's default value.
//!     let value = dispatcher.construct(&1, Args::new())?;
//!     assert!(matches!(value, Value::Letter('\0')));
//!
//!     // One argument of the exact payload type moves it in.
//!     let value = dispatcher.construct(&2, Args::new().with(42i32))?;
//!     assert!(matches!(value, Value::Number(42)));
//!
//!     // Construction is strict: an i64 is not constructible from a char.
//!     let result = dispatcher.construct(&3, Args::new().with('a'));
//!     assert!(matches!(
//!         result,
//!         Err(DispatchError::Construction(ConstructionError::Mismatch { .. }))
//!     ));
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use variant_dispatch::{Args, ConstructionError, DispatchError, FromArgs, TypeDispatcher, VariantSet};
//!
//! #[derive(Debug)]
//! enum Value {
//!     Number(i32),
//! }
//!
//! impl VariantSet for Value {
//!     const COUNT: usize = 1;
//!
//!     fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
//!         match tag {
//!             0 => i32::from_args(args).map(Value::Number),
//!             _ => unreachable!("tag out of range"),
//!         }
//!     }
//!
//!     fn tag(&self) -> usize {
//!         0
//!     }
//!
//!     fn variant_name(_tag: usize) -> &'static str {
//!         "Number"
//!     }
//! }
//!
//! let dispatcher = TypeDispatcher::<&str, Value>::new(["number"]).unwrap();
//!
//! // A key that was never bound is a distinct, recoverable error.
//! match dispatcher.construct(&"missing", Args::new()) {
//!     Ok(value) => println!("constructed {:?}", value),
//!     Err(DispatchError::UnknownKey(key)) => println!("no type bound to {}", key),
//!     Err(DispatchError::Construction(e)) => println!("bad arguments: {}", e),
//! }
//!
//! // So is an argument list the bound type cannot be built from.
//! match dispatcher.construct(&"number", Args::new().with("not a number")) {
//!     Ok(value) => println!("constructed {:?}", value),
//!     Err(e) => println!("error: {}", e),
//! }
//! ```
//!
//! ### Sharing Across Threads
//!
//! A dispatcher is read-only after construction, so it can be shared freely
//! once registration is complete:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use variant_dispatch::{Args, ConstructionError, FromArgs, TypeDispatcher, VariantSet};
//!
//! #[derive(Debug)]
//! enum Value {
//!     Number(i32),
//!     Text(String),
//! }
//!
//! impl VariantSet for Value {
//!     const COUNT: usize = 2;
//!
//!     fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
//!         match tag {
//!             0 => i32::from_args(args).map(Value::Number),
//!             1 => String::from_args(args).map(Value::Text),
//!             _ => unreachable!("tag out of range"),
//!         }
//!     }
//!
//!     fn tag(&self) -> usize {
//!         match self {
//!             Value::Number(_) => 0,
//!             Value::Text(_) => 1,
//!         }
//!     }
//!
//!     fn variant_name(tag: usize) -> &'static str {
//!         match tag {
//!             0 => "Number",
//!             1 => "Text",
//!             _ => "<unknown>",
//!         }
//!     }
//! }
//!
//! let dispatcher = Arc::new(TypeDispatcher::<u32, Value>::new([1, 2]).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let dispatcher = Arc::clone(&dispatcher);
//!         thread::spawn(move || dispatcher.construct(&1, Args::new().with(i as i32)).unwrap())
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert!(matches!(handle.join().unwrap(), Value::Number(_)));
//! }
//! ```

mod args;
mod dispatcher;
mod error;
mod variant;


pub use args::{ArgReader, Args};
pub use dispatcher::TypeDispatcher;
pub use error::{ConstructionError, DispatchError, RegistryError};
pub use variant::{FromArgs, VariantSet};
