use crate::args::Args;
use crate::error::{DispatchError, RegistryError};
use crate::variant::VariantSet;
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// Maps runtime keys to the variants of a closed type set and constructs
/// tagged values on demand.
///
/// A dispatcher is built from exactly one key per variant of `V`, paired
/// positionally with the variants in declaration order. After construction
/// the binding is read-only, so a dispatcher can be shared across threads
/// (behind an [`Arc`](std::sync::Arc), or by reference) and used for
/// concurrent construction calls.
///
/// Every call to [`construct`](Self::construct) performs a fresh
/// construction; no results are cached and no call affects another.
///
/// # Examples
///
/// ```
/// use variant_dispatch::{Args, ConstructionError, FromArgs, TypeDispatcher, VariantSet};
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
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = TypeDispatcher::<u32, Value>::new([1, 2])?;
///
/// let value = dispatcher.construct(&1, Args::new().with(7i32))?;
/// assert!(matches!(value, Value::Int(7)));
///
/// let value = dispatcher.construct(&2, Args::new())?;
/// assert!(matches!(value, Value::Text(ref s) if s.is_empty()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TypeDispatcher<K, V> {
    bindings: HashMap<K, usize>,
    _variants: PhantomData<fn() -> V>,
}

impl<K, V> TypeDispatcher<K, V>
where
    K: Eq + Hash + Debug,
    V: VariantSet,
{
    /// Creates a dispatcher from exactly `V::COUNT` keys, paired with the
    /// variants in declaration order.
    ///
    /// Duplicate keys within the list are allowed but overwrite: the last
    /// occurrence wins, leaving earlier variants unreachable through that key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Arity`] if the number of keys differs from
    /// `V::COUNT`.
    pub fn new<I>(keys: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut dispatcher = Self {
            bindings: HashMap::with_capacity(V::COUNT),
            _variants: PhantomData,
        };
        dispatcher.bind(keys)?;
        Ok(dispatcher)
    }

    /// Re-registers keys against the variants, replacing the previous
    /// binding wholesale.
    ///
    /// The new binding is built from scratch; keys bound before this call
    /// and absent from `keys` no longer resolve. Duplicate-key semantics
    /// match [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Arity`] if the number of keys differs from
    /// `V::COUNT`. On error the previous binding is left untouched.
    pub fn bind<I>(&mut self, keys: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        if keys.len() != V::COUNT {
            return Err(RegistryError::Arity {
                expected: V::COUNT,
                supplied: keys.len(),
            });
        }

        let mut bindings = HashMap::with_capacity(V::COUNT);
        for (tag, key) in keys.into_iter().enumerate() {
            if bindings.contains_key(&key) {
                debug!(
                    "key {:?} rebound to variant `{}`",
                    key,
                    V::variant_name(tag)
                );
            }
            bindings.insert(key, tag);
        }
        self.bindings = bindings;
        Ok(())
    }

    /// Resolves a key to its variant tag without constructing anything.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownKey`] if the key is not bound.
    pub fn resolve(&self, key: &K) -> Result<usize, DispatchError> {
        let tag = self
            .bindings
            .get(key)
            .copied()
            .ok_or_else(|| DispatchError::UnknownKey(format!("{key:?}")))?;
        trace!("key {:?} resolved to variant `{}`", key, V::variant_name(tag));
        Ok(tag)
    }

    /// Resolves a key and constructs a value of the bound variant from the
    /// supplied arguments.
    ///
    /// Arguments are forwarded positionally, in the order given, to the
    /// variant's constructor under the crate's strict policy (see
    /// [`FromArgs`](crate::FromArgs)). On success the returned value's
    /// [`tag`](VariantSet::tag) equals the tag bound to `key`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownKey`] if the key is not bound
    /// - [`DispatchError::Construction`] if the bound type is not
    ///   constructible from `args`
    pub fn construct(&self, key: &K, args: Args) -> Result<V, DispatchError> {
        let tag = self.resolve(key)?;
        V::construct(tag, args).map_err(DispatchError::Construction)
    }

    /// Whether a key is currently bound.
    pub fn contains_key(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    /// Number of distinct bound keys.
    ///
    /// Less than `V::COUNT` when a registration contained duplicate keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no keys are bound. Only possible for an empty variant set.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bound keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.bindings.keys()
    }
}
