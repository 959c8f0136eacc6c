use std::sync::Arc;
use std::thread;
use variant_dispatch::{
    Args, ConstructionError, DispatchError, FromArgs, RegistryError, TypeDispatcher, VariantSet,
};

#[derive(Debug, PartialEq)]
enum Value {
    Letter(char),
    Number(i32),
    Wide(i64),
}

impl VariantSet for Value {
    const COUNT: usize = 3;

    fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
        match tag {
            0 => char::from_args(args).map(Value::Letter),
            1 => i32::from_args(args).map(Value::Number),
            2 => i64::from_args(args).map(Value::Wide),
            _ => unreachable!("tag out of range"),
        }
    }

    fn tag(&self) -> usize {
        match self {
            Value::Letter(_) => 0,
            Value::Number(_) => 1,
            Value::Wide(_) => 2,
        }
    }

    fn variant_name(tag: usize) -> &'static str {
        match tag {
            0 => "Letter",
            1 => "Number",
            2 => "Wide",
            _ => "<unknown>",
        }
    }
}

#[test]
fn every_key_resolves_to_its_registered_variant() {
    let dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3]).unwrap();

    let value = dispatcher.construct(&1, Args::new()).unwrap();
    assert_eq!(value.tag(), 0);
    assert_eq!(value, Value::Letter('\0'));

    let value = dispatcher.construct(&2, Args::new()).unwrap();
    assert_eq!(value.tag(), 1);
    assert_eq!(value, Value::Number(0));

    let value = dispatcher.construct(&3, Args::new()).unwrap();
    assert_eq!(value.tag(), 2);
    assert_eq!(value, Value::Wide(0));
}

#[test]
fn constructed_tag_matches_resolved_tag() {
    let dispatcher = TypeDispatcher::<&str, Value>::new(["c", "i", "l"]).unwrap();

    for key in ["c", "i", "l"] {
        let tag = dispatcher.resolve(&key).unwrap();
        let value = dispatcher.construct(&key, Args::new()).unwrap();
        assert_eq!(value.tag(), tag);
    }
}

#[test]
fn registration_rejects_wrong_arity() {
    let result = TypeDispatcher::<u32, Value>::new([1, 2]);
    assert_eq!(
        result.unwrap_err(),
        RegistryError::Arity {
            expected: 3,
            supplied: 2
        }
    );

    let result = TypeDispatcher::<u32, Value>::new([1, 2, 3, 4]);
    assert_eq!(
        result.unwrap_err(),
        RegistryError::Arity {
            expected: 3,
            supplied: 4
        }
    );
}

#[test]
fn unknown_key_is_a_typed_error() {
    let dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3]).unwrap();

    let result = dispatcher.construct(&99, Args::new());
    assert!(matches!(result, Err(DispatchError::UnknownKey(_))));

    let result = dispatcher.resolve(&99);
    assert_eq!(result.unwrap_err(), DispatchError::UnknownKey("99".into()));
}

#[test]
fn duplicate_key_in_one_registration_last_write_wins() {
    // Key 7 appears for both the first and the third variant.
    let dispatcher = TypeDispatcher::<u32, Value>::new([7, 8, 7]).unwrap();

    assert_eq!(dispatcher.len(), 2);
    assert_eq!(dispatcher.resolve(&7).unwrap(), 2);
    assert_eq!(dispatcher.resolve(&8).unwrap(), 1);

    let value = dispatcher.construct(&7, Args::new()).unwrap();
    assert_eq!(value, Value::Wide(0));
}

#[test]
fn rebinding_replaces_the_previous_binding() {
    let mut dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3]).unwrap();
    assert_eq!(dispatcher.resolve(&3).unwrap(), 2);

    dispatcher.bind([1, 2, 4]).unwrap();

    // Key 1 still resolves to the first variant, not an accumulation of both
    // registrations; key 3 is gone entirely.
    assert_eq!(dispatcher.resolve(&1).unwrap(), 0);
    assert_eq!(dispatcher.resolve(&4).unwrap(), 2);
    assert!(!dispatcher.contains_key(&3));
    assert!(matches!(
        dispatcher.resolve(&3),
        Err(DispatchError::UnknownKey(_))
    ));
}

#[test]
fn failed_rebind_keeps_the_previous_binding() {
    let mut dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3]).unwrap();

    assert!(dispatcher.bind([5, 6]).is_err());

    assert_eq!(dispatcher.resolve(&1).unwrap(), 0);
    assert_eq!(dispatcher.resolve(&3).unwrap(), 2);
    assert!(!dispatcher.contains_key(&5));
}

#[test]
fn repeated_construction_is_independent() {
    let dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3]).unwrap();

    let first = dispatcher.construct(&2, Args::new().with(5i32)).unwrap();
    let second = dispatcher.construct(&2, Args::new().with(5i32)).unwrap();

    assert_eq!(first, Value::Number(5));
    assert_eq!(second, Value::Number(5));

    // Dispatcher state is untouched by construction.
    assert_eq!(dispatcher.len(), 3);
    assert_eq!(dispatcher.resolve(&2).unwrap(), 1);
}

#[test]
fn inspectors_report_bindings() {
    let dispatcher = TypeDispatcher::<String, Value>::new([
        "letter".to_string(),
        "number".to_string(),
        "wide".to_string(),
    ])
    .unwrap();

    assert_eq!(dispatcher.len(), 3);
    assert!(!dispatcher.is_empty());
    assert!(dispatcher.contains_key(&"letter".to_string()));
    assert!(!dispatcher.contains_key(&"missing".to_string()));

    let mut keys: Vec<&String> = dispatcher.keys().collect();
    keys.sort();
    assert_eq!(keys, ["letter", "number", "wide"]);
}

#[test]
fn dispatcher_shared_across_threads() {
    let dispatcher = Arc::new(TypeDispatcher::<u32, Value>::new([1, 2, 3]).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dispatcher = Arc::clone(&dispatcher);
            thread::spawn(move || {
                let value = dispatcher
                    .construct(&2, Args::new().with(i as i32))
                    .unwrap();
                assert_eq!(value, Value::Number(i as i32));
                dispatcher.construct(&99, Args::new()).is_err()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
