use variant_dispatch::{
    Args, ConstructionError, DispatchError, FromArgs, TypeDispatcher, VariantSet,
};

// A closed set of value types, chosen by a runtime key.
#[derive(Debug)]
enum Value {
    Letter(char),
    Number(i32),
    Text(String),
}

impl VariantSet for Value {
    const COUNT: usize = 3;

    fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
        match tag {
            0 => char::from_args(args).map(Value::Letter),
            1 => i32::from_args(args).map(Value::Number),
            2 => String::from_args(args).map(Value::Text),
            _ => unreachable!("tag out of range"),
        }
    }

    fn tag(&self) -> usize {
        match self {
            Value::Letter(_) => 0,
            Value::Number(_) => 1,
            Value::Text(_) => 2,
        }
    }

    fn variant_name(tag: usize) -> &'static str {
        match tag {
            0 => "Letter",
            1 => "Number",
            2 => "Text",
            _ => "<unknown>",
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Letter(c) => format!("a letter: {:?}", c),
        Value::Number(n) => format!("a number: {}", n),
        Value::Text(s) => format!("some text: {:?}", s),
    }
}

fn main() -> Result<(), DispatchError> {
    let dispatcher = TypeDispatcher::<u32, Value>::new([1, 2, 3]).expect("one key per variant");

    // Each key constructs its bound type; arguments are forwarded as-is.
    let letter = dispatcher.construct(&1, Args::new().with('q'))?;
    println!("key 1 gave us {}", describe(&letter));

    let number = dispatcher.construct(&2, Args::new().with(42i32))?;
    println!("key 2 gave us {}", describe(&number));

    // No arguments means the type's default value.
    let text = dispatcher.construct(&3, Args::new())?;
    println!("key 3 gave us {}", describe(&text));

    // Misuse comes back as a value, not a crash.
    match dispatcher.construct(&9, Args::new()) {
        Ok(value) => println!("unexpected: {}", describe(&value)),
        Err(e) => println!("key 9 failed: {}", e),
    }

    match dispatcher.construct(&2, Args::new().with('a')) {
        Ok(value) => println!("unexpected: {}", describe(&value)),
        Err(e) => println!("key 2 with a char failed: {}", e),
    }

    Ok(())
}
