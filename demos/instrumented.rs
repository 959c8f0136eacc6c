use variant_dispatch::{
    Args, ConstructionError, DispatchError, FromArgs, TypeDispatcher, VariantSet,
};

// A payload that announces how it came to exist, to show the dispatcher
// constructs exactly once per call and never copies behind the caller's back.
#[derive(Debug)]
struct Noisy {
    label: &'static str,
}

impl Noisy {
    fn premade() -> Self {
        println!("Noisy: made by the caller");
        Noisy { label: "premade" }
    }
}

impl Default for Noisy {
    fn default() -> Self {
        println!("Noisy: default");
        Noisy { label: "default" }
    }
}

impl Clone for Noisy {
    fn clone(&self) -> Self {
        println!("Noisy: clone");
        Noisy { label: self.label }
    }
}

impl FromArgs for Noisy {
    fn from_args(args: Args) -> Result<Self, ConstructionError> {
        match args.len() {
            0 => Ok(Noisy::default()),
            1 => {
                let mut reader = args.expecting::<Noisy>();
                let noisy = reader.take::<Noisy>()?;
                reader.finish()?;
                Ok(noisy)
            }
            _ => Err(ConstructionError::arity::<Noisy>(&args)),
        }
    }
}

#[derive(Debug)]
enum Payload {
    Number(i32),
    Noisy(Noisy),
}

impl VariantSet for Payload {
    const COUNT: usize = 2;

    fn construct(tag: usize, args: Args) -> Result<Self, ConstructionError> {
        match tag {
            0 => i32::from_args(args).map(Payload::Number),
            1 => Noisy::from_args(args).map(Payload::Noisy),
            _ => unreachable!("tag out of range"),
        }
    }

    fn tag(&self) -> usize {
        match self {
            Payload::Number(_) => 0,
            Payload::Noisy(_) => 1,
        }
    }

    fn variant_name(tag: usize) -> &'static str {
        match tag {
            0 => "Number",
            1 => "Noisy",
            _ => "<unknown>",
        }
    }
}

fn main() -> Result<(), DispatchError> {
    let dispatcher = TypeDispatcher::<u32, Payload>::new([1, 2]).expect("one key per variant");

    println!("-- default construction --");
    let value = dispatcher.construct(&2, Args::new())?;
    println!("got {:?}", value);

    println!("-- move construction --");
    let value = dispatcher.construct(&2, Args::new().with(Noisy::premade()))?;
    println!("got {:?} (no clone printed above)", value);

    Ok(())
}
