use std::{collections::BTreeMap, marker::PhantomData};

use flatprops::{flatten, Describe, FlattenOptions};

struct Opaque;

#[derive(Describe)]
struct Keyed<K, V, M>
where
    K: std::fmt::Display + Ord,
{
    entries: BTreeMap<K, V>,
    #[describe(skip)]
    _marker: PhantomData<M>,
}

#[derive(Describe)]
enum Either<L, R> {
    Left(L),
    Right { value: R },
}

fn main() {
    let mut entries = BTreeMap::new();
    entries.insert(1_u8, "one");
    let keyed: Keyed<u8, &str, Opaque> = Keyed {
        entries,
        _marker: PhantomData,
    };
    let flat = flatten(&keyed, &FlattenOptions::default());
    assert_eq!(flat["entries:1"], "one");

    let either: Either<u8, String> = Either::Right {
        value: "r".to_string(),
    };
    let flat = flatten(&either, &FlattenOptions::default());
    assert_eq!(flat["value"], "r");
    let _ = Either::<u8, String>::Left(1);
}
