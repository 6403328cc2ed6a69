use std::borrow::Cow;

use flatprops::{flatten, Describe, FlattenOptions};

#[derive(Describe)]
struct Borrowed<'a> {
    name: &'a str,
    label: Cow<'a, str>,
    parts: &'a [u16],
}

fn main() {
    let parts = [1, 2];
    let borrowed = Borrowed {
        name: "n",
        label: Cow::Borrowed("l"),
        parts: &parts,
    };
    let flat = flatten(&borrowed, &FlattenOptions::default());
    assert_eq!(flat["name"], "n");
    assert_eq!(flat["label"], "l");
    assert_eq!(flat["parts[1]"], "2");
}
