//! Compile tests for `#[derive(Describe)]` shapes that are easy to get wrong
//! in generated code: lifetimes, generics, empty enums and classification
//! paths. Shapes the derive rejects live under `compile_fail/`.

#[test]
fn ui_pass_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*.rs");
}

#[test]
fn ui_compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
