use flatprops::Describe;

#[derive(Describe)]
#[allow(dead_code)]
enum Never {}

fn assert_describe<T: Describe>() {}

fn main() {
    assert_describe::<Never>();
}
