use flatprops::{flatten, Describe, FlattenOptions};

mod classes {
    use flatprops::{Classification, Sensitivity};

    pub struct HomeAddress;

    impl Classification for HomeAddress {
        const SENSITIVITY: Sensitivity = Sensitivity::PersonalData;
    }
}

#[derive(Describe)]
#[describe(rename_all = "camelCase")]
struct Customer {
    #[sensitive(classes::HomeAddress)]
    home_address: String,
    #[sensitive(flatprops::PhoneNumber)]
    phone_number: String,
    customer_tier: u8,
}

fn main() {
    let customer = Customer {
        home_address: "1 Main St".to_string(),
        phone_number: "555-0100".to_string(),
        customer_tier: 2,
    };
    let options = FlattenOptions::new().with_redaction(true);
    let flat = flatten(&customer, &options);
    assert_eq!(flat["homeAddress"], "*****");
    assert_eq!(flat["phoneNumber"], "*****");
    assert_eq!(flat["customerTier"], "2");
}
