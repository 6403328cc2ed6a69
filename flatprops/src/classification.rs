//! Marker types for "is this field sensitive, and how?"
//!
//! Classifications are zero-sized. `#[sensitive(Email)]` on a field resolves
//! `<Email as Classification>::SENSITIVITY` at compile time and stores the
//! result in the field's [`FieldDescriptor`](crate::FieldDescriptor). The
//! flattener never sees the marker type itself.

/// Sensitivity tag carried by every field descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sensitivity {
    /// The field can be emitted as-is.
    #[default]
    None,
    /// The field identifies a person (names, emails, dates of birth, ...).
    PersonalData,
    /// The field carries secrets or otherwise sensitive information.
    SensitiveInfo,
}

impl Sensitivity {
    /// Returns `true` for every tag other than [`Sensitivity::None`].
    pub fn is_sensitive(self) -> bool {
        !matches!(self, Sensitivity::None)
    }
}

/// Marker trait for classification categories.
///
/// Implement this for zero-sized marker types (unit structs):
///
/// ```rust
/// use flatprops::{Classification, Sensitivity};
///
/// #[derive(Clone, Copy)]
/// struct HomeAddress;
///
/// impl Classification for HomeAddress {
///     const SENSITIVITY: Sensitivity = Sensitivity::PersonalData;
/// }
/// ```
pub trait Classification {
    /// The tag written into descriptors of fields using this classification.
    const SENSITIVITY: Sensitivity;
}

macro_rules! classification {
    ($(#[$meta:meta])* $name:ident => $sensitivity:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name;

        impl Classification for $name {
            const SENSITIVITY: Sensitivity = Sensitivity::$sensitivity;
        }
    };
}

classification!(
    /// Generic personally identifying data.
    PersonalData => PersonalData
);
classification!(
    /// Generic sensitive information.
    SensitiveInfo => SensitiveInfo
);
classification!(
    /// Classification marker for account identifiers.
    AccountId => SensitiveInfo
);
classification!(
    /// Classification marker for authentication tokens and API keys.
    ApiToken => SensitiveInfo
);
classification!(
    /// Classification marker for credit card numbers or PANs.
    CreditCard => SensitiveInfo
);
classification!(
    /// Classification marker for dates of birth.
    DateOfBirth => PersonalData
);
classification!(
    /// Classification marker for email addresses.
    Email => PersonalData
);
classification!(
    /// Classification marker for IP addresses.
    IpAddress => PersonalData
);
classification!(
    /// Classification marker for government-issued identifiers.
    NationalId => PersonalData
);
classification!(
    /// Classification marker for phone numbers.
    PhoneNumber => PersonalData
);
classification!(
    /// Classification marker for personally identifiable information.
    Pii => PersonalData
);
classification!(
    /// Classification marker for secrets such as passwords or private keys.
    Secret => SensitiveInfo
);
classification!(
    /// Classification marker for session identifiers.
    SessionId => SensitiveInfo
);
