//! Registration form domain: draft state, validation predicates, phone
//! formatting, and the wire payload built at submission time.

pub mod draft;
pub mod form_spec;
pub mod phone;
pub mod request;
pub mod validation;

pub use draft::{RegistrationDraft, SignupField, PHONE_NUMBER_MAX_LEN};
pub use form_spec::{signup_field_specs, FieldSpec};
pub use phone::format_phone_number;
pub use request::RegistrationRequest;
pub use validation::{
    is_valid_password_complexity, is_valid_password_length, passwords_match, ValidationState,
};
