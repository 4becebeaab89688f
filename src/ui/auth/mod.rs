//! Login and registration forms.

mod login;
mod registration;

pub use login::{LoginFormIntent, LoginFormReducer, LoginFormState};
pub use registration::{
    RegistrationField, RegistrationFormIntent, RegistrationFormReducer, RegistrationFormState,
};
