//! User domain
//!
//! Domain types for the user records served by the API: the record entity,
//! creation-time validation, password masking and the store trait.

mod entity;
mod masking;
mod repository;
mod validation;

pub use entity::{User, UserDraft};
pub use masking::{mask_password, unmask_password, MaskingError};
pub use repository::UserStore;
pub(crate) use repository::{index_not_found, position};
pub use validation::{
    validate_email, validate_name, validate_new_user, validate_password, UserValidationError,
    MIN_PASSWORD_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockUserStore;
