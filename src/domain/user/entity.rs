//! User entity and related types

use serde::{Deserialize, Serialize};

use super::masking::mask_password;

/// User record as held by the store
///
/// `password` carries the masked form once the record has been written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
    password: String,
}

impl User {
    /// Create a new user with the given fields, unmasked
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replace the password with its masked form.
    ///
    /// Not idempotent: masking twice encodes twice. Empty passwords are left
    /// untouched.
    pub fn mask_password(&mut self) {
        if !self.password.is_empty() {
            self.password = mask_password(&self.password);
        }
    }

    /// Consume the user and return it with a masked password
    pub fn masked(mut self) -> Self {
        self.mask_password();
        self
    }
}

/// User fields as supplied for a create or replace, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Convert into a user as-is, without validation or trimming.
    /// Missing fields become empty strings.
    pub fn into_user(self) -> User {
        User::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}
