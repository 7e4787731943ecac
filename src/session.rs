//! Simulated sign-in.
//!
//! There is no authentication: signing in always yields the same placeholder
//! profile, whatever was typed into the login form.

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl UserProfile {
    /// Returns the placeholder profile assigned by every sign-in.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
        }
    }
}

/// Who, if anyone, is signed in.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<UserProfile>,
}

impl Session {
    /// Creates a signed-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { current_user: None }
    }

    /// Signs in with the placeholder profile and returns it.
    pub fn sign_in(&mut self) -> &UserProfile {
        self.current_user.insert(UserProfile::placeholder())
    }

    /// Returns the signed-in profile, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&UserProfile> {
        self.current_user.as_ref()
    }

    /// Returns true once someone has signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Returns the label for the header's account control.
    #[must_use]
    pub const fn account_label(&self) -> &'static str {
        if self.is_signed_in() { "Account" } else { "Login" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_signed_out() {
        let session = Session::new();
        assert!(!session.is_signed_in());
        assert_eq!(session.account_label(), "Login");
    }

    #[test]
    fn sign_in_assigns_placeholder_profile() {
        let mut session = Session::new();
        let profile = session.sign_in().clone();

        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "john@example.com");
        assert_eq!(session.current_user(), Some(&profile));
        assert_eq!(session.account_label(), "Account");
    }

    #[test]
    fn signing_in_twice_keeps_one_profile() {
        let mut session = Session::new();
        session.sign_in();
        session.sign_in();
        assert_eq!(session.current_user(), Some(&UserProfile::placeholder()));
    }
}
