use shared::domain::User;

use crate::route::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(User),
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(User),
    SignedOut,
}

impl AuthState {
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => AuthState::Authenticated(user.clone()),
            None => AuthState::Unauthenticated,
        }
    }

    /// Sign-in replaces any current user; nothing but an explicit sign-out
    /// leaves `Authenticated`.
    pub fn apply(self, event: AuthEvent) -> Self {
        match event {
            AuthEvent::SignedIn(user) => AuthState::Authenticated(user),
            AuthEvent::SignedOut => AuthState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Unauthenticated => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(Location),
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    login: Location,
}

impl RouteGuard {
    pub fn new(login: Location) -> Self {
        Self { login }
    }

    pub fn login_location(&self) -> &Location {
        &self.login
    }

    pub fn check(&self, auth: &AuthState, requested: &Location) -> GuardDecision {
        match auth {
            AuthState::Unauthenticated if requested != &self.login => {
                GuardDecision::Redirect(self.login.clone())
            }
            _ => GuardDecision::Proceed,
        }
    }

    /// Location that ends up displayed for `requested`.
    pub fn resolve(&self, auth: &AuthState, requested: Location) -> Location {
        match self.check(auth, &requested) {
            GuardDecision::Proceed => requested,
            GuardDecision::Redirect(target) => target,
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(Location::login())
    }
}
