//! Request lifecycle shared by stores that front remote calls.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Where the most recent operation on a store stands.
///
/// The error message lives inside `Failed`, so a store can never report an
/// error while loading or after succeeding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

impl RequestStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Lowercase tag (`idle`, `loading`, `succeeded`, `failed`) for CSS
    /// modifiers and logs.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
