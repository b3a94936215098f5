use shared::domain::PatientId;
use thiserror::Error;

/// Open/closed state of a dropdown-style widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    Open,
    #[default]
    Closed,
}

impl Disclosure {
    pub fn toggle(&mut self) -> Disclosure {
        *self = match self {
            Disclosure::Open => Disclosure::Closed,
            Disclosure::Closed => Disclosure::Open,
        };
        *self
    }

    pub fn open(&mut self) {
        *self = Disclosure::Open;
    }

    pub fn close(&mut self) {
        *self = Disclosure::Closed;
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{widget} is closed; open it before selecting an entry")]
    Closed { widget: &'static str },
    #[error("{widget} is hidden on the current location")]
    Hidden { widget: &'static str },
    #[error("patient {0} is not in the selectable roster")]
    NotOnRoster(PatientId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut state = Disclosure::default();
        assert_eq!(state.toggle(), Disclosure::Open);
        assert_eq!(state.toggle(), Disclosure::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = Disclosure::Open;
        state.close();
        state.close();
        assert_eq!(state, Disclosure::Closed);
    }
}
