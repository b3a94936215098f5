use crate::notify::Toast;
use crate::route::Location;

/// Side effect requested by a widget or shell operation, applied by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Toast),
    Navigate(Location),
}

impl Effect {
    pub fn navigation_target(&self) -> Option<&Location> {
        match self {
            Effect::Navigate(location) => Some(location),
            Effect::Notify(_) => None,
        }
    }
}
