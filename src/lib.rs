mod construct;
mod convert;
mod error;
mod presence;

use crate::presence::Presence;
use std::fmt::{Debug, Formatter};

pub use crate::construct::Construct;
pub use crate::construct::TryConstruct;

pub use error::{OResult, OptionalError};

// Presence is fixed at construction: no method on a live box changes it.
#[derive(Clone)]
pub struct OptionalBox<T> {
    presence: Presence<T>,
}

impl<T> OptionalBox<T> {
    pub fn absent() -> Self {
        OptionalBox {
            presence: Presence::Absent,
        }
    }

    pub fn of(value: T) -> Self {
        OptionalBox {
            presence: Presence::Present(value),
        }
    }

    pub fn of_emplaced<A>(args: A) -> Self
    where
        T: Construct<A>,
    {
        OptionalBox {
            presence: Presence::Present(T::construct(args)),
        }
    }

    pub fn try_of_emplaced<A>(args: A) -> Result<Self, T::Error>
    where
        T: TryConstruct<A>,
    {
        Ok(OptionalBox {
            presence: Presence::Present(T::try_construct(args)?),
        })
    }

    pub fn is_present(&self) -> bool {
        self.presence.is_present()
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn get(&self) -> OResult<&T> {
        match &self.presence {
            Presence::Present(value) => Ok(value),
            Presence::Absent => Err(OptionalError::AbsentAccess),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match &self.presence {
            Presence::Present(value) => Some(value),
            Presence::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self.presence {
            Presence::Present(value) => Some(value),
            Presence::Absent => None,
        }
    }
}

impl<T: Debug> Debug for OptionalBox<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.presence {
            Presence::Present(value) => f.debug_tuple("Present").field(value).finish(),
            Presence::Absent => f.write_str("Absent"),
        }
    }
}
