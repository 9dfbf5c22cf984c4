//! Typed identifier newtypes backed by integers.
//!
//! Identifiers are assigned by storage (bands) or by the client inside a
//! band payload (tasks). They are never generated in the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Server-assigned identifier of a [`Band`](crate::band::Band).
    BandId
);

define_id!(
    /// Identifier of a [`Task`](crate::task::Task), unique within its band.
    TaskId
);
