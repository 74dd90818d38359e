//! Strongly typed identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys without
//! ceremony.  They are opaque tokens: unlike a `Vec` index they say nothing
//! about where a robot sits in the roster.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The id that follows `self` in allocation order.
            ///
            /// Saturates at `MAX` rather than wrapping back onto live ids.
            #[inline]
            pub fn next(self) -> Self {
                $name(self.0.saturating_add(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of a robot.  Unique within a world and never reused.
    pub struct RobotId(u32);
}
