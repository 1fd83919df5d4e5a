//! Flex Containers: container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
//!
//! Each enum converts from the host's raw integer constant via `TryFrom<i32>`
//! and back via `raw()`. Unknown constants are rejected, never defaulted.

mod properties;

pub use properties::{ContainerProperties, Paddings};

use crate::error::FlexError;

/// Declare a property enum with its raw host constants.
macro_rules! raw_property {
    (
        $(#[$meta:meta])*
        $name:ident, $property:literal {
            $($(#[$variant_meta:meta])* $variant:ident = $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// The host's raw constant for this value.
            #[inline]
            pub const fn raw(self) -> i32 {
                match self {
                    $(Self::$variant => $raw),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = FlexError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($raw => Ok(Self::$variant),)+
                    _ => Err(FlexError::InvalidValue {
                        property: $property,
                        value,
                    }),
                }
            }
        }
    };
}

raw_property! {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
    FlexDirection, "flex-direction" {
        /// Main axis runs in the inline direction.
        Row = 0,
        /// Like `Row`, with start and end swapped.
        RowReverse = 1,
        /// Main axis runs in the block direction.
        Column = 2,
        /// Like `Column`, with start and end swapped.
        ColumnReverse = 3,
    }
}

raw_property! {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
    FlexWrap, "flex-wrap" {
        /// Single line; items never wrap.
        NoWrap = 0,
        /// Items wrap onto new lines stacked cross-start to cross-end.
        Wrap = 1,
        /// Items wrap onto new lines stacked cross-end to cross-start.
        WrapReverse = 2,
    }
}

raw_property! {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
    JustifyContent, "justify-content" {
        FlexStart = 0,
        FlexEnd = 1,
        Center = 2,
        SpaceBetween = 3,
        SpaceAround = 4,
        SpaceEvenly = 5,
    }
}

raw_property! {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
    AlignItems, "align-items" {
        FlexStart = 0,
        FlexEnd = 1,
        Center = 2,
        Baseline = 3,
        Stretch = 4,
    }
}

raw_property! {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
    AlignContent, "align-content" {
        FlexStart = 0,
        FlexEnd = 1,
        Center = 2,
        SpaceBetween = 3,
        SpaceAround = 4,
        Stretch = 5,
    }
}

impl FlexDirection {
    /// True when the main axis is horizontal (`Row` and `RowReverse`).
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }
}
