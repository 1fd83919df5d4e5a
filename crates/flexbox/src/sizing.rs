//! Sizing requests passed down an axis and the child negotiation rules.

/// Largest size an item may report; also the default max width/height.
pub const MAX_SIZE: i32 = 0x00FF_FFFF;

/// A request passed down one axis to a container or an item.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SizingConstraint {
    /// Must resolve to exactly this size.
    Exact(i32),
    /// May resolve to anything up to this size.
    AtMost(i32),
    /// No limit along this axis.
    Unconstrained,
}

impl SizingConstraint {
    /// True for [`SizingConstraint::Exact`].
    #[inline]
    pub const fn is_tight(self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// True for [`SizingConstraint::Unconstrained`].
    #[inline]
    pub const fn is_unconstrained(self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    /// The size carried by the request, `0` when unconstrained.
    #[inline]
    pub const fn expected_size(self) -> i32 {
        match self {
            Self::Exact(size) | Self::AtMost(size) => size,
            Self::Unconstrained => 0,
        }
    }

    /// Resolve a content extent against this request.
    ///
    /// Returns the final size and whether the request was too small for the
    /// content.
    pub fn resolve(self, content: i32) -> (i32, bool) {
        match self {
            Self::Exact(size) => (size, size < content),
            Self::AtMost(size) if size < content => (size, true),
            Self::AtMost(_) | Self::Unconstrained => (content, false),
        }
    }
}

/// The size an item asks for along one physical axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ItemSize {
    /// A fixed pixel size.
    Fixed(i32),
    /// Fill whatever the container has left along the axis.
    MatchParent,
    /// Shrink to fit the item's content.
    WrapContent,
}

/// Measured state flags reported by items and the container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MeasuredState {
    /// The width request was smaller than the content wanted.
    pub width_too_small: bool,
    /// The height request was smaller than the content wanted.
    pub height_too_small: bool,
}

impl MeasuredState {
    /// Combine two states, keeping every raised flag.
    #[inline]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            width_too_small: self.width_too_small || other.width_too_small,
            height_too_small: self.height_too_small || other.height_too_small,
        }
    }
}

/// Derive an item's request along one axis from the container's request,
/// the space already occupied along that axis and what the item asks for.
pub fn child_constraint(
    parent: SizingConstraint,
    occupied: i32,
    requested: ItemSize,
) -> SizingConstraint {
    let available = (parent.expected_size() - occupied).max(0);
    match (requested, parent) {
        (ItemSize::Fixed(size), _) => SizingConstraint::Exact(size.max(0)),
        (ItemSize::MatchParent, SizingConstraint::Exact(_)) => SizingConstraint::Exact(available),
        (ItemSize::MatchParent | ItemSize::WrapContent, SizingConstraint::AtMost(_))
        | (ItemSize::WrapContent, SizingConstraint::Exact(_)) => {
            SizingConstraint::AtMost(available)
        }
        (ItemSize::MatchParent | ItemSize::WrapContent, SizingConstraint::Unconstrained) => {
            SizingConstraint::Unconstrained
        }
    }
}

/// Clamp `value` into `[min, max]`, preferring `min` when the bounds cross.
///
/// Unlike `Ord::clamp` this never panics on inverted bounds.
#[inline]
pub fn clamp_between<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the child negotiation table deviates from the expected modes.
    fn child_constraint_table() {
        let exact = SizingConstraint::Exact(300);
        let at_most = SizingConstraint::AtMost(300);
        let open = SizingConstraint::Unconstrained;

        assert_eq!(
            child_constraint(exact, 20, ItemSize::Fixed(50)),
            SizingConstraint::Exact(50)
        );
        assert_eq!(
            child_constraint(open, 20, ItemSize::Fixed(50)),
            SizingConstraint::Exact(50)
        );
        assert_eq!(
            child_constraint(exact, 20, ItemSize::MatchParent),
            SizingConstraint::Exact(280)
        );
        assert_eq!(
            child_constraint(at_most, 20, ItemSize::MatchParent),
            SizingConstraint::AtMost(280)
        );
        assert_eq!(
            child_constraint(exact, 20, ItemSize::WrapContent),
            SizingConstraint::AtMost(280)
        );
        assert_eq!(
            child_constraint(at_most, 20, ItemSize::WrapContent),
            SizingConstraint::AtMost(280)
        );
        assert_eq!(child_constraint(open, 20, ItemSize::MatchParent), open);
        assert_eq!(child_constraint(open, 20, ItemSize::WrapContent), open);
    }

    #[test]
    /// # Panics
    /// Panics if occupied space larger than the request yields a negative size.
    fn child_constraint_never_negative() {
        assert_eq!(
            child_constraint(SizingConstraint::Exact(10), 40, ItemSize::MatchParent),
            SizingConstraint::Exact(0)
        );
    }

    #[test]
    /// # Panics
    /// Panics if resolving content against a request reports the wrong size or state.
    fn resolve_content_extent() {
        assert_eq!(SizingConstraint::Exact(100).resolve(150), (100, true));
        assert_eq!(SizingConstraint::Exact(100).resolve(50), (100, false));
        assert_eq!(SizingConstraint::AtMost(100).resolve(150), (100, true));
        assert_eq!(SizingConstraint::AtMost(100).resolve(50), (50, false));
        assert_eq!(SizingConstraint::Unconstrained.resolve(150), (150, false));
    }

    #[test]
    /// # Panics
    /// Panics if clamping with inverted bounds does not fall back to the minimum.
    fn clamp_between_inverted_bounds() {
        assert_eq!(clamp_between(5, 10, 20), 10);
        assert_eq!(clamp_between(25, 10, 20), 20);
        assert_eq!(clamp_between(15, 10, 20), 15);
        assert_eq!(clamp_between(15, 30, 20), 30);
    }
}
