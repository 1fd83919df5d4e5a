//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use crate::chapter5::{FlexDirection, FlexWrap};

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is horizontal (row-wise layout)
    pub main_is_horizontal: bool,
    /// True when items advance from the high edge of the main axis towards the low edge
    pub main_reversed: bool,
    /// True when lines stack from the high edge of the cross axis towards the low edge
    pub cross_reversed: bool,
}

/// Resolve main/cross axes and their reversal given direction, wrap and text direction.
///
/// Row variants reverse the main axis under right-to-left text and reverse the
/// cross axis under `WrapReverse`. Column variants keep their main direction
/// and flip the horizontal cross axis for `WrapReverse` in left-to-right and
/// for `Wrap` in right-to-left.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection, wrap: FlexWrap, is_rtl: bool) -> Axes {
    let wrap_reverse = matches!(wrap, FlexWrap::WrapReverse);
    let column_cross_reversed =
        (!is_rtl && wrap_reverse) || (is_rtl && matches!(wrap, FlexWrap::Wrap));
    match direction {
        FlexDirection::Row => Axes {
            main_is_horizontal: true,
            main_reversed: is_rtl,
            cross_reversed: wrap_reverse,
        },
        FlexDirection::RowReverse => Axes {
            main_is_horizontal: true,
            main_reversed: !is_rtl,
            cross_reversed: wrap_reverse,
        },
        FlexDirection::Column => Axes {
            main_is_horizontal: false,
            main_reversed: false,
            cross_reversed: column_cross_reversed,
        },
        FlexDirection::ColumnReverse => Axes {
            main_is_horizontal: false,
            main_reversed: true,
            cross_reversed: column_cross_reversed,
        },
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so a stable sort by this key respects input order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

/// Item indices sorted by `order`, preserving input order for ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_indices_by_order_stable(orders: &[i32]) -> Vec<usize> {
    let mut keys: Vec<(i32, usize)> = orders
        .iter()
        .enumerate()
        .map(|(original_index, &order)| order_key(order, original_index))
        .collect();
    keys.sort_unstable();
    keys.into_iter().map(|(_, index)| index).collect()
}
