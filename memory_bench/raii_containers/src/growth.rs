//! Capacity planning for [`DynamicArray`](crate::DynamicArray).
//!
//! Kept apart from the storage code so the policy can be checked on its own.

/// Capacity to grow to once `current` slots are all occupied.
///
/// Starts at one slot and doubles from there: `max(2 * current, 1)`.
/// Returns `None` when doubling overflows `usize`.
///
/// ```
/// use raii_containers::growth::next_capacity;
///
/// assert_eq!(next_capacity(0), Some(1));
/// assert_eq!(next_capacity(1), Some(2));
/// assert_eq!(next_capacity(2), Some(4));
/// assert_eq!(next_capacity(usize::MAX), None);
/// ```
#[inline]
pub const fn next_capacity(current: usize) -> Option<usize> {
    match current.checked_mul(2) {
        Some(0) => Some(1),
        Some(doubled) => Some(doubled),
        None => None,
    }
}

/// Capacity reached after `pushes` appends starting from an empty array.
///
/// Zero for zero pushes, otherwise the smallest power of two that holds
/// `pushes` elements. Returns `None` if that power of two overflows.
pub const fn capacity_after(pushes: usize) -> Option<usize> {
    if pushes == 0 {
        return Some(0);
    }
    pushes.checked_next_power_of_two()
}
