//! Leveled assertions. The simple level is always checked. The moderate level guards the more
//! expensive consistency checks and is only compiled in for tests or with the `debug-checks`
//! feature.

pub const SLOTPLAN_ASSERT_SIMPLE: u8 = 1;
pub const SLOTPLAN_ASSERT_MODERATE: u8 = 2;

/// The highest level whose assertions are checked.
pub const SLOTPLAN_ASSERT_LEVEL_DEFINITION: u8 = if cfg!(any(test, feature = "debug-checks")) {
    SLOTPLAN_ASSERT_MODERATE
} else {
    SLOTPLAN_ASSERT_SIMPLE
};

pub const fn level_is_checked(level: u8) -> bool {
    level <= SLOTPLAN_ASSERT_LEVEL_DEFINITION
}

#[macro_export]
#[doc(hidden)]
macro_rules! slotplan_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::level_is_checked($crate::asserts::SLOTPLAN_ASSERT_SIMPLE) {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! slotplan_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::level_is_checked($crate::asserts::SLOTPLAN_ASSERT_MODERATE) {
            assert!($($arg)*);
        }
    };
}
