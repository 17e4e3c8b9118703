//! Internal logging macros.
//!
//! Forward to `defmt` and/or `log` depending on enabled features, and compile
//! away entirely when neither is enabled.
#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::trace!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::debug!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::info!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::info!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::warn!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}
