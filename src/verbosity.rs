//! Process-wide diagnostic verbosity, settable from the web layer at any
//! time. A single atomic is all the visibility the host threading model
//! asks for.

use std::sync::atomic::{AtomicI32, Ordering};

static VERBOSITY: AtomicI32 = AtomicI32::new(0);

/// Set the verbosity level. 0 is quiet; anything above enables verbose
/// intent diagnostics.
pub fn set_level(level: i32) {
    VERBOSITY.store(level, Ordering::Relaxed);
    if level > 0 {
        log::debug!("openwith: verbosity set to {level}");
    }
}

pub fn level() -> i32 {
    VERBOSITY.load(Ordering::Relaxed)
}

/// True when verbose diagnostics are enabled.
pub fn verbose() -> bool {
    level() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        assert_eq!(level(), 0);
        assert!(!verbose());
        set_level(2);
        assert_eq!(level(), 2);
        assert!(verbose());
        set_level(0);
        assert!(!verbose());
    }
}
