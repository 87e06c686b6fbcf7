//! Visibility Registry
//!
//! Holds the access level that new declarations capture. Changing it never
//! affects accessors synthesized by earlier declarations.

use std::sync::atomic::{AtomicU8, Ordering};

use lazydep_domain::constants::DEFAULT_VISIBILITY;
use lazydep_domain::{Result, Visibility};
use tracing::info;

static CURRENT: AtomicU8 = AtomicU8::new(encode(DEFAULT_VISIBILITY));

const fn encode(level: Visibility) -> u8 {
    match level {
        Visibility::Private => 0,
        Visibility::Public => 1,
        Visibility::Protected => 2,
    }
}

fn decode(raw: u8) -> Visibility {
    match raw {
        1 => Visibility::Public,
        2 => Visibility::Protected,
        _ => Visibility::Private,
    }
}

/// Current default visibility for new accessors
pub fn visibility() -> Visibility {
    decode(CURRENT.load(Ordering::Acquire))
}

/// Store `level` as the default visibility and return it
pub fn set_visibility(level: Visibility) -> Visibility {
    CURRENT.store(encode(level), Ordering::Release);
    info!(visibility = %level, "Default dependency visibility changed");
    level
}

/// Parse and store a textual level
///
/// Anything other than `private`, `public` or `protected` fails with
/// `InvalidConfiguration` before the stored setting is touched.
pub fn try_set_visibility(level: &str) -> Result<Visibility> {
    let parsed: Visibility = level.parse()?;
    Ok(set_visibility(parsed))
}

/// Restore the default visibility
pub fn reset_visibility() {
    CURRENT.store(encode(DEFAULT_VISIBILITY), Ordering::Release);
}
