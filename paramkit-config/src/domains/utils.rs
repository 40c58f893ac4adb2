//! Shared serde default helpers

pub fn default_true() -> bool {
    true
}

pub fn default_false() -> bool {
    false
}
