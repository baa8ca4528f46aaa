use crate::help::{APPLICATION_NAME, VERSION_STRING};

/// Agent string reported to the pool, e.g. "bgminer/0.3.3 (linux)"
pub fn user_agent() -> String {
    format!(
        "{}/{} ({})",
        APPLICATION_NAME,
        VERSION_STRING,
        std::env::consts::OS
    )
}
