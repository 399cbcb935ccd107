pub mod args;
pub mod model;
pub mod controller {
    pub mod db_prefill;
    pub mod matches;
}
pub mod view {
    pub mod index;
    pub mod matches;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

// Re-export commonly used items for easier access in tests and other modules
pub use model::{score_match, lifetime_summary};
