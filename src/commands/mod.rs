mod check;

pub use check::{load_config, resolve_repo_root, run_check, run_check_impl};
