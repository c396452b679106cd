pub mod setup;
pub mod web_server;

pub use setup::{init_tracing, setup_from_cli};
pub use web_server::{build_surface, run_web_server};
