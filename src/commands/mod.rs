pub mod audit;
pub mod config;
pub(crate) mod context;
pub mod init;
pub mod naming;

pub use audit::run_audit;
pub use config::run_config;
pub use init::{run_init, run_init_impl};
pub use naming::run_naming;
