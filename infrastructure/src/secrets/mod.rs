//! Secret store adapters

mod op_cli;

pub use op_cli::OpSecretStore;
