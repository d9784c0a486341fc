//! MyImpact: culture- and level-aligned prompt assembly for quarterly goal generation.
//!
//! `assembly` is the engine. `goals`, `routes` and `llm_client` are the HTTP
//! collaborator around it; the `myimpact` binary is the CLI collaborator.

pub mod assembly;
pub mod config;
pub mod errors;
pub mod goals;
pub mod llm_client;
pub mod routes;
pub mod state;
