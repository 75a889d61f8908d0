use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{CatalogRequest, normalize_query};
pub use server::{CatalogEntry, parse_pokemon};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Creature {0} has no category")]
    NoCategory(String),
}
