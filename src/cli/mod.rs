//! CLI module for the Users API
//!
//! Subcommands:
//! - `serve`: run the HTTP server
//! - `openapi`: print the OpenAPI document

pub mod openapi;
pub mod serve;

use clap::{Parser, Subcommand};

/// Users API - in-memory user records behind a shared API key
#[derive(Parser)]
#[command(name = "users-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Print the OpenAPI document as JSON
    Openapi,
}
