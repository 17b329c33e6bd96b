// Composition root for the time_entries module.
//
// Responsibilities
// - Load configuration and pick the store implementation.
// - Wire stores, directory and clock into the use case handlers.
// - Expose REST and GraphQL under one router.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod response;
pub mod state;
pub mod wiring;
