// Composition root for the invoicing service.
//
// Responsibilities
// - Read config from file and environment.
// - Instantiate the hosted adapters, or in-memory ones when no project is configured.
// - Wire adapters into use case handlers and serve them over HTTP.

pub mod http;
pub mod sessions;
pub mod state;
