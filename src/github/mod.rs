mod client;

pub use client::{GhesClient, OrgRecord, Pagination};
