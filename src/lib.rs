//! coursebase - A minimal, self-hostable course catalog REST service

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod media;
pub mod observability;
