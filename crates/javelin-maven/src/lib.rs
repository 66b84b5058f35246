//! Maven repository protocol for publishing: repository layout and
//! authentication, checksum sidecars, POM generation and validation,
//! maven-metadata.xml maintenance, and the publisher chain.

pub mod auth;
pub mod checksum;
pub mod metadata;
pub mod pom;
pub mod publication;
pub mod publish;
pub mod repository;
pub mod transport;
