//! matgrid-cli: command line driver for the matgrid matrix container.
//!
//! Hosts the demo walkthrough, its JSON configuration, and the small
//! `primes`/`random` commands used by the `matgrid` binary.
pub mod commands;
pub mod config;
pub mod demo;
