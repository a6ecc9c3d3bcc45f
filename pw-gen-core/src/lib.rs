//! Password generation library.
//!
//! This crate provides three interchangeable password generators:
//! - Fixed-length numeric PINs (`PinGenerator`)
//! - Character-set based random strings (`RandomPasswordGenerator`)
//! - Word-based memorable phrases (`MemorablePasswordGenerator`)
//!
//! All generators implement the `PasswordGenerator` trait and draw their
//! randomness from an injected `RandomSource`, so tests can supply a seeded
//! or scripted source.

/// Character sets used by the random password and PIN generators.
pub mod alphabet;

/// Batch generation spread over worker threads.
pub mod batch;

/// Serde-facing configuration and validation.
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// The `PasswordGenerator` trait and its three variants.
pub mod generator;

/// Uniform random selection abstraction.
pub mod random;

/// Word list collaborators feeding the memorable password generator.
pub mod wordlist;

/// File reading helpers.
///
/// Not exposed
pub(crate) mod io;

pub use batch::{generate_batch, generate_batch_with_workers};
pub use config::{GeneratorConfig, MemorableConfig, PinConfig, RandomPasswordConfig, ResolvedConfig};
pub use error::{GeneratorError, Result};
pub use generator::memorable::MemorablePasswordGenerator;
pub use generator::pin::PinGenerator;
pub use generator::random_password::RandomPasswordGenerator;
pub use generator::PasswordGenerator;
pub use random::{RandomSource, RngSource};
pub use wordlist::{WordFile, WordList};
