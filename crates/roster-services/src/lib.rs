//! Pure services for roster.
//!
//! This crate provides:
//!
//! - **Age calculation**: whole-years age from a birthday and a reference
//!   date via [`age::age_at`], with strict `YYYY-MM-DD` parsing.
//! - **Greeting**: [`greeter::Greeter`].
//! - **Primality**: [`prime::is_prime`] and [`prime::prime_flags`].

pub mod age;
pub mod error;
pub mod greeter;
pub mod prime;

pub use age::{age_at, age_from_birthday, parse_birthday};
pub use error::{Result, ServiceError};
pub use greeter::Greeter;
pub use prime::{is_prime, prime_flags};
