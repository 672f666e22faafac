//! Bulls and cows (bulls-cows)
//!
//! Terminal number-guessing game. The player hunts for a secret 4-digit
//! number with distinct digits; each guess is answered with the number of
//! bulls (right digit, right place) and cows (right digit, wrong place).
//!
//! The pure core lives in [`model`]; [`game`] drives sessions over any
//! [`source::LineSource`] and [`std::io::Write`] pair.

pub mod clock;
pub mod config;
pub mod game;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;

#[cfg(test)]
mod test_harness;
