//! Morse code to English translation backed by a binary code tree.
//!
//! A dot descends left and a dash descends right from the root, so every
//! letter sits at the node its code leads to.
//!
//! ```
//! use rsmorse::domain::Decoder;
//!
//! let decoder = Decoder::new();
//! assert_eq!(decoder.translate("- .... . / . -. -.."), "the end");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
