//! Domain layer: code tree and translation logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod code;
pub mod decoder;
pub mod error;
pub mod render;
pub mod table;
pub mod tree;

pub use code::{CodePath, Signal};
pub use decoder::{Decoder, LETTER_DELIMITER, WORD_DELIMITER};
pub use error::{DomainError, DomainResult};
pub use render::ToTermTree;
pub use table::{STANDARD_FINGERPRINT, STANDARD_TABLE};
pub use tree::{CodeTree, InOrder, TreeNode};
