//! Parser modules for palette source files.
//!
//! # Usage
//!
//! ```ignore
//! use gpl2clr::parser::parse_gpl;
//!
//! let source = std::fs::read_to_string("warm.gpl")?;
//! let document = parse_gpl(&source)?;
//!
//! for entry in document.iter() {
//!     println!("Found: {}", entry);
//! }
//! ```

pub mod gpl;

pub use gpl::{parse_gpl, read_gpl};
