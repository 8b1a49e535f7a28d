//! # Dynasty Rules
//!
//! The static side of the dynasty timeline: era records, the theme registry that
//! pairs each era with a particle palette, and the proportional layout that turns
//! years into horizontal pixel offsets.
//!
//! Nothing in this crate animates or holds runtime state. Every layout function is a
//! pure function of its inputs.

pub mod eras;
pub mod error;
pub mod layout;
pub mod themes;

pub use eras::*;
pub use error::*;
pub use layout::*;
pub use themes::*;
