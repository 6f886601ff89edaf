//! The solving and case-recognition engine behind a CFOP trainer: cube
//! move algebra, notation normalization, a bounded white-cross solver, and
//! OLL/PLL/F2L case matching. Rendering, animation and input capture are
//! left to the host application; this crate only consumes read-only case
//! tables and produces move sequences and match results.

#![deny(missing_docs)]

pub mod cases;
pub mod coord;
pub mod cube333;
pub mod error;
pub mod moves;
