//! Nwdiag Core Types and Definitions
//!
//! This crate provides the foundational types used to turn network diagram
//! elements into renderable blocks. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Text blocks, symbol kinds and symbol boxes ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
