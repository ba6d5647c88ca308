//! Core domain types for plover-sig.
//!
//! - `SignatureNode` / `NodeRole` - typed rendered text
//! - `ParsedSignature` - nodes plus cross-reference identifier
//! - `RefContext` - host context passed to builders

mod context;
mod node;

pub use context::RefContext;
pub use node::{NodeRole, ParsedSignature, SignatureNode};
