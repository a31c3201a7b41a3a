//! Domain Layer
//!
//! Pure tree logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records, nodes, taxonomies, menu entries
//! - `value_objects/` - Status, node type, visibility, sort options
//! - `services/` - Node adapter, tree index, row decoration
//! - `policies/` - Sanitization, escaping, nesting strategies
//! - `ports/` - Interface definitions for the host platform
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the host store directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All host access goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
