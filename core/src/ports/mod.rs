//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces the domain expects from external
//! collaborators. NIO handles need no trait: the adapter never inspects them.

mod wic;

pub use wic::WicModule;
