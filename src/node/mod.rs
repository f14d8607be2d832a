// Sat Oct 17 2026 - Alex

pub mod alignment;
pub mod error;
pub mod kind;
pub mod layout;
pub mod registry;
pub mod result;

pub use alignment::Alignment;
pub use error::NodeError;
pub use kind::{ContainerKind, NodeFamily};
pub use layout::{FieldSpec, NodeLayout, PlacedField};
pub use registry::{registry, REGISTRY};
pub use result::{DebugResult, NodeSizeEntry};
