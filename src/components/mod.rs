mod component;
mod component_macros;
pub mod component_kind;

pub use component::*;
pub use component_kind::ComponentKind;
pub use strata_ecs_derive::Component;
