//! Structure Builders
//!
//! One module per member category. Each pairs an `extract` reading the oxc
//! node with a `render` writing the options-API fragment.

pub mod component;
pub mod computed;
pub mod data;
pub mod emit;
pub mod hook;
pub mod method;
pub mod mixin;
pub mod prop;
pub mod refs;
pub mod watch;

pub use component::Component;
pub use computed::Computed;
pub use data::DataField;
pub use emit::{Emit, EmitEvent};
pub use hook::Hook;
pub use method::{Method, Parameter};
pub use mixin::Mixin;
pub use prop::Prop;
pub use refs::Ref;
pub use watch::Watch;
