// Capability dispatch module
//
// Given extension data whose concrete type is only known at runtime, this
// module decides which capability handlers apply to it:
// - CapabilityTable, the fixed capability → handler registrations
// - HandlerResolver, the per-class resolution cache shared by all calls

pub mod resolver;
pub mod table;

pub use resolver::{ComposedHandler, HandlerResolver, Resolution};
pub use table::{CapabilityLookup, CapabilityTable, Direction, Handler, ReadFn, WriteFn};
