pub mod emitter_desc;

pub use emitter_desc::RayEmitterDesc;
