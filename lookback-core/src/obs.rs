//! Observation transforms.
mod assembler;
mod frame_stack;
mod transform;
pub use assembler::{Assembler, ConcatAssembler, DiffAssembler, StackAssembler};
pub use frame_stack::{FrameStackPipeline, FrameStackPipelineConfig};
pub use transform::{ObsTransformer, TransformPipeline};
