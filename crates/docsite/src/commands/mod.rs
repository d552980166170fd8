//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod pipeline;
mod site;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use pipeline::PipelineArgs;
