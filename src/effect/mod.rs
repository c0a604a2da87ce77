pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod scan;
pub(crate) mod shader_args;
