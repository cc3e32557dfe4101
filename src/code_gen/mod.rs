#[allow(clippy::module_inception)]
pub mod code_gen;
pub mod gen_iface;
pub mod plan;
pub mod writer;
