//! API endpoint implementations.

mod contents;
mod kernels;
mod kernelspecs;
mod server;
mod sessions;
mod terminals;

pub use contents::{ContentQuery, ContentsApi};
pub use kernels::KernelsApi;
pub use kernelspecs::KernelSpecsApi;
pub use server::ServerApi;
pub use sessions::SessionsApi;
pub use terminals::TerminalsApi;
