pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod range;
pub mod transfer;
