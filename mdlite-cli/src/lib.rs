//! Library half of the mdlite CLI, shared by the binary and its tests.

pub mod transforms;
