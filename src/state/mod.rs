//! Shared client-side state.
//!
//! The session store is the only mutable entity in the app; it lives in an
//! `RwSignal` context provided by `App` and is mutated exclusively through
//! its setter methods.

pub mod session;
pub mod storage;
