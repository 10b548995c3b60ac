// Deterministic financial projection. No model calls.

pub mod handlers;
pub mod projection;
