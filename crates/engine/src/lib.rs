// In crates/engine/src/lib.rs

pub mod seed;
pub mod session;
pub mod shared;

pub use session::{BatchOutcome, RejectedDraft, Session};
pub use shared::SharedSession;
