// Conversational layer: per-session step tracking on top of the matching engine.
// Implements: yes/no classification, the turn state machine, the session store.

pub mod handlers;
pub mod prompts;
pub mod session;
pub mod store;

pub use store::SessionStore;
