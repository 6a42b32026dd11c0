// Resume content engine.
// Implements: role classification, content pool registry, deterministic
// seeded selection, and resume assembly. Pure and synchronous — the only
// shared data is the read-only pool registry.

pub mod assembler;
pub mod handlers;
pub mod pools;
pub mod role;
pub mod selector;
