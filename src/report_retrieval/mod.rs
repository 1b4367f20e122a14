/// Report retrieval domain - project identity, report kinds and matching rules
///
/// Pure types and policies with no I/O; the application layer drives them
/// through the outbound ports.
pub mod domain;
pub mod policies;
