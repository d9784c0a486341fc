// Goals API: the HTTP collaborator around the assembly engine.
// Validates requests, runs the engine off the async runtime, and optionally
// hands the assembled prompt to a goal generator.

pub mod generator;
pub mod handlers;
