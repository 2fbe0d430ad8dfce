// ABOUTME: Library side of the taskman terminal client
// ABOUTME: Logging setup, edit helpers and the renderers used by the command handlers

pub mod edit;
pub mod logging;
pub mod render;

#[cfg(test)]
mod tests;
