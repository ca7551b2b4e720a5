//! Computer opponents: the [`Agent`] seam, a uniform random baseline, and
//! the scripted win/block/random opponent used by single-player mode.

mod agent;
mod random;
mod scripted;

pub use agent::Agent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
