//! Branching text-adventure engine

pub mod script;
pub mod session;
pub mod tree;

pub use script::ORK_ASSAULT;
pub use session::{StorySession, StorySummary};
pub use tree::{ChoiceArm, Ending, History, NodeKind, Story, StoryNode, StoryTree, Tone};
