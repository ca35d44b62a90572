//! Immutable decision-tree structures and the history resolver
//!
//! The story is authored as static data: every branch, ending, and pruned
//! path is visible in the tree itself rather than buried in control flow.
//! The resolver is a pure walk from the root along the recorded choices,
//! so resolving the same history twice always lands on the same node.

use std::fmt;

use serde::Serialize;

use crate::{identifiers::SegmentId, types::Choice};

/// How an ending leaves the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    Victory,
    Defeat,
    /// The squad retreats; the story ends without a verdict either way.
    Withdrawal,
}

/// A terminal leaf of the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ending {
    pub tone: Tone,
    /// True for the one designated loss that cuts the story short before
    /// full depth; the session prints an explicit verdict line for it.
    pub early: bool,
}

/// One selectable branch out of a node.
#[derive(Debug)]
pub struct ChoiceArm {
    /// Label shown in the enumerated choice list, without its number.
    pub label: &'static str,
    pub node: &'static StoryNode,
}

/// What a node does once its body has been shown.
#[derive(Debug)]
pub enum NodeKind {
    Branch(&'static [ChoiceArm]),
    Ending(Ending),
}

/// A narrative segment plus its place in the tree.
#[derive(Debug)]
pub struct StoryNode {
    pub segment: SegmentId,
    /// Narrative body, written to the console verbatim.
    pub body: &'static str,
    pub kind: NodeKind,
}

impl StoryNode {
    /// Number of choices this node offers (0 for endings).
    pub fn choice_count(&self) -> usize {
        match &self.kind {
            NodeKind::Branch(arms) => arms.len(),
            NodeKind::Ending(_) => 0,
        }
    }

    /// The selectable arms, empty for endings.
    pub fn arms(&self) -> &'static [ChoiceArm] {
        match &self.kind {
            NodeKind::Branch(arms) => arms,
            NodeKind::Ending(_) => &[],
        }
    }

    /// The ending carried by this node, if it is terminal.
    pub fn ending(&self) -> Option<Ending> {
        match &self.kind {
            NodeKind::Branch(_) => None,
            NodeKind::Ending(ending) => Some(*ending),
        }
    }

    pub fn is_ending(&self) -> bool {
        matches!(self.kind, NodeKind::Ending(_))
    }
}

/// Append-only record of the choices made so far.
///
/// The history is the whole session state: entries are pushed after each
/// validated choice and never mutated, and the resolver takes the history
/// as its only key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History(Vec<Choice>);

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one validated choice.
    pub fn push(&mut self, choice: Choice) {
        self.0.push(choice);
    }

    /// The recorded choices in order.
    pub fn choices(&self) -> &[Choice] {
        &self.0
    }

    /// Number of choices made so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Choice>> for History {
    fn from(choices: Vec<Choice>) -> Self {
        History(choices)
    }
}

impl fmt::Display for History {
    /// Comma-separated choice values, e.g. `2, 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, choice) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{choice}")?;
        }
        Ok(())
    }
}

/// A complete story: presentation text plus the decision tree.
#[derive(Debug)]
pub struct Story {
    /// Greeting block written once at session start.
    pub welcome: &'static str,
    /// Scene-setting block written between the welcome and the first node.
    pub prologue: &'static str,
    pub tree: StoryTree,
}

/// The decision tree, keyed by history prefixes.
#[derive(Debug)]
pub struct StoryTree {
    root: &'static StoryNode,
}

impl StoryTree {
    /// Create a tree with the given root node.
    pub const fn new(root: &'static StoryNode) -> Self {
        StoryTree { root }
    }

    /// The node for the empty history.
    pub fn root(&self) -> &'static StoryNode {
        self.root
    }

    /// Resolve a history prefix to its story node.
    ///
    /// This is a pure read: it walks from the root along each recorded
    /// choice and never advances any state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnrecognizedHistory`] if the history leads
    /// off the tree, either by selecting an arm a node does not offer or by
    /// continuing past an ending. During play the collected choice is
    /// bounded by the current node's arm count, so this error always means
    /// an authoring or logic defect, not bad user input.
    pub fn resolve(&self, history: &History) -> Result<&'static StoryNode, crate::Error> {
        let mut node = self.root;
        for &choice in history.choices() {
            let arms = match &node.kind {
                NodeKind::Branch(arms) => arms,
                NodeKind::Ending(_) => return Err(Self::unrecognized(history)),
            };
            node = match arms.get(choice.index()) {
                Some(arm) => arm.node,
                None => return Err(Self::unrecognized(history)),
            };
        }
        Ok(node)
    }

    /// Whether a history has reached a terminal node, by content rather
    /// than by length alone: the designated early loss is terminal below
    /// full depth.
    ///
    /// # Errors
    ///
    /// Same as [`StoryTree::resolve`].
    pub fn is_terminal(&self, history: &History) -> Result<bool, crate::Error> {
        Ok(self.resolve(history)?.is_ending())
    }

    fn unrecognized(history: &History) -> crate::Error {
        crate::Error::UnrecognizedHistory {
            history: history.to_string(),
        }
    }
}
