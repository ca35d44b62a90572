//! Interactive story session over a console port

use serde::Serialize;

use super::tree::{History, Story, Tone};
use crate::{Result, ports::Console, types::Choice};

/// Horizontal rule written after the prologue and after every accepted
/// choice.
const SEPARATOR: &str = "====================\n\n";

/// Record of a finished story session, for reporting and transcript export.
#[derive(Debug, Clone, Serialize)]
pub struct StorySummary {
    pub choices: Vec<Choice>,
    pub segment: String,
    pub tone: Tone,
    pub early: bool,
}

/// One interactive playthrough of a story against a console.
///
/// The session resolves the current history to a node, writes its body,
/// and either finishes (ending node) or enumerates the node's choices and
/// collects one. Collection re-prompts until the input is an integer
/// within the offered range; the accepted choice is appended to the
/// history and the loop resolves again. The only terminal-state check is
/// the resolved node itself, so the early loss ends the session exactly
/// where the tree says it does.
pub struct StorySession<C: Console> {
    console: C,
    story: &'static Story,
    history: History,
}

impl<C: Console> StorySession<C> {
    /// Create a session at the start of a story.
    pub fn new(console: C, story: &'static Story) -> Self {
        StorySession {
            console,
            story,
            history: History::new(),
        }
    }

    /// The choices made so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The console, for inspecting captured output in tests.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Play the story to an ending.
    ///
    /// # Errors
    ///
    /// Returns an error for console failures, or
    /// [`crate::Error::UnrecognizedHistory`] if the tree and the collected
    /// history ever disagree, which would be an authoring defect.
    pub fn run(&mut self) -> Result<StorySummary> {
        self.console.write(self.story.welcome)?;
        self.console.write(SEPARATOR)?;
        self.console.write(self.story.prologue)?;
        self.console.write(SEPARATOR)?;

        loop {
            let node = self.story.tree.resolve(&self.history)?;
            self.console.write(node.body)?;

            if let Some(ending) = node.ending() {
                if ending.early {
                    self.console.write("You have LOST.\n")?;
                }
                return Ok(StorySummary {
                    choices: self.history.choices().to_vec(),
                    segment: node.segment.as_str().to_string(),
                    tone: ending.tone,
                    early: ending.early,
                });
            }

            self.console.write("What do you do?\n")?;
            for (i, arm) in node.arms().iter().enumerate() {
                let line = format!("{}. {}\n", i + 1, arm.label);
                self.console.write(&line)?;
            }

            let choice = self.collect_choice(node.choice_count())?;
            self.history.push(choice);
            self.console.write(SEPARATOR)?;
        }
    }

    /// Prompt until the player supplies a choice the current node offers.
    fn collect_choice(&mut self, options: usize) -> Result<Choice> {
        self.console.write("Enter your choice: ")?;
        loop {
            let line = self.console.read_line()?;
            if let Some(choice) = Self::parse_choice(&line, options) {
                return Ok(choice);
            }
            self.console
                .write("Invalid choice, please enter a valid choice: ")?;
        }
    }

    /// Interpret one input line as an offered choice, if it is one.
    fn parse_choice(line: &str, options: usize) -> Option<Choice> {
        let value: usize = line.trim().parse().ok()?;
        Choice::from_input(value, options).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedConsole;
    use crate::adventure::script::ORK_ASSAULT;

    fn run_story(lines: &[&str]) -> (StorySummary, String) {
        let console = ScriptedConsole::with_lines(lines.iter().copied());
        let mut session = StorySession::new(console, &ORK_ASSAULT);
        let summary = session.run().expect("session should complete");
        let output = session.console().output().to_string();
        (summary, output)
    }

    #[test]
    fn test_intro_precedes_the_first_node() {
        let (_, output) = run_story(&["2", "1"]);
        let welcome_at = output.find("Welcome to my text based adventure game!").unwrap();
        let begins_at = output.find("The Story Begins!").unwrap();
        let first_node_at = output.find("As the Orks charge forward").unwrap();
        assert!(welcome_at < begins_at && begins_at < first_node_at);
        assert!(output.contains("====================\n\n"));
    }

    #[test]
    fn test_choices_are_enumerated_after_the_body() {
        let (_, output) = run_story(&["2", "1"]);
        assert!(output.contains("What do you do?\n"));
        assert!(
            output.contains("1. Order your squad to leave the fortification and charge the Orks head on.\n")
        );
        assert!(output.contains("2. Order the squad to open fire.\n"));
    }

    #[test]
    fn test_early_loss_prints_the_verdict_line() {
        let (summary, output) = run_story(&["2", "1"]);
        assert!(output.contains("You have LOST.\n"));
        assert_eq!(summary.segment, "fall-back");
        assert_eq!(summary.tone, Tone::Defeat);
        assert!(summary.early);
        assert_eq!(summary.choices.len(), 2);
    }

    #[test]
    fn test_full_depth_withdrawal_has_no_verdict_line() {
        let (summary, output) = run_story(&["1", "2", "2"]);
        assert!(!output.contains("You have LOST.\n"));
        assert_eq!(summary.segment, "fall-back");
        assert_eq!(summary.tone, Tone::Withdrawal);
        assert!(!summary.early);
    }

    #[test]
    fn test_invalid_choices_are_reprompted() {
        let (summary, output) = run_story(&["3", "0", "nonsense", "2", "2", "2"]);
        let reprompts = output
            .matches("Invalid choice, please enter a valid choice: ")
            .count();
        assert_eq!(reprompts, 3, "each bad line should re-prompt once");
        assert_eq!(summary.segment, "orks-routed");
        assert_eq!(summary.tone, Tone::Victory);
    }

    #[test]
    fn test_input_ending_mid_story_is_a_console_error() {
        let console = ScriptedConsole::with_lines(["1"]);
        let mut session = StorySession::new(console, &ORK_ASSAULT);
        let result = session.run();
        assert!(matches!(result, Err(crate::Error::ConsoleClosed)));
        assert_eq!(session.history().len(), 1, "accepted choices stay recorded");
    }

    #[test]
    fn test_separator_follows_each_accepted_choice() {
        let (_, output) = run_story(&["1", "1", "2"]);
        // Two after the intro, one after each of the three choices
        assert_eq!(output.matches(SEPARATOR).count(), 5);
    }
}
