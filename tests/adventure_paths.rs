//! Path coverage for the ork-assault story
//! Every input path is driven end to end through a scripted session

use parlor::{
    adapters::ScriptedConsole,
    adventure::{ORK_ASSAULT, History, StorySession, StorySummary, Tone},
    types::Choice,
};

/// One full playthrough: feeds `inputs` line by line and returns the
/// summary together with everything the session wrote.
fn play(inputs: &[&str]) -> (StorySummary, String) {
    let console = ScriptedConsole::with_lines(inputs.iter().copied());
    let mut session = StorySession::new(console, &ORK_ASSAULT);
    let summary = session.run().expect("scripted story should complete");
    let output = session.console().output().to_string();
    (summary, output)
}

fn history(values: &[usize]) -> History {
    History::from(
        values
            .iter()
            .map(|&v| Choice::from_input(v, 2).unwrap())
            .collect::<Vec<_>>(),
    )
}

mod complete_paths {
    use super::*;

    #[test]
    fn test_every_input_path_reaches_its_ending() {
        // The two [2, 1, _] scripts collapse to the early loss, so the
        // recorded history is shorter than the script there.
        let cases: [(&[&str], &[usize], &str, Tone, bool); 8] = [
            (&["1", "1", "1"], &[1, 1, 1], "choppa-overrun", Tone::Defeat, false),
            (&["1", "1", "2"], &[1, 1, 2], "flamer-rescue", Tone::Victory, false),
            (&["1", "2", "1"], &[1, 2, 1], "warboss-felled", Tone::Victory, false),
            (&["1", "2", "2"], &[1, 2, 2], "fall-back", Tone::Withdrawal, false),
            (&["2", "1"], &[2, 1], "fall-back", Tone::Defeat, true),
            (&["2", "2", "1"], &[2, 2, 1], "tiberius-unheard", Tone::Defeat, false),
            (&["2", "2", "2"], &[2, 2, 2], "orks-routed", Tone::Victory, false),
            (&["2", "1", "2"], &[2, 1], "fall-back", Tone::Defeat, true),
        ];

        for (inputs, choices, segment, tone, early) in cases {
            let (summary, _) = play(inputs);
            assert_eq!(summary.segment, segment, "wrong segment for {inputs:?}");
            assert_eq!(summary.tone, tone, "wrong tone for {inputs:?}");
            assert_eq!(summary.early, early, "wrong early flag for {inputs:?}");

            let made: Vec<usize> = summary.choices.iter().map(|c| c.display_value()).collect();
            assert_eq!(made, choices, "wrong recorded history for {inputs:?}");
        }
    }

    #[test]
    fn test_early_loss_stops_reading_input() {
        let console = ScriptedConsole::with_lines(["2", "1", "2"]);
        let mut session = StorySession::new(console, &ORK_ASSAULT);
        let summary = session.run().expect("scripted story should complete");

        assert!(summary.early);
        assert_eq!(
            session.console().remaining_input(),
            1,
            "the session must not prompt past the early loss"
        );
    }
}

mod verdicts {
    use super::*;

    #[test]
    fn test_early_loss_announces_defeat() {
        let (_, output) = play(&["2", "1"]);
        assert!(output.contains("You have LOST."));
    }

    #[test]
    fn test_late_fall_back_carries_no_verdict() {
        let (summary, output) = play(&["1", "2", "2"]);
        assert_eq!(summary.tone, Tone::Withdrawal);
        assert!(
            !output.contains("You have LOST."),
            "only the early loss is called out explicitly"
        );
    }

    #[test]
    fn test_deep_defeats_carry_no_verdict() {
        for inputs in [&["1", "1", "1"][..], &["2", "2", "1"][..]] {
            let (summary, output) = play(inputs);
            assert_eq!(summary.tone, Tone::Defeat);
            assert!(!output.contains("You have LOST."), "no verdict for {inputs:?}");
        }
    }
}

mod prompts {
    use super::*;

    #[test]
    fn test_intro_precedes_the_first_branch() {
        let (_, output) = play(&["1", "1", "1"]);
        let welcome = output.find("Welcome to my text based adventure game!").unwrap();
        let prologue = output.find("The Story Begins!").unwrap();
        let first_body = output.find("As the Orks charge forward").unwrap();
        assert!(welcome < prologue && prologue < first_body);
    }

    #[test]
    fn test_choices_enumerated_one_based() {
        let (_, output) = play(&["1", "1", "1"]);
        assert!(output.contains("What do you do?\n1. "));
        assert!(output.contains("\n2. "));
    }

    #[test]
    fn test_separator_follows_each_accepted_choice() {
        let (_, output) = play(&["2", "2", "2"]);
        // after the welcome, after the prologue, after three choices
        assert_eq!(output.matches("====================").count(), 5);
    }

    #[test]
    fn test_invalid_choices_reprompt_without_advancing() {
        let (summary, output) = play(&["3", "0", "blorp", "1", "1", "1"]);
        assert_eq!(
            output.matches("Invalid choice, please enter a valid choice:").count(),
            3
        );
        assert_eq!(summary.choices.len(), 3);
        assert_eq!(summary.segment, "choppa-overrun");
    }
}

mod invariant_violations {
    use super::*;

    #[test]
    fn test_history_past_an_ending_is_rejected() {
        let err = ORK_ASSAULT
            .tree
            .resolve(&history(&[1, 1, 1, 1]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "no story node matches choice history [1, 1, 1, 1]"
        );
    }

    #[test]
    fn test_history_with_unoffered_choice_is_rejected() {
        let bad = History::from(vec![
            Choice::from_input(1, 3).unwrap(),
            Choice::from_input(3, 3).unwrap(),
        ]);
        let err = ORK_ASSAULT.tree.resolve(&bad).unwrap_err();
        assert_eq!(err.to_string(), "no story node matches choice history [1, 3]");
    }
}
