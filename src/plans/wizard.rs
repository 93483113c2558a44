use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComfortLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ComfortLevel {
    pub const ALL: [ComfortLevel; 3] = [
        ComfortLevel::Beginner,
        ComfortLevel::Intermediate,
        ComfortLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComfortLevel::Beginner => "beginner",
            ComfortLevel::Intermediate => "intermediate",
            ComfortLevel::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComfortLevel::Beginner => "Just getting started - I'm new to swimming",
            ComfortLevel::Intermediate => "Building endurance - I can swim but want to improve",
            ComfortLevel::Advanced => "Refining technique - I'm experienced and want to perfect my skills",
        }
    }
}

impl FromStr for ComfortLevel {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ComfortLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| UnknownOption(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    Basics,
    Fitness,
    Competition,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Basics, Goal::Fitness, Goal::Competition];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Basics => "basics",
            Goal::Fitness => "fitness",
            Goal::Competition => "competition",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::Basics => "Learning the basics - I want to build confidence",
            Goal::Fitness => "Improving fitness - I want to swim for health and exercise",
            Goal::Competition => "Preparing for competition - I want to race and win",
        }
    }
}

impl FromStr for Goal {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == value)
            .ok_or_else(|| UnknownOption(value.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown questionnaire option: {:?}", self.0)
    }
}

/// One selection made on the questionnaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    ComfortLevel(ComfortLevel),
    Goal(Goal),
}

impl Answer {
    /// Builds an answer from a radio input's `name` and `value` attributes.
    pub fn parse(field: &str, value: &str) -> Result<Self, UnknownOption> {
        match field {
            "comfortLevel" => value.parse().map(Answer::ComfortLevel),
            "goal" => value.parse().map(Answer::Goal),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    pub comfort_level: Option<ComfortLevel>,
    pub goal: Option<Goal>,
}

impl Answers {
    pub fn is_complete(&self) -> bool {
        self.comfort_level.is_some() && self.goal.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Questionnaire,
    Recommendation,
}

/// State of the plans page: which step is showing and what has been
/// answered so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    pub step: Step,
    pub answers: Answers,
}

impl Wizard {
    pub fn set_answer(&mut self, answer: Answer) {
        match answer {
            Answer::ComfortLevel(level) => self.answers.comfort_level = Some(level),
            Answer::Goal(goal) => self.answers.goal = Some(goal),
        }
    }

    /// String-keyed form of [`Wizard::set_answer`]. Unknown fields or values
    /// leave the state untouched.
    pub fn set_answer_str(&mut self, field: &str, value: &str) {
        match Answer::parse(field, value) {
            Ok(answer) => self.set_answer(answer),
            Err(e) => log::warn!("ignoring answer: {}", e),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Questionnaire && self.answers.is_complete()
    }

    /// Moves to the recommendation step. Returns `true` only when the step
    /// actually changed, so callers know when to run transition side effects.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            log::debug!("submit ignored: step={:?} answers={:?}", self.step, self.answers);
            return false;
        }
        log::debug!("questionnaire submitted: {:?}", self.answers);
        self.step = Step::Recommendation;
        true
    }

    pub fn go_back(&mut self) {
        self.step = Step::Questionnaire;
    }

    /// Applies one page interaction without touching the DOM.
    pub fn apply(self, action: Action<'_>) -> Transition {
        let mut next = self;
        let scroll_to_top = match action {
            Action::Answer { field, value } => {
                next.set_answer_str(field, value);
                false
            },
            Action::Submit => next.submit(),
            Action::GoBack => {
                next.go_back();
                false
            },
        };
        Transition {
            next,
            step_changed: next.step != self.step,
            scroll_to_top,
        }
    }
}

/// Something the user did on the plans page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Answer { field: &'a str, value: &'a str },
    Submit,
    GoBack,
}

/// Outcome of [`Wizard::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: Wizard,
    /// The step view is swapped: the old one unmounts, dropping its
    /// animation, and the new one mounts and plays its entrance.
    pub step_changed: bool,
    pub scroll_to_top: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_sequences_missing_a_field() -> Vec<Vec<Answer>> {
        let mut sequences = vec![vec![]];
        for level in ComfortLevel::ALL {
            sequences.push(vec![Answer::ComfortLevel(level)]);
            sequences.push(vec![Answer::ComfortLevel(ComfortLevel::Advanced), Answer::ComfortLevel(level)]);
        }
        for goal in Goal::ALL {
            sequences.push(vec![Answer::Goal(goal)]);
            sequences.push(vec![Answer::Goal(Goal::Basics), Answer::Goal(goal)]);
        }
        sequences
    }

    #[test]
    fn fresh_state_is_an_empty_questionnaire() {
        let wizard = Wizard::default();
        assert_eq!(wizard.step, Step::Questionnaire);
        assert_eq!(wizard.answers, Answers { comfort_level: None, goal: None });
        assert!(!wizard.can_submit());
    }

    #[test]
    fn incomplete_answers_never_submit() {
        for sequence in answer_sequences_missing_a_field() {
            let mut wizard = Wizard::default();
            for answer in &sequence {
                wizard.set_answer(*answer);
            }
            assert!(!wizard.submit(), "submitted with {:?}", sequence);
            assert_eq!(wizard.step, Step::Questionnaire);
        }
    }

    #[test]
    fn any_complete_pair_submits_exactly_once() {
        for level in ComfortLevel::ALL {
            for goal in Goal::ALL {
                let mut wizard = Wizard::default();
                wizard.set_answer(Answer::Goal(goal));
                wizard.set_answer(Answer::ComfortLevel(level));
                assert_eq!(wizard.step, Step::Questionnaire);

                assert!(wizard.submit());
                assert_eq!(wizard.step, Step::Recommendation);

                let before = wizard;
                assert!(!wizard.submit());
                assert_eq!(wizard, before);
            }
        }
    }

    #[test]
    fn go_back_keeps_answers() {
        let mut wizard = Wizard::default();
        wizard.go_back();
        assert_eq!(wizard, Wizard::default());

        wizard.set_answer_str("comfortLevel", "beginner");
        wizard.set_answer_str("goal", "fitness");
        assert!(wizard.submit());

        wizard.go_back();
        assert_eq!(wizard.step, Step::Questionnaire);
        assert_eq!(wizard.answers.comfort_level, Some(ComfortLevel::Beginner));
        assert_eq!(wizard.answers.goal, Some(Goal::Fitness));
        assert!(wizard.can_submit());
    }

    #[test]
    fn goal_missing_blocks_submit() {
        let mut wizard = Wizard::default();
        wizard.set_answer_str("comfortLevel", "beginner");
        assert!(!wizard.submit());
        assert_eq!(wizard.step, Step::Questionnaire);

        wizard.set_answer_str("goal", "fitness");
        assert!(wizard.submit());
        assert_eq!(wizard.step, Step::Recommendation);
    }

    #[test]
    fn later_answer_replaces_earlier_one() {
        let mut wizard = Wizard::default();
        wizard.set_answer(Answer::ComfortLevel(ComfortLevel::Beginner));
        wizard.set_answer(Answer::ComfortLevel(ComfortLevel::Advanced));
        assert_eq!(wizard.answers.comfort_level, Some(ComfortLevel::Advanced));
        assert_eq!(wizard.answers.goal, None);
    }

    #[test]
    fn answering_keeps_the_questionnaire_mounted() {
        let mut wizard = Wizard::default();
        for (field, value) in [("comfortLevel", "beginner"), ("comfortLevel", "advanced"), ("goal", "basics")] {
            let transition = wizard.apply(Action::Answer { field, value });
            assert!(!transition.step_changed, "{}={} swapped the step view", field, value);
            assert!(!transition.scroll_to_top);
            assert_eq!(transition.next.step, Step::Questionnaire);
            wizard = transition.next;
        }
        assert!(wizard.answers.is_complete());
    }

    #[test]
    fn submit_scrolls_only_when_the_step_changes() {
        let wizard = Wizard::default();
        let blocked = wizard.apply(Action::Submit);
        assert_eq!(blocked, Transition { next: wizard, step_changed: false, scroll_to_top: false });

        let wizard = wizard
            .apply(Action::Answer { field: "comfortLevel", value: "intermediate" })
            .next
            .apply(Action::Answer { field: "goal", value: "competition" })
            .next;
        let submitted = wizard.apply(Action::Submit);
        assert!(submitted.step_changed);
        assert!(submitted.scroll_to_top);
        assert_eq!(submitted.next.step, Step::Recommendation);

        let again = submitted.next.apply(Action::Submit);
        assert!(!again.step_changed);
        assert!(!again.scroll_to_top);
        assert_eq!(again.next, submitted.next);
    }

    #[test]
    fn going_back_swaps_the_view_without_scrolling() {
        let on_questionnaire = Wizard::default().apply(Action::GoBack);
        assert!(!on_questionnaire.step_changed);
        assert_eq!(on_questionnaire.next, Wizard::default());

        let shown = Wizard {
            step: Step::Recommendation,
            answers: Answers { comfort_level: Some(ComfortLevel::Beginner), goal: Some(Goal::Fitness) },
        };
        let back = shown.apply(Action::GoBack);
        assert!(back.step_changed);
        assert!(!back.scroll_to_top);
        assert_eq!(back.next.answers, shown.answers);
    }

    #[test]
    fn unknown_fields_and_values_are_ignored() {
        let mut wizard = Wizard::default();
        wizard.set_answer_str("comfortLevel", "olympian");
        wizard.set_answer_str("budget", "fitness");
        assert_eq!(wizard, Wizard::default());

        assert_eq!(
            Answer::parse("goal", "sprint"),
            Err(UnknownOption("sprint".to_string()))
        );
        assert_eq!(Answer::parse("goal", "competition"), Ok(Answer::Goal(Goal::Competition)));
    }
}
