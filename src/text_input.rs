use tracing::trace;
use crate::config::{InputMode, InvalidInputPolicy, MixerConfig};
use crate::error::InvalidChannelInput;
use crate::parse_input::*;
use crate::types::ChannelValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitState {
    #[default]
    Idle,
    Editing,
    Validating,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Nothing was being edited.
    Unchanged,
    Accepted(ChannelValue),
    Rejected {
        error: InvalidChannelInput,
        fallback: ChannelValue,
    },
}

/// Editable text buffer of one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    text: String,
    state: CommitState,
    /// Value the buffer last mirrored before typing began.
    settled: ChannelValue,
}

impl TextInput {
    pub fn new(value: ChannelValue) -> Self {
        Self {
            text: format_channel(value),
            state: CommitState::Idle,
            settled: value,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> CommitState {
        self.state
    }

    /// Pushes a value that changed outside the text field into the buffer,
    /// discarding any pending edit.
    pub fn sync(&mut self, value: ChannelValue) {
        self.text = format_channel(value);
        self.settled = value;
        if self.state == CommitState::Editing {
            self.transition(CommitState::Idle);
        }
    }

    /// Returns `false` while a rejection is still on screen.
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        if self.state == CommitState::Rejected {
            return false;
        }
        self.text = text.into();
        if self.state != CommitState::Editing {
            self.transition(CommitState::Editing);
        }
        true
    }

    /// In live clamping mode, the value the current buffer implies.
    pub fn live_value(&self, config: &MixerConfig) -> Option<ChannelValue> {
        match config.input_mode {
            InputMode::LiveClamp if self.state == CommitState::Editing => {
                parse_number(&self.text, config.trim_whitespace)
                    .ok()
                    .map(ChannelValue::clamped)
            }
            _ => None,
        }
    }

    /// Explicit submit of `text`. Resubmitting the displayed text of a whole
    /// value is a no-op; anything else is validated.
    pub fn submit(&mut self, text: impl Into<String>, config: &MixerConfig) -> CommitOutcome {
        let text = text.into();
        let mirrors_value = self.state == CommitState::Idle
            && text == self.text
            && self.settled.get().fract() == 0.0;
        if !mirrors_value {
            self.edit(text);
        }
        self.commit(config)
    }

    /// Finalizes the buffer. Under `RestoreLastValid` a rejection falls back
    /// to the value from before typing began.
    pub fn commit(&mut self, config: &MixerConfig) -> CommitOutcome {
        if self.state != CommitState::Editing {
            return CommitOutcome::Unchanged;
        }
        self.transition(CommitState::Validating);

        let parsed = match config.input_mode {
            InputMode::ValidateOnCommit => parse_channel_input(&self.text, config.trim_whitespace),
            InputMode::LiveClamp => {
                parse_number(&self.text, config.trim_whitespace).map(ChannelValue::clamped)
            }
        };

        match parsed {
            Ok(value) => {
                self.transition(CommitState::Accepted);
                self.text = format_channel(value);
                self.settled = value;
                self.transition(CommitState::Idle);
                CommitOutcome::Accepted(value)
            }
            Err(error) => {
                let fallback = match config.invalid_input {
                    InvalidInputPolicy::ResetToZero => ChannelValue::ZERO,
                    InvalidInputPolicy::RestoreLastValid => self.settled,
                };
                self.text = format_channel(fallback);
                self.settled = fallback;
                self.transition(CommitState::Rejected);
                CommitOutcome::Rejected { error, fallback }
            }
        }
    }

    /// Alert acknowledged.
    pub fn dismiss(&mut self) {
        if self.state == CommitState::Rejected {
            self.transition(CommitState::Idle);
        }
    }

    fn transition(&mut self, next: CommitState) {
        trace!(from = ?self.state, to = ?next, "text input");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value(v: f64) -> ChannelValue {
        ChannelValue::clamped(v)
    }

    #[test]
    fn starts_idle_with_formatted_text() {
        let input = TextInput::new(value(150.0));
        assert_eq!(input.text(), "150");
        assert_eq!(input.state(), CommitState::Idle);
    }

    #[test]
    fn typing_enters_editing_without_committing() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(150.0));
        assert!(input.edit("15"));
        assert_eq!(input.state(), CommitState::Editing);
        assert_eq!(input.live_value(&config), None);
    }

    #[test]
    fn valid_commit_is_accepted_unrounded() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(10.0));
        input.edit("12.5");
        assert_eq!(input.commit(&config), CommitOutcome::Accepted(value(12.5)));
        assert_eq!(input.state(), CommitState::Idle);
        assert_eq!(input.text(), "13");
    }

    #[test]
    fn out_of_range_resets_to_zero() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(150.0));
        input.edit("999");
        assert_eq!(
            input.commit(&config),
            CommitOutcome::Rejected {
                error: InvalidChannelInput::OutOfRange(999.0),
                fallback: ChannelValue::ZERO,
            }
        );
        assert_eq!(input.text(), "0");
        assert_eq!(input.state(), CommitState::Rejected);
    }

    #[test]
    fn restore_policy_keeps_previous_value() {
        let config = MixerConfig {
            invalid_input: InvalidInputPolicy::RestoreLastValid,
            ..MixerConfig::default()
        };
        let mut input = TextInput::new(value(150.0));
        input.edit("oops");
        let outcome = input.commit(&config);
        assert!(matches!(outcome, CommitOutcome::Rejected { fallback, .. } if fallback == value(150.0)));
        assert_eq!(input.text(), "150");
    }

    #[test]
    fn rejected_input_ignores_edits_until_dismissed() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(1.0));
        input.edit("");
        input.commit(&config);
        assert!(!input.edit("5"));
        assert_eq!(input.commit(&config), CommitOutcome::Unchanged);

        input.dismiss();
        assert_eq!(input.state(), CommitState::Idle);
        assert!(input.edit("5"));
    }

    #[test]
    fn commit_without_edit_is_unchanged() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(77.0));
        assert_eq!(input.commit(&config), CommitOutcome::Unchanged);
        assert_eq!(input.text(), "77");
    }

    #[test]
    fn resubmitting_displayed_text_of_fractional_value_commits_it() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(12.6));
        assert_eq!(input.submit("13", &config), CommitOutcome::Accepted(value(13.0)));
        assert_eq!(input.submit("13", &config), CommitOutcome::Unchanged);
    }

    #[test]
    fn resubmitting_displayed_text_of_whole_value_is_unchanged() {
        let config = MixerConfig::default();
        let mut input = TextInput::new(value(77.0));
        assert_eq!(input.submit("77", &config), CommitOutcome::Unchanged);
        assert_eq!(input.submit("78", &config), CommitOutcome::Accepted(value(78.0)));
    }

    #[test]
    fn sync_discards_pending_edit() {
        let mut input = TextInput::new(value(1.0));
        input.edit("4");
        input.sync(value(87.0));
        assert_eq!(input.text(), "87");
        assert_eq!(input.state(), CommitState::Idle);
    }

    #[test]
    fn live_clamp_tracks_keystrokes_and_clamps() {
        let config = MixerConfig {
            input_mode: InputMode::LiveClamp,
            ..MixerConfig::default()
        };
        let mut input = TextInput::new(value(0.0));
        input.edit("300");
        assert_eq!(input.live_value(&config), Some(value(255.0)));
        input.edit("30x");
        assert_eq!(input.live_value(&config), None);

        input.edit("300");
        assert_eq!(input.commit(&config), CommitOutcome::Accepted(value(255.0)));
        assert_eq!(input.text(), "255");
    }

    #[test]
    fn live_clamp_still_rejects_non_numbers() {
        let config = MixerConfig {
            input_mode: InputMode::LiveClamp,
            ..MixerConfig::default()
        };
        let mut input = TextInput::new(value(9.0));
        input.edit("nine");
        assert!(matches!(input.commit(&config), CommitOutcome::Rejected { .. }));
    }

    #[test]
    fn live_clamp_restore_uses_value_from_before_typing() {
        let config = MixerConfig {
            input_mode: InputMode::LiveClamp,
            invalid_input: InvalidInputPolicy::RestoreLastValid,
            ..MixerConfig::default()
        };
        let mut input = TextInput::new(value(40.0));
        input.edit("3");
        assert_eq!(input.live_value(&config), Some(value(3.0)));
        input.edit("3x");
        assert_eq!(
            input.commit(&config),
            CommitOutcome::Rejected {
                error: InvalidChannelInput::NotANumber("3x".to_string()),
                fallback: value(40.0),
            }
        );
        assert_eq!(input.text(), "40");
    }
}
