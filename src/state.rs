use std::fmt;
use rand::Rng;
use tracing::{debug, info, warn};
use crate::composer::{compose_store, NormalizedColor};
use crate::config::MixerConfig;
use crate::constants::*;
use crate::error::InvalidChannelInput;
use crate::focus::FocusController;
use crate::store::ChannelStore;
use crate::text_input::{CommitOutcome, CommitState, TextInput};
use crate::types::{Channel, ChannelValue};

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SliderChanged { channel: Channel, value: f64 },
    TextEdited { channel: Channel, text: String },
    TextSubmitted { channel: Channel, text: String },
    FocusChanged(Option<Channel>),
    TapOutside,
    Accessory(AccessoryButton),
    AlertDismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryButton {
    Previous,
    Next,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationAlert {
    pub channel: Channel,
    pub error: InvalidChannelInput,
}

impl ValidationAlert {
    pub fn title(&self) -> &'static str {
        INVALID_INPUT_TITLE
    }

    pub fn message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MixerSnapshot {
    pub values: [ChannelValue; 3],
    pub texts: [String; 3],
    pub focus: Option<Channel>,
    pub alert: Option<ValidationAlert>,
    pub color: NormalizedColor,
    pub accessory_visible: bool,
    pub can_move_previous: bool,
    pub can_move_next: bool,
}

pub trait MixerObserver {
    fn on_change(&mut self, snapshot: &MixerSnapshot);
}

impl<F: FnMut(&MixerSnapshot)> MixerObserver for F {
    fn on_change(&mut self, snapshot: &MixerSnapshot) {
        self(snapshot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct MixerState {
    config: MixerConfig,
    store: ChannelStore,
    inputs: [TextInput; 3],
    focus: FocusController,
    alert: Option<ValidationAlert>,
    observers: Vec<(SubscriptionId, Box<dyn MixerObserver>)>,
    next_subscription: u64,
}

impl fmt::Debug for MixerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MixerState")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("inputs", &self.inputs)
            .field("focus", &self.focus)
            .field("alert", &self.alert)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl MixerState {
    pub fn new(config: MixerConfig) -> Self {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(config: MixerConfig, rng: &mut R) -> Self {
        let store = config.initial.seed(rng);
        let inputs = Channel::ALL.map(|channel| TextInput::new(store.get(channel)));
        let (r, g, b) = store.rgb();
        debug!(r, g, b, "mixer initialized");

        Self {
            config,
            store,
            inputs,
            focus: FocusController::default(),
            alert: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    pub fn value(&self, channel: Channel) -> ChannelValue {
        self.store.get(channel)
    }

    pub fn text(&self, channel: Channel) -> &str {
        self.inputs[channel.index()].text()
    }

    pub fn commit_state(&self, channel: Channel) -> CommitState {
        self.inputs[channel.index()].state()
    }

    pub fn focus(&self) -> Option<Channel> {
        self.focus.target()
    }

    pub fn alert(&self) -> Option<&ValidationAlert> {
        self.alert.as_ref()
    }

    pub fn color(&self) -> NormalizedColor {
        compose_store(&self.store)
    }

    pub fn snapshot(&self) -> MixerSnapshot {
        let navigation = self.config.focus_navigation;
        MixerSnapshot {
            values: Channel::ALL.map(|c| self.store.get(c)),
            texts: Channel::ALL.map(|c| self.text(c).to_string()),
            focus: self.focus.target(),
            alert: self.alert.clone(),
            color: self.color(),
            accessory_visible: self.config.keyboard_accessory && self.focus.target().is_some(),
            can_move_previous: navigation && self.focus.can_move_previous(),
            can_move_next: navigation && self.focus.can_move_next(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn MixerObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Applies one event. Observers are notified once, and only if the
    /// snapshot changed.
    pub fn handle(&mut self, event: InputEvent) {
        let before = (!self.observers.is_empty()).then(|| self.snapshot());

        self.apply(event);

        if let Some(before) = before {
            let after = self.snapshot();
            if after != before {
                for (_, observer) in &mut self.observers {
                    observer.on_change(&after);
                }
            }
        }
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::SliderChanged { channel, value } => {
                let value = self.store.set_clamped(channel, value);
                self.inputs[channel.index()].sync(value);
                debug!(channel = channel.label(), value = value.get(), "slider changed");
            }
            InputEvent::TextEdited { channel, text } => {
                let input = &mut self.inputs[channel.index()];
                if input.edit(text) {
                    if let Some(value) = input.live_value(&self.config) {
                        self.store.set(channel, value);
                    }
                }
            }
            InputEvent::TextSubmitted { channel, text } => {
                let outcome = self.inputs[channel.index()].submit(text, &self.config);
                self.apply_outcome(channel, outcome);
            }
            InputEvent::FocusChanged(target) => self.move_focus(target),
            InputEvent::TapOutside => self.move_focus(None),
            InputEvent::Accessory(button) => self.press_accessory(button),
            InputEvent::AlertDismissed => {
                if let Some(alert) = self.alert.take() {
                    self.inputs[alert.channel.index()].dismiss();
                }
            }
        }
    }

    fn commit(&mut self, channel: Channel) {
        let outcome = self.inputs[channel.index()].commit(&self.config);
        self.apply_outcome(channel, outcome);
    }

    fn apply_outcome(&mut self, channel: Channel, outcome: CommitOutcome) {
        match outcome {
            CommitOutcome::Unchanged => {}
            CommitOutcome::Accepted(value) => {
                self.store.set(channel, value);
                if let Some(alert) = self.alert.take() {
                    self.inputs[alert.channel.index()].dismiss();
                }
                info!(channel = channel.label(), value = value.get(), "channel input accepted");
            }
            CommitOutcome::Rejected { error, fallback } => {
                self.store.set(channel, fallback);
                warn!(channel = channel.label(), %error, fallback = fallback.get(), "channel input rejected");
                if let Some(previous) = self.alert.replace(ValidationAlert { channel, error }) {
                    if previous.channel != channel {
                        self.inputs[previous.channel.index()].dismiss();
                    }
                }
            }
        }
    }

    /// Focus leaving a channel commits whatever was typed there.
    fn move_focus(&mut self, target: Option<Channel>) {
        let previous = self.focus.target();
        if previous == target {
            return;
        }
        if let Some(previous) = previous {
            self.commit(previous);
        }
        self.focus.focus(target);
        debug!(?previous, ?target, "focus changed");
    }

    fn press_accessory(&mut self, button: AccessoryButton) {
        let mut next = self.focus;
        match button {
            AccessoryButton::Previous if self.config.focus_navigation => next.move_previous(),
            AccessoryButton::Next if self.config.focus_navigation => next.move_next(),
            AccessoryButton::Previous | AccessoryButton::Next => return,
            AccessoryButton::Done => next.clear(),
        }
        self.move_focus(next.target());
    }
}
