use crate::types::Channel;

/// Which channel text field owns keyboard focus, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusController {
    target: Option<Channel>,
}

impl FocusController {
    pub fn target(&self) -> Option<Channel> {
        self.target
    }

    pub fn focus(&mut self, target: Option<Channel>) {
        self.target = target;
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    pub fn move_previous(&mut self) {
        self.target = self.target.map(Channel::previous);
    }

    pub fn move_next(&mut self) {
        self.target = self.target.map(Channel::next);
    }

    pub fn can_move_previous(&self) -> bool {
        self.target.is_some_and(|c| !c.is_first())
    }

    pub fn can_move_next(&self) -> bool {
        self.target.is_some_and(|c| !c.is_last())
    }
}
