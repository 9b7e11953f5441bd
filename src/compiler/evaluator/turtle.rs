use crate::compiler::{command::Command, evaluator::core::Context};

impl Context {
    /// Emits a move by `distance`.
    pub(crate) fn forward(&mut self, distance: f64) {
        self.commands.push(Command::Move(distance));
    }

    /// Emits a left turn by `angle`.
    pub(crate) fn turn_left(&mut self, angle: f64) {
        self.commands.push(Command::Turn(angle));
    }

    /// Emits a right turn by `angle`.
    ///
    /// The wire format has a single turn command whose positive direction is
    /// left, so a right turn is emitted as a turn by the negated angle.
    pub(crate) fn turn_right(&mut self, angle: f64) {
        self.commands.push(Command::Turn(-angle));
    }

    /// Emits a return to the home position.
    pub(crate) fn go_home(&mut self) {
        self.commands.push(Command::Home);
    }

    /// Emits a pen lift.
    pub(crate) fn pen_up(&mut self) {
        self.commands.push(Command::PenUp);
    }

    /// Emits a pen drop.
    pub(crate) fn pen_down(&mut self) {
        self.commands.push(Command::PenDown);
    }

    /// Emits a save of the current position and heading.
    pub(crate) fn push_state(&mut self) {
        self.commands.push(Command::PushState);
    }

    /// Emits a restore of the last saved position and heading.
    pub(crate) fn pop_state(&mut self) {
        self.commands.push(Command::PopState);
    }
}
