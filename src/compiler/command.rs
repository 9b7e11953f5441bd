use std::fmt;

/// A single plotter command produced by executing a turtle program.
///
/// Commands print in the plotter wire format, one ASCII line each:
/// `M <float>` (move), `R <float>` (turn, positive turns left), `H` (home),
/// `U` (pen up), `D` (pen down), `[` (push state) and `]` (pop state).
///
/// ## Example
/// ```
/// use turtlec::compiler::command::Command;
///
/// assert_eq!(Command::Move(10.0).to_string(), "M 10");
/// assert_eq!(Command::Turn(-90.0).to_string(), "R -90");
/// assert_eq!(Command::PushState.to_string(), "[");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Advance the turtle by a distance.
    Move(f64),
    /// Rotate the turtle by an angle; positive angles turn left.
    Turn(f64),
    /// Return to the origin and home orientation.
    Home,
    /// Lift the pen.
    PenUp,
    /// Lower the pen.
    PenDown,
    /// Save the current position and heading.
    PushState,
    /// Restore the last saved position and heading.
    PopState,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(distance) => write!(f, "M {distance}"),
            Self::Turn(angle) => write!(f, "R {angle}"),
            Self::Home => write!(f, "H"),
            Self::PenUp => write!(f, "U"),
            Self::PenDown => write!(f, "D"),
            Self::PushState => write!(f, "["),
            Self::PopState => write!(f, "]"),
        }
    }
}
