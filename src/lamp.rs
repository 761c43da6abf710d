//! The three phases of the traffic light.

use core::fmt;

/// One indicator lamp of the traffic light, and the phase it stands for.
///
/// Each lamp has exactly one control button requesting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lamp {
    Stop,
    Slow,
    Go,
}

impl Lamp {
    /// Every lamp, top to bottom.
    pub const ALL: [Lamp; 3] = [Lamp::Stop, Lamp::Slow, Lamp::Go];

    /// Short lowercase name, as typed at the console.
    pub fn name(self) -> &'static str {
        match self {
            Lamp::Stop => "stop",
            Lamp::Slow => "slow",
            Lamp::Go => "go",
        }
    }

    /// Look a lamp up by its short name, ignoring case.
    pub fn from_name(name: &str) -> Option<Lamp> {
        Lamp::ALL
            .into_iter()
            .find(|lamp| lamp.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Lamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
