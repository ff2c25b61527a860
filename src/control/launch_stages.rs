use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Stage {
    #[default]
    PreLaunch,
    Stage1,
    Orbit,
    Failed,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::PreLaunch => "Pre-Launch",
            Stage::Stage1 => "Stage 1",
            Stage::Orbit => "Orbit",
            Stage::Failed => "Failed",
        }
    }

    /// Orbit and Failed end the ascent.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Orbit | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
