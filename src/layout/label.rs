/// Which half of the two-phase label swap is running.
#[derive(Clone, Debug, PartialEq)]
pub enum LabelPhase {
    Idle,
    /// The shown text is animating out; `target` replaces it once that finishes.
    Exiting { target: String },
    /// The new text is in place and animating in.
    Entering,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStepKind {
    Exit,
    Enter,
}

/// A phase that has just started. The caller reports its completion back with
/// the same `generation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelStep {
    pub generation: u64,
    pub kind: LabelStepKind,
}

/// HUD label swap: exit the old text, replace it, enter the new one.
///
/// A new target arriving mid-swap restarts from the exit phase; completions of
/// the superseded phase are recognised by their generation and ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelTransition {
    shown: String,
    phase: LabelPhase,
    generation: u64,
}

impl LabelTransition {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            shown: initial.into(),
            phase: LabelPhase::Idle,
            generation: 0,
        }
    }

    pub fn shown(&self) -> &str {
        &self.shown
    }

    #[cfg(test)]
    pub fn phase(&self) -> &LabelPhase {
        &self.phase
    }

    /// Text the label settles on once the running phase completes.
    pub fn settling_on(&self) -> &str {
        match &self.phase {
            LabelPhase::Exiting { target } => target,
            LabelPhase::Idle | LabelPhase::Entering => &self.shown,
        }
    }

    pub fn request(&mut self, label: &str) -> Option<LabelStep> {
        if self.settling_on() == label {
            return None;
        }
        self.phase = LabelPhase::Exiting {
            target: label.to_string(),
        };
        Some(self.start(LabelStepKind::Exit))
    }

    /// Completes the exit phase. Returns the started enter phase and the text
    /// that now has to be displayed.
    pub fn exit_finished(&mut self, generation: u64) -> Option<(LabelStep, String)> {
        if generation != self.generation {
            return None;
        }
        match std::mem::replace(&mut self.phase, LabelPhase::Entering) {
            LabelPhase::Exiting { target } => {
                self.shown = target.clone();
                Some((self.start(LabelStepKind::Enter), target))
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    pub fn enter_finished(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != LabelPhase::Entering {
            return false;
        }
        self.phase = LabelPhase::Idle;
        true
    }

    /// Drops any running phase and shows `text` directly.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.shown = text.into();
        self.phase = LabelPhase::Idle;
        self.generation += 1;
    }

    fn start(&mut self, kind: LabelStepKind) -> LabelStep {
        self.generation += 1;
        LabelStep {
            generation: self.generation,
            kind,
        }
    }
}
