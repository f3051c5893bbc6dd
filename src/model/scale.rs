#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    Direct,
    Rebased,
}

impl ScaleMode {
    pub fn name(&self) -> &'static str {
        match self {
            ScaleMode::Direct => "direct",
            ScaleMode::Rebased => "rebased",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaleDef {
    pub response_min: u8,
    pub response_max: u8,
    pub neutral: u8,
    pub display_min: f64,
    pub display_max: f64,
    pub mode: ScaleMode,
}

impl ScaleDef {
    /// The scale the original formula runs on: totals divide by the
    /// theoretical maximum, so the achievable floor is 2.0, not 1.0.
    pub fn direct_v1() -> Self {
        Self {
            response_min: 1,
            response_max: 5,
            neutral: 3,
            display_min: 1.0,
            display_max: 10.0,
            mode: ScaleMode::Direct,
        }
    }

    /// Opt-in alternative that maps the achievable total range onto the
    /// full 1.0-10.0 display range.
    pub fn rebased_v1() -> Self {
        let mut base = Self::direct_v1();
        base.mode = ScaleMode::Rebased;
        base
    }

    /// Inverts a raw answer on the response scale (1 <-> 5, 2 <-> 4, 3 <-> 3).
    pub fn invert(&self, raw: u8) -> u8 {
        self.response_min + self.response_max - raw
    }

    pub fn min_total(&self, n_questions: usize) -> u32 {
        self.response_min as u32 * n_questions as u32
    }

    pub fn max_total(&self, n_questions: usize) -> u32 {
        self.response_max as u32 * n_questions as u32
    }
}
