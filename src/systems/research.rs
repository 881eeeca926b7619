//! Research: one slot per metropolis infrastructure. A slot picks a
//! variant up front, is researched once banked experience covers twice its
//! cost, and from then on reserves its cost from the experience multiplier.

/// Number of research slots.
pub const RESEARCH_SLOTS: usize = 5;

/// Experience cost per slot.
pub const RESEARCH_COSTS: [f64; RESEARCH_SLOTS] = [5e3, 2e4, 1e5, 5e5, 2e6];

/// Marker reported for a researched slot.
pub const RESEARCHED_MARKER: i64 = -1;

/// Variant a slot is configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Slower price growth.
    CheaperGrowth = 0,
    /// Larger multiplier per level.
    Stronger = 1,
    /// Lower entry price.
    CheaperEntry = 2,
}

impl Variant {
    /// 0, 1 and 2 name a variant; anything else means "not set".
    pub fn from_choice(value: i64) -> Option<Self> {
        match value {
            0 => Some(Variant::CheaperGrowth),
            1 => Some(Variant::Stronger),
            2 => Some(Variant::CheaperEntry),
            _ => None,
        }
    }

    pub fn choice(self) -> i64 {
        self as i64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Research {
    choices: [Option<Variant>; RESEARCH_SLOTS],
    researched: [bool; RESEARCH_SLOTS],
    costs: [f64; RESEARCH_SLOTS],
}

impl Default for Research {
    fn default() -> Self {
        Self::new([None; RESEARCH_SLOTS])
    }
}

impl Research {
    pub fn new(choices: [Option<Variant>; RESEARCH_SLOTS]) -> Self {
        Self { choices, researched: [false; RESEARCH_SLOTS], costs: RESEARCH_COSTS }
    }

    /// Builds from raw choice values; missing trailing slots are "not set".
    pub fn from_choices(values: &[i64]) -> Self {
        let mut choices = [None; RESEARCH_SLOTS];
        for (slot, v) in values.iter().take(RESEARCH_SLOTS).enumerate() {
            choices[slot] = Variant::from_choice(*v);
        }
        Self::new(choices)
    }

    pub fn with_costs(mut self, costs: [f64; RESEARCH_SLOTS]) -> Self {
        self.costs = costs;
        self
    }

    pub fn cost(&self, slot: usize) -> f64 {
        self.costs[slot]
    }

    pub fn choice(&self, slot: usize) -> Option<Variant> {
        self.choices[slot]
    }

    pub fn is_researched(&self, slot: usize) -> bool {
        self.researched[slot]
    }

    /// Variant in effect for `slot`: the configured one once researched.
    pub fn active(&self, slot: usize) -> Option<Variant> {
        if self.researched[slot] { self.choices[slot] } else { None }
    }

    pub fn researched_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..RESEARCH_SLOTS).filter(|&s| self.researched[s])
    }

    pub fn researched_count(&self) -> usize {
        self.researched.iter().filter(|&&r| r).count()
    }

    /// Per-slot values as the reset log prints them: the choice while
    /// pending (`None` when not set), [`RESEARCHED_MARKER`] once researched.
    pub fn markers(&self) -> [Option<i64>; RESEARCH_SLOTS] {
        std::array::from_fn(|s| {
            if self.researched[s] {
                Some(RESEARCHED_MARKER)
            } else {
                self.choices[s].map(Variant::choice)
            }
        })
    }

    /// Researches every pending slot with `experience >= 2 * cost` and
    /// returns the experience newly reserved by them.
    pub fn settle(&mut self, experience: f64) -> f64 {
        let mut reserved = 0.0;
        for slot in 0..RESEARCH_SLOTS {
            if !self.researched[slot] && experience >= 2.0 * self.costs[slot] {
                self.researched[slot] = true;
                reserved += self.costs[slot];
                log::info!(
                    "research slot {slot} done (variant {:?}, cost {})",
                    self.choices[slot],
                    self.costs[slot]
                );
            }
        }
        reserved
    }
}
