/// Knobs for [`PlacementSearch`](crate::PlacementSearch). None of them change the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Explore orderings on the rayon pool (needs the `rayon` feature)
    pub parallel: bool,
    /// Skip orderings whose shape sequence was already explored
    pub skip_repeated_orders: bool,
}

impl SearchConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            skip_repeated_orders: true,
        }
    }

    pub fn parallel() -> Self {
        Self {
            parallel: true,
            skip_repeated_orders: true,
        }
    }

    /// Every ordering, one thread - the plain reference search
    pub fn exhaustive() -> Self {
        Self {
            parallel: false,
            skip_repeated_orders: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        if cfg!(feature = "rayon") {
            Self::parallel()
        } else {
            Self::sequential()
        }
    }
}
