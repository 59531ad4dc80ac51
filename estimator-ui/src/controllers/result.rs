use estimator_core::CompiledData;

/// What the result card shows.
///
/// `NoResult` -> `Compiled` on a successful submit, -> `Discarded` on discard,
/// and back to `Compiled` on the next successful submit. `Discarded` renders
/// the same as `NoResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
    #[default]
    NoResult,
    Compiled {
        data: CompiledData,
        /// False once the form is edited after the submit that produced `data`.
        fresh: bool,
    },
    Discarded,
}

impl ResultState {
    pub fn compiled(&self) -> Option<&CompiledData> {
        match self {
            Self::Compiled { data, .. } => Some(data),
            Self::NoResult | Self::Discarded => None,
        }
    }

    /// `Some(true)` when showing a result that matches the current form.
    pub fn is_fresh(&self) -> Option<bool> {
        match self {
            Self::Compiled { fresh, .. } => Some(*fresh),
            Self::NoResult | Self::Discarded => None,
        }
    }

    /// Replaces any previous result.
    pub fn accept(
        &mut self,
        data: CompiledData,
    ) {
        *self = Self::Compiled { data, fresh: true };
    }

    pub fn mark_stale(&mut self) {
        if let Self::Compiled { fresh, .. } = self {
            *fresh = false;
        }
    }

    pub fn discard(&mut self) {
        *self = Self::Discarded;
    }
}
