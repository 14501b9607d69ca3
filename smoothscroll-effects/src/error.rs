/// Errors raised while mapping a transition's `from`/`to` properties.
///
/// All of them are reported by `TransitionPlayer::start` before the first frame is applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("missing target value for `{property}`")]
    MissingTarget { property: String },

    #[error("invalid value `{value}` for `{property}`: no numbers to interpolate")]
    InvalidValue { property: String, value: String },

    #[error("`{property}` has {from} numbers in its initial value but {to} in its target")]
    NumberCountMismatch {
        property: String,
        from: usize,
        to: usize,
    },

    #[error("`{property}` cannot transition from a {from} to a {to}")]
    KindMismatch {
        property: String,
        from: &'static str,
        to: &'static str,
    },
}
