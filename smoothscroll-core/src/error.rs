/// Errors returned by [`crate::ScrollEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    /// The engine was used before a surface was bound.
    #[error("the scroll engine has no surface bound")]
    Unbound,
}
