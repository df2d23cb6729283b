/// Raised once while attaching the container's child; never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The container was inflated without any child.
    MissingChild,
    /// The first child is something other than a paged view.
    NotAPagedView { found: &'static str },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::MissingChild => {
                write!(f, "pager container has no child; expected a paged view")
            }
            ConfigurationError::NotAPagedView { found } => {
                write!(
                    f,
                    "the root child of a pager container must be a paged view, found {found}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
