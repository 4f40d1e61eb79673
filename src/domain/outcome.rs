//! Typed outcomes for idempotent operations.
//!
//! "Already there" is a success, never an error. Callers branch on the
//! variant instead of intercepting failures.

/// Result of an idempotent create or upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned<T> {
    /// The target did not exist and was created.
    Created(T),
    /// The target already existed and was reused (or overwritten in place).
    AlreadyExisted(T),
}

impl<T> Provisioned<T> {
    #[must_use]
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Self::Created(value) | Self::AlreadyExisted(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::AlreadyExisted(value) => value,
        }
    }

    /// Project the outcome onto another value, keeping the variant.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Provisioned<U> {
        match self {
            Self::Created(value) => Provisioned::Created(f(value)),
            Self::AlreadyExisted(value) => Provisioned::AlreadyExisted(f(value)),
        }
    }

    /// Short label for logs and CLI output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::AlreadyExisted(_) => "existing",
        }
    }
}

/// Node response to a create-and-load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCreation<T> {
    Created(T),
    AlreadyExists,
}

/// Node response to a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletLoad {
    Loaded,
    AlreadyLoaded,
}

/// What the provisioner had to do to get a wallet ready on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeWalletState {
    /// Node did not list the wallet and created it.
    Created,
    /// Node did not list the wallet but reported it already existed on create.
    AlreadyExisted,
    /// Wallet existed but was not loaded; it was loaded now.
    Loaded,
    /// Wallet existed and a load raced with another loader.
    AlreadyLoaded,
    /// Wallet existed and was already loaded.
    Ready,
}

impl NodeWalletState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExisted => "already existed",
            Self::Loaded => "loaded",
            Self::AlreadyLoaded => "already loaded",
            Self::Ready => "ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_variant() {
        let created = Provisioned::Created(2).map(|v| v * 10);
        assert_eq!(created, Provisioned::Created(20));
        let existing = Provisioned::AlreadyExisted("a").map(str::len);
        assert_eq!(existing, Provisioned::AlreadyExisted(1));
    }

    #[test]
    fn accessors_ignore_variant() {
        assert_eq!(*Provisioned::AlreadyExisted(5).get(), 5);
        assert_eq!(Provisioned::Created(5).into_inner(), 5);
        assert!(Provisioned::Created(()).was_created());
        assert!(!Provisioned::AlreadyExisted(()).was_created());
    }
}
