//! Result of selecting a slice of state that may not currently exist.

/// A selected sub-state, or the fact that its scope is not active.
///
/// `OutOfScope` means the addressed phase is not on the current active path
/// of the state tree (e.g. profile state while nobody is signed in). It is an
/// absence signal, never "empty data to retry".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scoped<T> {
    InScope(T),
    OutOfScope,
}

impl<T> Scoped<T> {
    pub fn is_in_scope(&self) -> bool {
        matches!(self, Scoped::InScope(_))
    }

    pub fn is_out_of_scope(&self) -> bool {
        !self.is_in_scope()
    }

    pub fn as_ref(&self) -> Scoped<&T> {
        match self {
            Scoped::InScope(value) => Scoped::InScope(value),
            Scoped::OutOfScope => Scoped::OutOfScope,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Scoped<U> {
        match self {
            Scoped::InScope(value) => Scoped::InScope(f(value)),
            Scoped::OutOfScope => Scoped::OutOfScope,
        }
    }

    /// Chain a deeper selector. Short-circuits once out of scope.
    pub fn and_then<U, F: FnOnce(T) -> Scoped<U>>(self, f: F) -> Scoped<U> {
        match self {
            Scoped::InScope(value) => f(value),
            Scoped::OutOfScope => Scoped::OutOfScope,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Scoped::InScope(value) => Some(value),
            Scoped::OutOfScope => None,
        }
    }
}

impl<T: Clone> Scoped<&T> {
    pub fn cloned(self) -> Scoped<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<Option<T>> for Scoped<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Scoped::InScope(value),
            None => Scoped::OutOfScope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_then_short_circuits() {
        let outer: Scoped<u8> = Scoped::OutOfScope;
        let mut called = false;
        let inner = outer.and_then(|v| {
            called = true;
            Scoped::InScope(v + 1)
        });
        assert!(!called);
        assert_eq!(inner, Scoped::OutOfScope);
    }

    #[test]
    fn map_keeps_scope() {
        assert_eq!(Scoped::InScope(2).map(|v| v * 2), Scoped::InScope(4));
        assert_eq!(Scoped::<u8>::OutOfScope.map(|v| v * 2), Scoped::OutOfScope);
    }

    #[test]
    fn option_round_trip() {
        assert_eq!(Scoped::from(Some("a")).into_option(), Some("a"));
        assert!(Scoped::<&str>::from(None).is_out_of_scope());
    }

    #[test]
    fn cloned_from_reference() {
        let value = String::from("pickup");
        let scoped = Scoped::InScope(&value).cloned();
        assert_eq!(scoped, Scoped::InScope(String::from("pickup")));
    }
}
