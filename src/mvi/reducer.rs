//! Reducer trait and hierarchical composition.

use super::action::Action;
use super::state::State;

/// Reducer for one scope of the state tree.
///
/// A scope reducer is split into three steps which [`reduce_in`] runs in a
/// fixed order:
///
/// 1. [`transition`](Reducer::transition): replace the active child phase
///    wholesale. Checked first, and skipped if an outer scope already
///    transitioned during this dispatch.
/// 2. [`update`](Reducer::update): scope-local pass-through rules. Skipped
///    when a transition fired in this scope.
/// 3. [`delegate`](Reducer::delegate): hand the same action to the reducer of
///    whichever child phase is active now.
///
/// All three must be pure and total: anything they do not recognise returns
/// the input state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Name of the active phase, used in transition logs.
    fn phase(_state: &Self::State) -> &'static str {
        std::any::type_name::<Self::State>()
    }

    /// Return a replacement phase if `action` triggers one from `state`.
    fn transition(_state: &Self::State, _action: &Self::Action) -> Option<Self::State> {
        None
    }

    /// Apply the scope's own (non-transition) rules.
    fn update(state: Self::State, _action: &Self::Action) -> Self::State {
        state
    }

    /// Pass the action through to the active child scope.
    fn delegate(
        state: Self::State,
        _action: &Self::Action,
        _ctx: &mut ReduceContext,
    ) -> Self::State {
        state
    }
}

/// Per-dispatch bookkeeping threaded through nested reducers.
#[derive(Debug, Default)]
pub struct ReduceContext {
    transitioned: bool,
}

impl ReduceContext {
    /// True once any scope has replaced its active phase during this dispatch.
    pub fn transitioned(&self) -> bool {
        self.transitioned
    }
}

/// Reduce `state` with the root reducer `R`.
pub fn reduce<R: Reducer>(state: R::State, action: &R::Action) -> R::State {
    reduce_in::<R>(state, action, &mut ReduceContext::default())
}

/// Reduce one scope as part of an ongoing dispatch.
///
/// Parents call this from their [`Reducer::delegate`] to run a child scope.
pub fn reduce_in<R: Reducer>(
    state: R::State,
    action: &R::Action,
    ctx: &mut ReduceContext,
) -> R::State {
    if !ctx.transitioned {
        if let Some(next) = R::transition(&state, action) {
            ctx.transitioned = true;
            tracing::debug!(
                from = R::phase(&state),
                to = R::phase(&next),
                action = ?action,
                "Phase transition"
            );
            return R::delegate(next, action, ctx);
        }
    }

    let state = R::update(state, action);
    R::delegate(state, action, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestAction {
        Enter,
        Bump,
    }

    impl Action for TestAction {}

    #[derive(Debug, Clone, PartialEq)]
    enum Outer {
        Idle { bumps: u32 },
        Active(Inner),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Inner {
        Fresh { bumps: u32 },
        Nested,
    }

    impl State for Outer {}
    impl State for Inner {}

    struct OuterReducer;
    struct InnerReducer;

    impl Reducer for OuterReducer {
        type State = Outer;
        type Action = TestAction;

        fn transition(state: &Outer, action: &TestAction) -> Option<Outer> {
            match (state, action) {
                (Outer::Idle { .. }, TestAction::Enter) => {
                    Some(Outer::Active(Inner::Fresh { bumps: 0 }))
                }
                _ => None,
            }
        }

        fn update(state: Outer, action: &TestAction) -> Outer {
            match (state, action) {
                (Outer::Idle { bumps }, TestAction::Bump) => Outer::Idle { bumps: bumps + 1 },
                (other, _) => other,
            }
        }

        fn delegate(state: Outer, action: &TestAction, ctx: &mut ReduceContext) -> Outer {
            match state {
                Outer::Active(inner) => Outer::Active(reduce_in::<InnerReducer>(inner, action, ctx)),
                other => other,
            }
        }
    }

    impl Reducer for InnerReducer {
        type State = Inner;
        type Action = TestAction;

        fn transition(state: &Inner, action: &TestAction) -> Option<Inner> {
            match (state, action) {
                (Inner::Fresh { .. }, TestAction::Enter) => Some(Inner::Nested),
                _ => None,
            }
        }

        fn update(state: Inner, action: &TestAction) -> Inner {
            match (state, action) {
                (Inner::Fresh { bumps }, TestAction::Bump | TestAction::Enter) => {
                    Inner::Fresh { bumps: bumps + 1 }
                }
                (other, _) => other,
            }
        }
    }

    #[test]
    fn transition_then_delegates_same_action_to_new_child() {
        let state = reduce::<OuterReducer>(Outer::Idle { bumps: 0 }, &TestAction::Enter);
        // Inner saw `Enter` as a pass-through because the outer scope already
        // used up the single transition of this dispatch.
        assert_eq!(state, Outer::Active(Inner::Fresh { bumps: 1 }));
    }

    #[test]
    fn only_one_transition_per_dispatch() {
        let state = reduce::<OuterReducer>(Outer::Idle { bumps: 0 }, &TestAction::Enter);
        assert!(!matches!(state, Outer::Active(Inner::Nested)));

        let state = reduce::<OuterReducer>(state, &TestAction::Enter);
        assert_eq!(state, Outer::Active(Inner::Nested));
    }

    #[test]
    fn transition_skips_scope_local_update() {
        let mut ctx = ReduceContext::default();
        let state = reduce_in::<OuterReducer>(Outer::Idle { bumps: 3 }, &TestAction::Enter, &mut ctx);
        assert!(ctx.transitioned());
        assert!(matches!(state, Outer::Active(_)));
    }

    #[test]
    fn pass_through_without_transition() {
        let state = reduce::<OuterReducer>(Outer::Idle { bumps: 0 }, &TestAction::Bump);
        assert_eq!(state, Outer::Idle { bumps: 1 });
    }

    #[test]
    fn unrecognised_pairs_return_input() {
        let state = Outer::Active(Inner::Nested);
        assert_eq!(reduce::<OuterReducer>(state.clone(), &TestAction::Bump), state);
    }
}
