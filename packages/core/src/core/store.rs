// Core Store struct - holds state and runs actions through the middleware chain

use std::sync::{Arc, RwLock, Weak};

use crate::middleware::{Action, DispatchFunction, GetState, MiddlewareChain, StateProtocol};

/// Applies an action to the state in place
pub type Reducer<S, A> = Arc<dyn Fn(&mut S, A) + Send + Sync>;

pub struct Store<S, A> {
    state: Arc<RwLock<S>>,
    pipeline: Arc<DispatchFunction<A>>,
}

impl<S, A> Store<S, A>
where
    S: StateProtocol,
    A: Action,
{
    /// Create a store whose dispatch runs `chain` in front of `reducer`.
    pub fn new(initial: S, reducer: Reducer<S, A>, chain: MiddlewareChain<S, A>) -> Self {
        let state = Arc::new(RwLock::new(initial));

        let base: DispatchFunction<A> = {
            let state = state.clone();
            Arc::new(move |action: A| {
                let mut guard = state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
                reducer(&mut *guard, action);
            })
        };

        let get_state: GetState<S> = {
            let state = state.clone();
            Arc::new(move || {
                let guard = state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
                Some(guard.clone())
            })
        };

        log::debug!("Creating store with {} middleware(s)", chain.len());

        // Middlewares re-dispatch through the finished pipeline. They only hold
        // a weak handle, so the pipeline never owns itself.
        let pipeline = Arc::new_cyclic(|pipeline: &Weak<DispatchFunction<A>>| {
            let pipeline = pipeline.clone();
            let dispatch: DispatchFunction<A> = Arc::new(move |action: A| {
                if let Some(dispatch) = pipeline.upgrade() {
                    (**dispatch)(action);
                }
            });
            chain.apply(base, dispatch, get_state)
        });

        Store { state, pipeline }
    }

    /// Run an action through the middleware chain and into the reducer
    pub fn dispatch(&self, action: A) {
        (**self.pipeline)(action);
    }

    /// Snapshot of the current state
    pub fn state(&self) -> S {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The top of the pipeline, usable after the store reference is gone
    pub fn dispatcher(&self) -> DispatchFunction<A> {
        (*self.pipeline).clone()
    }

    pub fn state_getter(&self) -> GetState<S> {
        let state = self.state.clone();
        Arc::new(move || {
            let guard = state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            Some(guard.clone())
        })
    }
}
