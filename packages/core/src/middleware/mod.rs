// Middleware trait and chain composition
// Middlewares wrap the store's dispatch function: (dispatch, get_state) -> (next) -> (action)

use std::fmt::Debug;
use std::sync::Arc;

/// Any value that can be dispatched through the pipeline.
///
/// `Debug` is the string representation used by observers such as loggers.
pub trait Action: Debug + Send + 'static {}

impl<T> Action for T where T: Debug + Send + 'static {}

/// A snapshot of application state handed to middlewares.
pub trait StateProtocol: Debug + Clone + Send + Sync + 'static {}

impl<T> StateProtocol for T where T: Debug + Clone + Send + Sync + 'static {}

/// A step in the dispatch pipeline
pub type DispatchFunction<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Accessor for the current state, `None` when the host has no state to offer
pub type GetState<S> = Arc<dyn Fn() -> Option<S> + Send + Sync>;

/// Binds a middleware to the next step of the pipeline
pub type Wrapper<A> = Box<dyn FnOnce(DispatchFunction<A>) -> DispatchFunction<A> + Send>;

/// Core middleware trait that all middlewares must implement
pub trait Middleware<S, A>: Send + Sync {
    /// Bind the middleware to a store.
    ///
    /// `dispatch` re-enters the whole pipeline from the top, `state` reads the
    /// current state. The returned wrapper receives the next step and produces
    /// the dispatch function this middleware contributes to the chain.
    fn body(&self, dispatch: DispatchFunction<A>, state: GetState<S>) -> Wrapper<A>;
}

/// Ordered list of middlewares. The first one added sees actions first.
pub struct MiddlewareChain<S, A> {
    pub middlewares: Vec<Arc<dyn Middleware<S, A>>>,
}

impl<S, A> MiddlewareChain<S, A>
where
    S: StateProtocol,
    A: Action,
{
    pub fn new() -> Self {
        MiddlewareChain {
            middlewares: Vec::new(),
        }
    }

    pub fn add(&mut self, middleware: Arc<dyn Middleware<S, A>>) -> &mut Self {
        self.middlewares.push(middleware);
        self
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    /// Wrap `base` with every middleware in the chain.
    pub fn apply(
        &self,
        base: DispatchFunction<A>,
        dispatch: DispatchFunction<A>,
        state: GetState<S>,
    ) -> DispatchFunction<A> {
        self.middlewares.iter().rev().fold(base, |next, middleware| {
            middleware.body(dispatch.clone(), state.clone())(next)
        })
    }
}

impl<S, A> Default for MiddlewareChain<S, A>
where
    S: StateProtocol,
    A: Action,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records its tag before forwarding, so tests can observe chain order
    struct Tagging {
        tag: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Middleware<u32, String> for Tagging {
        fn body(&self, _dispatch: DispatchFunction<String>, _state: GetState<u32>) -> Wrapper<String> {
            let tag = self.tag;
            let seen = self.seen.clone();
            Box::new(move |next: DispatchFunction<String>| -> DispatchFunction<String> {
                Arc::new(move |action: String| {
                    seen.lock().unwrap().push(format!("{}:{}", tag, action));
                    next(action);
                })
            })
        }
    }

    fn recording_base(seen: Arc<Mutex<Vec<String>>>) -> DispatchFunction<String> {
        Arc::new(move |action: String| seen.lock().unwrap().push(format!("base:{}", action)))
    }

    fn no_dispatch() -> DispatchFunction<String> {
        Arc::new(|_: String| {})
    }

    #[test]
    fn test_middleware_chain_new_creates_empty_chain() {
        let chain = MiddlewareChain::<u32, String>::new();
        assert_eq!(chain.len(), 0);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_middleware_chain_add_middleware() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = MiddlewareChain::<u32, String>::new();
        chain
            .add(Arc::new(Tagging { tag: "a", seen: seen.clone() }))
            .add(Arc::new(Tagging { tag: "b", seen }));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_empty_chain_returns_base() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let chain = MiddlewareChain::<u32, String>::new();
        let dispatch = chain.apply(recording_base(seen.clone()), no_dispatch(), Arc::new(|| Some(0u32)));

        dispatch("ping".to_string());

        assert_eq!(*seen.lock().unwrap(), vec!["base:ping".to_string()]);
    }

    #[test]
    fn test_first_added_middleware_runs_first() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = MiddlewareChain::<u32, String>::new();
        chain.add(Arc::new(Tagging { tag: "outer", seen: seen.clone() }));
        chain.add(Arc::new(Tagging { tag: "inner", seen: seen.clone() }));

        let dispatch = chain.apply(recording_base(seen.clone()), no_dispatch(), Arc::new(|| None));
        dispatch("go".to_string());

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["outer:go".to_string(), "inner:go".to_string(), "base:go".to_string()]
        );
    }
}
