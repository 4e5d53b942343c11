//! Keyed read cache with invalidation-on-mutation
//!
//! The remote service is the sole source of truth; cached reads are never
//! merged, only invalidated. Each resource scope carries a version counter,
//! queries track the counter of their scope, and mutations bump exactly the
//! scopes whose underlying entities changed. Last invalidate wins.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Process-wide invalidation scopes, provided once at the app root
#[derive(Clone, Copy)]
pub struct QueryCache {
    pub products: RwSignal<u64>,
    pub orders: RwSignal<u64>,
    pub agent_orders: RwSignal<u64>,
    pub agents: RwSignal<u64>,
    pub landing: RwSignal<u64>,
    pub about_us: RwSignal<u64>,
    pub reference_website: RwSignal<u64>,
    pub identity: RwSignal<u64>,
}

impl QueryCache {
    pub fn provide() -> Self {
        let cache = Self {
            products: RwSignal::new(0),
            orders: RwSignal::new(0),
            agent_orders: RwSignal::new(0),
            agents: RwSignal::new(0),
            landing: RwSignal::new(0),
            about_us: RwSignal::new(0),
            reference_website: RwSignal::new(0),
            identity: RwSignal::new(0),
        };
        provide_context(cache);
        cache
    }

    fn bump(scope: RwSignal<u64>) {
        scope.update(|v| *v += 1);
    }

    pub fn invalidate_products(&self) {
        Self::bump(self.products);
    }

    /// Order mutations affect both the admin view and the agent view
    pub fn invalidate_orders(&self) {
        Self::bump(self.orders);
        Self::bump(self.agent_orders);
    }

    pub fn invalidate_agents(&self) {
        Self::bump(self.agents);
    }

    pub fn invalidate_landing(&self) {
        Self::bump(self.landing);
    }

    pub fn invalidate_about_us(&self) {
        Self::bump(self.about_us);
    }

    pub fn invalidate_reference_website(&self) {
        Self::bump(self.reference_website);
    }

    /// Caller role and profile reads
    pub fn invalidate_identity(&self) {
        Self::bump(self.identity);
    }

    /// Scopes only visible to a logged-in admin, refreshed on admin login
    pub fn invalidate_admin_scopes(&self) {
        Self::bump(self.orders);
        Self::bump(self.agents);
        Self::bump(self.reference_website);
    }

    /// Drop everything; used on logout
    pub fn clear_all(&self) {
        Self::bump(self.products);
        Self::bump(self.orders);
        Self::bump(self.agent_orders);
        Self::bump(self.agents);
        Self::bump(self.landing);
        Self::bump(self.about_us);
        Self::bump(self.reference_website);
        Self::bump(self.identity);
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not provided in context")
}

/// Reactive result of one remote read
pub struct QueryState<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    version: RwSignal<u64>,
    generation: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryState<T> {}

impl<T: Send + Sync + 'static> QueryState<T> {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            version: RwSignal::new(0),
            generation: RwSignal::new(0),
        }
    }

    /// Retry affordance for failed reads; stale data stays visible meanwhile
    pub fn refetch(&self) {
        self.version.update(|v| *v += 1);
    }

    /// Record a response only if no newer fetch has been issued since.
    ///
    /// Responses carry the generation of the run that issued them; a run
    /// with different parameters (language, status, token) bumps the
    /// counter, so an older in-flight response can never overwrite the
    /// newer one regardless of arrival order.
    fn apply(&self, generation: u64, result: Result<T, String>) {
        if self.generation.get_untracked() != generation {
            return;
        }
        match result {
            Ok(data) => {
                self.data.set(Some(data));
                self.error.set(None);
            }
            // keep stale data visible; the error carries the retry hint
            Err(message) => self.error.set(Some(message)),
        }
        self.loading.set(false);
    }
}

/// Bind one remote read to a cache scope.
///
/// `source` is called reactively: any signal it reads (active language,
/// selected status, session token) becomes part of the cache key, so the
/// query re-fetches when a parameter or the scope version changes. Returning
/// `None` means "not ready" (client still constructing, or not authenticated
/// for a privileged read) and leaves the state quietly empty.
pub fn use_query<T, Fut>(
    scope: RwSignal<u64>,
    source: impl Fn() -> Option<Fut> + 'static,
) -> QueryState<T>
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = QueryState::new();
    Effect::new(move |_| {
        scope.track();
        state.version.track();
        let Some(fut) = source() else {
            return;
        };
        // each run supersedes any fetch still in flight
        let generation = state.generation.get_untracked() + 1;
        state.generation.set(generation);
        state.loading.set(true);
        spawn_local(async move {
            let result = fut.await;
            state.apply(generation, result);
        });
    });
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    fn cache() -> QueryCache {
        QueryCache {
            products: RwSignal::new(0),
            orders: RwSignal::new(0),
            agent_orders: RwSignal::new(0),
            agents: RwSignal::new(0),
            landing: RwSignal::new(0),
            about_us: RwSignal::new(0),
            reference_website: RwSignal::new(0),
            identity: RwSignal::new(0),
        }
    }

    #[test]
    fn mutations_bump_exactly_their_scopes() {
        let owner = Owner::new();
        owner.set();

        let cache = cache();
        cache.invalidate_products();
        assert_eq!(cache.products.get_untracked(), 1);
        assert_eq!(cache.orders.get_untracked(), 0);
        assert_eq!(cache.agents.get_untracked(), 0);
    }

    #[test]
    fn order_invalidation_covers_the_agent_view() {
        let owner = Owner::new();
        owner.set();

        let cache = cache();
        cache.invalidate_orders();
        assert_eq!(cache.orders.get_untracked(), 1);
        assert_eq!(cache.agent_orders.get_untracked(), 1);
        assert_eq!(cache.products.get_untracked(), 0);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let owner = Owner::new();
        owner.set();

        let state: QueryState<Vec<String>> = QueryState::new();
        // two fetches issued; the second one's parameters are current
        state.generation.set(1);
        state.generation.set(2);

        // newer fetch lands first
        state.apply(2, Ok(vec!["en".to_string()]));
        // older fetch lands last and must not overwrite it
        state.apply(1, Ok(vec!["hi".to_string()]));

        assert_eq!(state.data.get_untracked(), Some(vec!["en".to_string()]));
        assert!(!state.loading.get_untracked());
    }

    #[test]
    fn stale_error_does_not_clobber_current_data() {
        let owner = Owner::new();
        owner.set();

        let state: QueryState<u64> = QueryState::new();
        state.generation.set(2);

        state.apply(2, Ok(7));
        state.apply(1, Err("request timed out".to_string()));

        assert_eq!(state.data.get_untracked(), Some(7));
        assert_eq!(state.error.get_untracked(), None);
    }

    #[test]
    fn clear_all_touches_every_scope() {
        let owner = Owner::new();
        owner.set();

        let cache = cache();
        cache.clear_all();
        for scope in [
            cache.products,
            cache.orders,
            cache.agent_orders,
            cache.agents,
            cache.landing,
            cache.about_us,
            cache.reference_website,
            cache.identity,
        ] {
            assert_eq!(scope.get_untracked(), 1);
        }
    }
}
