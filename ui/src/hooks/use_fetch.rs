use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use payloads::{ClientError, Envelope, Pagination};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::{FetchError, FetchState, RequestGate};
use crate::components::ErrorPanel;
use crate::get_api_client;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub state: FetchState<T>,
}

impl<T> FetchHookReturn<T> {
    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.state.error()
    }

    /// Render the fetched data, or the error panel in its place.
    ///
    /// Nothing is rendered before the first response arrives; the loading
    /// indicator is driven separately through `set_is_loading`.
    pub fn render<F>(&self, render_fn: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match &self.state {
            FetchState::NotFetched => html! {},
            FetchState::Fetched(data) => render_fn(data),
            FetchState::Failed(error) => html! {
                <ErrorPanel message={error.message.clone()} />
            },
        }
    }
}

/// Runs requests through a [`RequestGate`] and reports their lifecycle.
///
/// Kept free of hook state so the ordering rules can be exercised without
/// a browser.
pub struct FetchDriver<T> {
    gate: Rc<RefCell<RequestGate>>,
    update_pagination: Callback<Option<Pagination>>,
    set_is_loading: Callback<bool>,
    set_state: Callback<FetchState<T>>,
}

impl<T: 'static> FetchDriver<T> {
    pub fn new(
        gate: Rc<RefCell<RequestGate>>,
        update_pagination: Callback<Option<Pagination>>,
        set_is_loading: Callback<bool>,
        set_state: Callback<FetchState<T>>,
    ) -> Self {
        Self {
            gate,
            update_pagination,
            set_is_loading,
            set_state,
        }
    }

    /// Issues a request for `url`.
    ///
    /// Data from the previous request is cleared and the loading flag is
    /// raised before this returns. The returned future awaits the response
    /// and applies it only if no newer request was issued in the meantime.
    pub fn start<F, Fut>(&self, url: String, fetch: F) -> LocalBoxFuture<'static, ()>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Envelope<T>, ClientError>> + 'static,
    {
        let ticket = self.gate.borrow_mut().open(&url);
        self.set_state.emit(FetchState::NotFetched);
        self.set_is_loading.emit(true);

        let response = fetch(url);
        let gate = self.gate.clone();
        let update_pagination = self.update_pagination.clone();
        let set_is_loading = self.set_is_loading.clone();
        let set_state = self.set_state.clone();

        async move {
            let result = response.await;

            if !gate.borrow_mut().finish(&ticket) {
                tracing::debug!("discarding stale response for {}", ticket.url());
                return;
            }

            match result {
                Ok(envelope) => {
                    update_pagination.emit(envelope.pagination);
                    set_state.emit(FetchState::Fetched(envelope.data));
                }
                Err(e) => {
                    tracing::warn!("request for {} failed: {e}", ticket.url());
                    set_state.emit(FetchState::Failed(FetchError::from(&e)));
                }
            }

            set_is_loading.emit(false);
        }
        .boxed_local()
    }

    /// Abandons the in-flight request, lowering the loading flag it raised.
    pub fn cancel(&self) {
        let abandoned = self.gate.borrow_mut().abandon();
        if let Some(ticket) = abandoned {
            tracing::debug!("abandoning request for {}", ticket.url());
            self.set_is_loading.emit(false);
        }
    }
}

/// Fetches one enveloped backend response per distinct request URL.
///
/// A `None` URL issues nothing. Whenever the URL changes the previous
/// request is abandoned and its data dropped, so only the latest URL's
/// response reaches state.
/// On success the envelope's pagination is passed to `update_pagination`;
/// on failure pagination is left alone and the error replaces any data.
///
/// # Example
///
/// ```ignore
/// let raids = use_fetch::<Raids>(
///     request_url,
///     dispatch.reduce_mut_callback_with(State::update_pagination),
///     dispatch.reduce_mut_callback_with(State::set_is_loading),
/// );
/// ```
#[hook]
pub fn use_fetch<T>(
    request_url: Option<String>,
    update_pagination: Callback<Option<Pagination>>,
    set_is_loading: Callback<bool>,
) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let state = use_state_eq(|| FetchState::<T>::NotFetched);
    let gate = use_mut_ref(RequestGate::default);

    {
        let state = state.clone();

        use_effect_with(request_url, move |request_url| {
            let set_state = Callback::from(move |fetched| state.set(fetched));
            let driver = FetchDriver::new(
                gate,
                update_pagination,
                set_is_loading,
                set_state,
            );

            if let Some(url) = request_url.clone() {
                let api_client = get_api_client();
                yew::platform::spawn_local(driver.start(url, move |url| async move {
                    api_client.get_envelope::<T>(&url).await
                }));
            }

            move || driver.cancel()
        });
    }

    FetchHookReturn {
        state: (*state).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use reqwest::StatusCode;

    type Reply = Result<Envelope<Vec<i64>>, ClientError>;

    #[derive(Default)]
    struct Recorded {
        loading: Vec<bool>,
        pagination: Vec<Option<Pagination>>,
        state: Option<FetchState<Vec<i64>>>,
    }

    fn driver() -> (FetchDriver<Vec<i64>>, Rc<RefCell<Recorded>>) {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let driver = FetchDriver::new(
            Rc::new(RefCell::new(RequestGate::default())),
            {
                let recorded = recorded.clone();
                Callback::from(move |p| recorded.borrow_mut().pagination.push(p))
            },
            {
                let recorded = recorded.clone();
                Callback::from(move |l| recorded.borrow_mut().loading.push(l))
            },
            {
                let recorded = recorded.clone();
                Callback::from(move |s| recorded.borrow_mut().state = Some(s))
            },
        );
        (driver, recorded)
    }

    fn page(page: u64) -> Pagination {
        Pagination {
            page,
            page_size: 2,
            total_items: 10,
            total_pages: 5,
        }
    }

    fn reply(data: Vec<i64>, pagination: u64) -> Reply {
        Ok(Envelope {
            data,
            pagination: Some(page(pagination)),
        })
    }

    /// Starts a request whose response is delivered through the returned
    /// sender.
    fn issue(
        pool: &LocalPool,
        driver: &FetchDriver<Vec<i64>>,
        url: &str,
    ) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel::<Reply>();
        let request = driver.start(url.to_string(), move |_| async move {
            rx.await.unwrap_or_else(|_| {
                Err(ClientError::APIError(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "dropped".into(),
                ))
            })
        });
        pool.spawner().spawn_local(request).unwrap();
        tx
    }

    #[test]
    fn loading_is_raised_synchronously() {
        let pool = LocalPool::new();
        let (driver, recorded) = driver();

        let _tx = issue(&pool, &driver, "/a");
        assert_eq!(recorded.borrow().loading, vec![true]);
        assert_eq!(recorded.borrow().state, Some(FetchState::NotFetched));
    }

    #[test]
    fn success_updates_pagination_and_data() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx = issue(&pool, &driver, "/a");
        tx.send(reply(vec![1, 2], 3)).unwrap();
        pool.run_until_stalled();

        let recorded = recorded.borrow();
        assert_eq!(recorded.loading, vec![true, false]);
        assert_eq!(recorded.pagination, vec![Some(page(3))]);
        assert_eq!(recorded.state, Some(FetchState::Fetched(vec![1, 2])));
    }

    #[test]
    fn missing_pagination_is_reported_as_none() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx = issue(&pool, &driver, "/a");
        tx.send(Ok(Envelope {
            data: vec![],
            pagination: None,
        }))
        .unwrap();
        pool.run_until_stalled();

        assert_eq!(recorded.borrow().pagination, vec![None]);
    }

    #[test]
    fn failure_clears_loading_and_keeps_pagination() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx = issue(&pool, &driver, "/a");
        tx.send(Err(ClientError::APIError(
            StatusCode::NOT_FOUND,
            "no such user".into(),
        )))
        .unwrap();
        pool.run_until_stalled();

        let recorded = recorded.borrow();
        assert_eq!(recorded.loading, vec![true, false]);
        assert!(recorded.pagination.is_empty());
        assert_eq!(
            recorded.state,
            Some(FetchState::Failed(FetchError {
                message: "no such user".into(),
            }))
        );
    }

    #[test]
    fn new_request_drops_previous_data() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx = issue(&pool, &driver, "/users/raids?channel_login=a");
        tx.send(reply(vec![1, 2], 1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(recorded.borrow().state, Some(FetchState::Fetched(vec![1, 2])));

        let tx = issue(&pool, &driver, "/users/raids?channel_login=b");
        assert_eq!(recorded.borrow().state, Some(FetchState::NotFetched));
        assert_eq!(recorded.borrow().loading.last(), Some(&true));

        tx.send(reply(vec![3], 1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(recorded.borrow().state, Some(FetchState::Fetched(vec![3])));
    }

    #[test]
    fn loading_toggles_once_per_sequential_request() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx = issue(&pool, &driver, "/a");
        tx.send(reply(vec![1], 1)).unwrap();
        pool.run_until_stalled();

        let tx = issue(&pool, &driver, "/b");
        tx.send(Err(ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".into(),
        )))
        .unwrap();
        pool.run_until_stalled();

        assert_eq!(recorded.borrow().loading, vec![true, false, true, false]);
    }

    #[test]
    fn last_issued_wins_when_older_resolves_last() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx_a = issue(&pool, &driver, "/a");
        let tx_b = issue(&pool, &driver, "/b");

        tx_b.send(reply(vec![2], 2)).unwrap();
        pool.run_until_stalled();
        tx_a.send(reply(vec![1], 1)).unwrap();
        pool.run_until_stalled();

        let recorded = recorded.borrow();
        assert_eq!(recorded.state, Some(FetchState::Fetched(vec![2])));
        assert_eq!(recorded.pagination, vec![Some(page(2))]);
        assert_eq!(recorded.loading.last(), Some(&false));
    }

    #[test]
    fn last_issued_wins_when_older_resolves_first() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx_a = issue(&pool, &driver, "/a");
        let tx_b = issue(&pool, &driver, "/b");

        tx_a.send(reply(vec![1], 1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(recorded.borrow().state, Some(FetchState::NotFetched));
        assert_eq!(recorded.borrow().loading.last(), Some(&true));

        tx_b.send(reply(vec![2], 2)).unwrap();
        pool.run_until_stalled();

        let recorded = recorded.borrow();
        assert_eq!(recorded.state, Some(FetchState::Fetched(vec![2])));
        assert_eq!(recorded.pagination, vec![Some(page(2))]);
        assert_eq!(recorded.loading.last(), Some(&false));
    }

    #[test]
    fn stale_failure_does_not_replace_fresh_data() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx_a = issue(&pool, &driver, "/a");
        let tx_b = issue(&pool, &driver, "/b");

        tx_b.send(reply(vec![2], 2)).unwrap();
        tx_a.send(Err(ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "late".into(),
        )))
        .unwrap();
        pool.run_until_stalled();

        assert_eq!(
            recorded.borrow().state,
            Some(FetchState::Fetched(vec![2]))
        );
    }

    #[test]
    fn cancel_between_requests_pairs_every_raise_with_a_clear() {
        let mut pool = LocalPool::new();
        let (driver, recorded) = driver();

        let tx_a = issue(&pool, &driver, "/a");
        driver.cancel();
        let tx_b = issue(&pool, &driver, "/b");

        tx_b.send(reply(vec![2], 2)).unwrap();
        pool.run_until_stalled();
        tx_a.send(reply(vec![1], 1)).unwrap();
        pool.run_until_stalled();

        let recorded = recorded.borrow();
        assert_eq!(recorded.loading, vec![true, false, true, false]);
        assert_eq!(recorded.state, Some(FetchState::Fetched(vec![2])));
    }

    #[test]
    fn cancel_when_idle_emits_nothing() {
        let (driver, recorded) = driver();
        driver.cancel();
        assert!(recorded.borrow().loading.is_empty());
    }
}
