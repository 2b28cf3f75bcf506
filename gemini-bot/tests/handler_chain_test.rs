//! Integration tests for [`gemini_bot::HandlerChain`].
//!
//! Covers: before/handle/after counts, before returning false, Reply stopping the handle phase
//! and reaching after(), and after running in reverse order.

mod common;

use async_trait::async_trait;
use common::make_message;
use gemini_bot::{DbotError, Handler, HandlerChain, HandlerResponse, Message, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counts calls per phase and returns a fixed response from handle().
struct CountingHandler {
    before: AtomicUsize,
    handle: AtomicUsize,
    after: AtomicUsize,
    response: HandlerResponse,
    seen_in_after: Mutex<Option<HandlerResponse>>,
}

impl CountingHandler {
    fn new(response: HandlerResponse) -> Arc<Self> {
        Arc::new(Self {
            before: AtomicUsize::new(0),
            handle: AtomicUsize::new(0),
            after: AtomicUsize::new(0),
            response,
            seen_in_after: Mutex::new(None),
        })
    }

    fn counts(&self) -> (usize, usize, usize) {
        (
            self.before.load(Ordering::SeqCst),
            self.handle.load(Ordering::SeqCst),
            self.after.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn before(&self, _message: &Message) -> Result<bool> {
        self.before.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        self.handle.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> Result<()> {
        self.after.fetch_add(1, Ordering::SeqCst);
        *self.seen_in_after.lock().unwrap() = Some(response.clone());
        Ok(())
    }
}

/// **Test: With only Continue handlers, every phase runs once and the result is Continue.**
#[tokio::test]
async fn test_all_phases_run_once() {
    let a = CountingHandler::new(HandlerResponse::Continue);
    let b = CountingHandler::new(HandlerResponse::Continue);
    let chain = HandlerChain::new()
        .add_handler(a.clone())
        .add_handler(b.clone());

    let response = chain.handle(&make_message("1", 1, "test")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(a.counts(), (1, 1, 1));
    assert_eq!(b.counts(), (1, 1, 1));
}

/// **Test: Reply ends the handle phase; later handlers are not handled but still see after().**
#[tokio::test]
async fn test_reply_stops_handle_phase() {
    let replier = CountingHandler::new(HandlerResponse::Reply("done".to_string()));
    let later = CountingHandler::new(HandlerResponse::Continue);
    let chain = HandlerChain::new()
        .add_handler(replier.clone())
        .add_handler(later.clone());

    let response = chain.handle(&make_message("1", 1, "test")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("done".to_string()));
    assert_eq!(replier.counts(), (1, 1, 1));
    assert_eq!(later.counts(), (1, 0, 1));
    assert_eq!(
        *later.seen_in_after.lock().unwrap(),
        Some(HandlerResponse::Reply("done".to_string()))
    );
}

/// **Test: before() returning false stops the chain with Stop before any handle().**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct Gate;

    #[async_trait]
    impl Handler for Gate {
        async fn before(&self, _message: &Message) -> Result<bool> {
            Ok(false)
        }
    }

    let counted = CountingHandler::new(HandlerResponse::Continue);
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Gate))
        .add_handler(counted.clone());

    let response = chain.handle(&make_message("1", 1, "test")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(counted.counts(), (0, 0, 0));
}

/// **Test: after() runs last-to-first.**
#[tokio::test]
async fn test_after_runs_in_reverse() {
    struct Named(&'static str, Arc<Mutex<Vec<&'static str>>>);

    #[async_trait]
    impl Handler for Named {
        async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
            self.1.lock().unwrap().push(self.0);
            Ok(())
        }
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Named("first", order.clone())))
        .add_handler(Arc::new(Named("second", order.clone())));

    chain.handle(&make_message("1", 1, "test")).await.unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["second", "first"]);
    assert_eq!(chain.len(), 2);
}

/// **Test: a handler error propagates out of the chain.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct Broken;

    #[async_trait]
    impl Handler for Broken {
        async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
            Err(DbotError::Bot("boom".to_string()))
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(Broken));

    assert!(chain.handle(&make_message("1", 1, "test")).await.is_err());
}
