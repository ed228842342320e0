use std::cell::RefCell;

use futures::executor::block_on;
use futures::future::{ready, Ready};

use super::*;
use crate::action::{vote_calls, VoteTarget};
use crate::endpoint::Method;
use crate::entity::{EntityKind, Vote};
use crate::envelope::Tone;

/// Records every call it is handed and answers from a script.
struct Backend {
    sent: RefCell<Vec<ApiCall>>,
    fail_on: Option<Method>,
    reply: Option<&'static str>,
}

impl Backend {
    fn ok(reply: Option<&'static str>) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail_on: None,
            reply,
        }
    }

    fn failing(method: Method) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail_on: Some(method),
            reply: None,
        }
    }

    fn send(&self, call: ApiCall) -> Ready<Result<Option<String>, ApiError>> {
        let fails = self.fail_on == Some(call.method);
        self.sent.borrow_mut().push(call);
        if fails {
            ready(Err(ApiError::Rejected("vote not found".to_owned())))
        } else {
            ready(Ok(self.reply.map(str::to_owned)))
        }
    }

    fn methods(&self) -> Vec<Method> {
        self.sent.borrow().iter().map(|call| call.method).collect()
    }
}

#[derive(Default)]
struct Page {
    notices: RefCell<Vec<Notice>>,
    refetches: RefCell<u32>,
}

impl MutationSink for Page {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn refetch(&self) {
        *self.refetches.borrow_mut() += 1;
    }
}

fn repeat_like() -> Vec<ApiCall> {
    let target = VoteTarget {
        kind: EntityKind::Comment,
        id: 300,
        current: Some(Vote::Like),
    };
    vote_calls(target, Vote::Like)
}

// =============================================================
// Sequencing
// =============================================================

#[test]
fn runs_remove_then_like_in_order() {
    let backend = Backend::ok(Some("Successfully liked comment"));
    let message = block_on(run_calls(repeat_like(), |call| backend.send(call))).unwrap();
    assert_eq!(backend.methods(), vec![Method::Delete, Method::Post]);
    assert_eq!(message.as_deref(), Some("Successfully liked comment"));
}

#[test]
fn failed_remove_skips_the_like() {
    let backend = Backend::failing(Method::Delete);
    let result = block_on(run_calls(repeat_like(), |call| backend.send(call)));
    assert_eq!(result, Err(ApiError::Rejected("vote not found".to_owned())));
    assert_eq!(backend.methods(), vec![Method::Delete]);
}

#[test]
fn no_calls_yields_no_message() {
    let backend = Backend::ok(Some("unused"));
    let message = block_on(run_calls(Vec::new(), |call| backend.send(call))).unwrap();
    assert_eq!(message, None);
    assert!(backend.methods().is_empty());
}

// =============================================================
// Reporting
// =============================================================

#[test]
fn success_reports_backend_message_and_refetches() {
    let backend = Backend::ok(Some("Successfully deleted topic"));
    let page = Page::default();
    let calls = vec![ApiCall::delete("/api/topics/1")];
    let result = block_on(apply(calls, "topic deleted".to_owned(), |c| backend.send(c), &page));
    assert!(result.is_ok());
    assert_eq!(*page.notices.borrow(), vec![Notice::success("Successfully deleted topic")]);
    assert_eq!(*page.refetches.borrow(), 1);
}

#[test]
fn success_without_message_uses_fallback() {
    let backend = Backend::ok(None);
    let page = Page::default();
    let calls = vec![ApiCall::delete("/api/topics/1")];
    block_on(apply(calls, "topic deleted".to_owned(), |c| backend.send(c), &page)).unwrap();
    assert_eq!(page.notices.borrow()[0].message, "topic deleted");
}

#[test]
fn failure_reports_error_and_still_refetches() {
    let backend = Backend::failing(Method::Delete);
    let page = Page::default();
    let fallback = "vote recorded".to_owned();
    let result = block_on(apply(repeat_like(), fallback, |c| backend.send(c), &page));
    assert!(result.is_err());
    let notices = page.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].tone, Tone::Error);
    assert_eq!(notices[0].message, "vote not found");
    assert_eq!(*page.refetches.borrow(), 1);
}
