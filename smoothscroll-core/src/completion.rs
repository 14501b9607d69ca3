use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// How an awaited animation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationOutcome {
    /// The final frame was applied.
    Completed,
    /// Another gesture, animation or reset took over before the final frame.
    Interrupted,
}

#[derive(Debug, Default)]
struct Shared {
    outcome: Option<AnimationOutcome>,
    waker: Option<Waker>,
}

/// Resolves once an animation has applied its final frame (or was interrupted).
///
/// Polling never drives the animation; frames still come from the host's pacer. The future
/// only observes the result, so awaiting it from an executor running on the same thread as the
/// frame loop lets callers chain programmatic scrolls.
#[derive(Debug)]
#[must_use = "a completion does nothing unless awaited or inspected"]
pub struct Completion {
    shared: Rc<RefCell<Shared>>,
}

/// The animation side of a [`Completion`].
///
/// Dropping an unresolved resolver resolves the completion as
/// [`AnimationOutcome::Interrupted`].
#[derive(Debug)]
pub struct CompletionResolver {
    shared: Rc<RefCell<Shared>>,
}

impl Completion {
    /// Creates a linked completion/resolver pair.
    pub fn pair() -> (Completion, CompletionResolver) {
        let shared = Rc::new(RefCell::new(Shared::default()));
        (
            Completion {
                shared: Rc::clone(&shared),
            },
            CompletionResolver { shared },
        )
    }

    /// An already resolved completion.
    pub fn resolved(outcome: AnimationOutcome) -> Self {
        let (completion, resolver) = Self::pair();
        resolver.resolve(outcome);
        completion
    }

    pub fn outcome(&self) -> Option<AnimationOutcome> {
        self.shared.borrow().outcome
    }

    pub fn is_done(&self) -> bool {
        self.outcome().is_some()
    }
}

impl Future for Completion {
    type Output = AnimationOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut shared = self.shared.borrow_mut();
        match shared.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                shared.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

impl CompletionResolver {
    pub fn resolve(self, outcome: AnimationOutcome) {
        self.set(outcome);
    }

    fn set(&self, outcome: AnimationOutcome) {
        let waker = {
            let mut shared = self.shared.borrow_mut();
            if shared.outcome.is_some() {
                return;
            }
            shared.outcome = Some(outcome);
            shared.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl Drop for CompletionResolver {
    fn drop(&mut self) {
        self.set(AnimationOutcome::Interrupted);
    }
}
