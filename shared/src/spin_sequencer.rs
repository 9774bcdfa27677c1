use std::cell::RefCell;
use std::fmt;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::shared_wheel_game::{TargetRotation, WheelLayout, SPIN_DURATION_MS};

/// Result of one spin as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub prize_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Requesting,
    Animating,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Started,
    /// A spin is already in flight; the trigger is dropped, not queued
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Status { code: u16, message: Option<String> },
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Status { code, message: Some(message) } => write!(f, "Server error {}: {}", code, message),
            Self::Status { code, message: None } => write!(f, "Server error {}", code),
            Self::Malformed(e) => write!(f, "Malformed response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// State of the wheel for one trigger-to-reveal cycle. Only the rotation
/// outlives the cycle so consecutive spins continue from the resting angle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    current_rotation: f64,
    phase: Phase,
    pending_outcome: Option<SpinOutcome>,
    target_rotation: Option<f64>,
    last_error: Option<String>,
}

impl Default for SpinSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinSession {
    pub fn new() -> Self {
        Self::with_rotation(0.0)
    }

    pub fn with_rotation(current_rotation: f64) -> Self {
        Self {
            current_rotation,
            phase: Phase::Idle,
            pending_outcome: None,
            target_rotation: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn target_rotation(&self) -> Option<f64> {
        self.target_rotation
    }

    pub fn pending_outcome(&self) -> Option<&SpinOutcome> {
        self.pending_outcome.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The outcome is visible only once the wheel has come to rest.
    pub fn revealed_outcome(&self) -> Option<&SpinOutcome> {
        match self.phase {
            Phase::Settled => self.pending_outcome.as_ref(),
            _ => None,
        }
    }

    pub fn trigger(&mut self) -> TriggerOutcome {
        if self.phase != Phase::Idle {
            return TriggerOutcome::Ignored;
        }
        self.phase = Phase::Requesting;
        self.pending_outcome = None;
        self.target_rotation = None;
        self.last_error = None;
        TriggerOutcome::Started
    }

    pub fn receive_outcome(&mut self, layout: &WheelLayout, outcome: SpinOutcome) -> Option<TargetRotation> {
        if self.phase != Phase::Requesting {
            return None;
        }
        let target = layout.resolve_target_rotation(&outcome.prize_id, self.current_rotation);
        self.target_rotation = Some(target.rotation);
        self.pending_outcome = Some(outcome);
        self.phase = Phase::Animating;
        Some(target)
    }

    pub fn fail_request(&mut self, message: impl Into<String>) -> bool {
        if self.phase != Phase::Requesting {
            return false;
        }
        self.phase = Phase::Idle;
        self.last_error = Some(message.into());
        true
    }

    pub fn settle(&mut self) -> bool {
        if self.phase != Phase::Animating {
            return false;
        }
        if let Some(target) = self.target_rotation.take() {
            self.current_rotation = target;
        }
        self.phase = Phase::Settled;
        true
    }

    pub fn dismiss(&mut self) -> bool {
        if self.phase != Phase::Settled {
            return false;
        }
        self.phase = Phase::Idle;
        self.pending_outcome = None;
        true
    }
}

pub trait ResultFetcher {
    fn fetch<'a>(&'a self, instagram_id: &'a str) -> LocalBoxFuture<'a, Result<SpinOutcome, FetchError>>;
}

/// Suspension point between the start of the animation and the reveal.
pub trait SettleTimer {
    fn sleep(&self, duration_ms: u32) -> LocalBoxFuture<'_, ()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinAttempt {
    Settled(SpinOutcome),
    Ignored,
    Failed(FetchError),
}

type Observer = Box<dyn Fn(&SpinSession)>;

/// Drives fetch, target computation, the settle timer and the reveal for a
/// single wheel view. Meant for a single-threaded event loop.
pub struct SpinSequencer<F, T> {
    layout: WheelLayout,
    fetcher: F,
    timer: T,
    settle_duration_ms: u32,
    session: RefCell<SpinSession>,
    observer: Option<Observer>,
}

impl<F: ResultFetcher, T: SettleTimer> SpinSequencer<F, T> {
    pub fn new(layout: WheelLayout, fetcher: F, timer: T) -> Self {
        Self {
            layout,
            fetcher,
            timer,
            settle_duration_ms: SPIN_DURATION_MS,
            session: RefCell::new(SpinSession::new()),
            observer: None,
        }
    }

    pub fn with_settle_duration(mut self, duration_ms: u32) -> Self {
        self.settle_duration_ms = duration_ms;
        self
    }

    /// Called with a snapshot after every phase change.
    pub fn with_observer(mut self, observer: impl Fn(&SpinSession) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn settle_duration_ms(&self) -> u32 {
        self.settle_duration_ms
    }

    pub fn session(&self) -> SpinSession {
        self.session.borrow().clone()
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.session.borrow().clone();
            observer(&snapshot);
        }
    }

    pub async fn spin(&self, instagram_id: &str) -> SpinAttempt {
        let trigger = self.session.borrow_mut().trigger();
        if trigger == TriggerOutcome::Ignored {
            log::debug!("Spin trigger ignored while {:?}", self.session.borrow().phase());
            return SpinAttempt::Ignored;
        }
        self.notify();

        let outcome = match self.fetcher.fetch(instagram_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Spin request failed: {}", e);
                self.session.borrow_mut().fail_request(e.to_string());
                self.notify();
                return SpinAttempt::Failed(e);
            }
        };

        let target = self.session.borrow_mut().receive_outcome(&self.layout, outcome.clone());
        let Some(target) = target else {
            return SpinAttempt::Ignored;
        };
        log::debug!(
            "Spinning to {} ({:?}) at {:.2}°",
            outcome.prize_id, target.resolution.kind, target.rotation
        );
        self.notify();

        // The reveal waits for the full animation even if the response was instant
        self.timer.sleep(self.settle_duration_ms).await;

        self.session.borrow_mut().settle();
        self.notify();
        SpinAttempt::Settled(outcome)
    }

    pub fn dismiss(&self) -> bool {
        let dismissed = self.session.borrow_mut().dismiss();
        if dismissed {
            self.notify();
        }
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_wheel_game::{AngularShare, SegmentSpec};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use futures::FutureExt;
    use std::cell::Cell;
    use std::rc::Rc;

    fn layout() -> WheelLayout {
        WheelLayout::new(vec![
            SegmentSpec::new("A", AngularShare::Percent(50.0)),
            SegmentSpec::new("B", AngularShare::Percent(30.0)),
            SegmentSpec::new("C", AngularShare::Percent(20.0)),
        ])
        .unwrap()
    }

    fn outcome(id: &str) -> SpinOutcome {
        SpinOutcome {
            prize_id: id.to_string(),
            display_name: format!("Prize {}", id),
        }
    }

    struct StaticFetcher {
        response: Result<SpinOutcome, FetchError>,
        calls: Cell<usize>,
    }

    impl StaticFetcher {
        fn new(response: Result<SpinOutcome, FetchError>) -> Self {
            Self { response, calls: Cell::new(0) }
        }
    }

    impl ResultFetcher for StaticFetcher {
        fn fetch<'a>(&'a self, _instagram_id: &'a str) -> LocalBoxFuture<'a, Result<SpinOutcome, FetchError>> {
            self.calls.set(self.calls.get() + 1);
            let response = self.response.clone();
            async move { response }.boxed_local()
        }
    }

    struct InstantTimer;

    impl SettleTimer for InstantTimer {
        fn sleep(&self, _duration_ms: u32) -> LocalBoxFuture<'_, ()> {
            async {}.boxed_local()
        }
    }

    #[derive(Clone, Default)]
    struct ManualTimer {
        sender: Rc<RefCell<Option<oneshot::Sender<()>>>>,
    }

    impl ManualTimer {
        fn fire(&self) {
            if let Some(sender) = self.sender.borrow_mut().take() {
                let _ = sender.send(());
            }
        }
    }

    impl SettleTimer for ManualTimer {
        fn sleep(&self, _duration_ms: u32) -> LocalBoxFuture<'_, ()> {
            let (tx, rx) = oneshot::channel();
            *self.sender.borrow_mut() = Some(tx);
            async move {
                let _ = rx.await;
            }
            .boxed_local()
        }
    }

    #[test]
    fn test_trigger_only_from_idle() {
        let mut session = SpinSession::new();
        assert_eq!(session.trigger(), TriggerOutcome::Started);
        assert_eq!(session.phase(), Phase::Requesting);

        let before = session.clone();
        assert_eq!(session.trigger(), TriggerOutcome::Ignored);
        assert_eq!(session, before);

        session.receive_outcome(&layout(), outcome("A"));
        let before = session.clone();
        assert_eq!(session.trigger(), TriggerOutcome::Ignored);
        assert_eq!(session, before);

        assert!(session.settle());
        assert_eq!(session.phase(), Phase::Settled);
        let before = session.clone();
        assert_eq!(session.trigger(), TriggerOutcome::Ignored);
        assert_eq!(session, before);
        assert_eq!(session.revealed_outcome().map(|o| o.prize_id.as_str()), Some("A"));
    }

    #[test]
    fn test_fetch_failure_returns_to_idle_without_outcome() {
        let mut session = SpinSession::with_rotation(90.0);
        session.trigger();
        assert!(session.fail_request("Network error"));

        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.pending_outcome().is_none());
        assert!(session.target_rotation().is_none());
        assert_eq!(session.current_rotation(), 90.0);
        assert_eq!(session.last_error(), Some("Network error"));
    }

    #[test]
    fn test_outcome_hidden_until_settled() {
        let mut session = SpinSession::new();
        session.trigger();
        let target = session.receive_outcome(&layout(), outcome("B")).unwrap();

        assert_eq!(session.phase(), Phase::Animating);
        assert!(session.revealed_outcome().is_none());
        assert_eq!(session.current_rotation(), 0.0);

        assert!(session.settle());
        assert_eq!(session.revealed_outcome(), Some(&outcome("B")));
        assert_eq!(session.current_rotation(), target.rotation);
    }

    #[test]
    fn test_transitions_out_of_order_are_rejected() {
        let mut session = SpinSession::new();
        assert!(!session.settle());
        assert!(!session.dismiss());
        assert!(!session.fail_request("late"));
        assert!(session.receive_outcome(&layout(), outcome("A")).is_none());
        assert_eq!(session, SpinSession::new());
    }

    #[test]
    fn test_dismiss_keeps_rotation() {
        let mut session = SpinSession::new();
        session.trigger();
        session.receive_outcome(&layout(), outcome("C"));
        session.settle();
        let resting = session.current_rotation();

        assert!(session.dismiss());
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.pending_outcome().is_none());
        assert_eq!(session.current_rotation(), resting);
    }

    #[test]
    fn test_spin_end_to_end() {
        let phases = Rc::new(RefCell::new(Vec::new()));
        let recorded = phases.clone();
        let sequencer = SpinSequencer::new(layout(), StaticFetcher::new(Ok(outcome("C"))), InstantTimer)
            .with_observer(move |session| recorded.borrow_mut().push(session.phase()));

        let attempt = block_on(sequencer.spin("alice"));
        assert_eq!(attempt, SpinAttempt::Settled(outcome("C")));

        let session = sequencer.session();
        assert_eq!(session.phase(), Phase::Settled);
        assert_eq!(session.revealed_outcome().map(|o| o.prize_id.as_str()), Some("C"));
        assert_eq!(sequencer.layout().segment_at_rotation(session.current_rotation()).id, "C");
        assert_eq!(*phases.borrow(), vec![Phase::Requesting, Phase::Animating, Phase::Settled]);
    }

    #[test]
    fn test_failed_spin_leaves_no_partial_state() {
        let fetcher = StaticFetcher::new(Err(FetchError::Status { code: 500, message: None }));
        let sequencer = SpinSequencer::new(layout(), fetcher, InstantTimer);

        let attempt = block_on(sequencer.spin("alice"));
        assert!(matches!(attempt, SpinAttempt::Failed(FetchError::Status { code: 500, .. })));

        let session = sequencer.session();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.pending_outcome().is_none());
        assert_eq!(session.current_rotation(), 0.0);
        assert_eq!(session.last_error(), Some("Server error 500"));
    }

    #[test]
    fn test_consecutive_spins_continue_forward() {
        let sequencer = SpinSequencer::new(layout(), StaticFetcher::new(Ok(outcome("A"))), InstantTimer);

        block_on(sequencer.spin("alice"));
        let first = sequencer.session().current_rotation();
        assert!(sequencer.dismiss());

        block_on(sequencer.spin("bob"));
        let second = sequencer.session().current_rotation();
        assert!(second > first);
        assert_eq!(sequencer.layout().segment_at_rotation(second).id, "A");
    }

    #[test]
    fn test_reveal_waits_for_timer_and_drops_reentrant_trigger() {
        let timer = ManualTimer::default();
        let sequencer = Rc::new(SpinSequencer::new(
            layout(),
            StaticFetcher::new(Ok(outcome("B"))),
            timer.clone(),
        ));
        let result = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let sequencer = sequencer.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    *result.borrow_mut() = Some(sequencer.spin("alice").await);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        let animating = sequencer.session();
        assert_eq!(animating.phase(), Phase::Animating);
        assert!(animating.revealed_outcome().is_none());
        assert!(result.borrow().is_none());

        assert_eq!(block_on(sequencer.spin("bob")), SpinAttempt::Ignored);
        assert_eq!(sequencer.session(), animating);
        assert_eq!(sequencer.fetcher.calls.get(), 1);

        timer.fire();
        pool.run_until_stalled();
        assert_eq!(*result.borrow(), Some(SpinAttempt::Settled(outcome("B"))));
        assert_eq!(sequencer.session().phase(), Phase::Settled);
    }
}
