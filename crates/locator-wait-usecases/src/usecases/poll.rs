//! Deadline-bounded polling loop.

use std::time::Duration;

use locator_wait_domain::WaitSettings;
use tracing::trace;

use crate::usecases::cancel::CancelToken;
use crate::usecases::ports::Clock;
use crate::usecases::ports::DriverError;
use crate::usecases::ports::Sleeper;

#[derive(Debug)]
pub enum PollOutcome<T> {
    Ready {
        value: T,
        attempts: u32,
        elapsed: Duration,
    },
    TimedOut {
        attempts: u32,
        elapsed: Duration,
        last_error: Option<DriverError>,
    },
    Cancelled {
        attempts: u32,
        elapsed: Duration,
    },
}

impl<T> PollOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PollOutcome::Ready { .. })
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            PollOutcome::Ready { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            PollOutcome::Ready { attempts, .. }
            | PollOutcome::TimedOut { attempts, .. }
            | PollOutcome::Cancelled { attempts, .. } => *attempts,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            PollOutcome::Ready { elapsed, .. }
            | PollOutcome::TimedOut { elapsed, .. }
            | PollOutcome::Cancelled { elapsed, .. } => *elapsed,
        }
    }
}

/// Runs a probe until it yields a value, the window closes, or the poll is
/// cancelled.
///
/// The probe runs at least once and always once more at the deadline; between
/// probes the loop sleeps `min(poll_interval, remaining)`, waking early if the
/// poll is cancelled. Transient driver errors are remembered and retried; any
/// other driver error ends the poll.
pub struct Poller<'a> {
    clock: &'a dyn Clock,
    sleeper: &'a dyn Sleeper,
    settings: WaitSettings,
    cancel: Option<&'a CancelToken>,
}

impl<'a> Poller<'a> {
    pub fn new(clock: &'a dyn Clock, sleeper: &'a dyn Sleeper, settings: WaitSettings) -> Self {
        Self {
            clock,
            sleeper,
            settings,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn run<T, F>(&self, mut probe: F) -> Result<PollOutcome<T>, DriverError>
    where
        F: FnMut() -> Result<Option<T>, DriverError>,
    {
        let start = self.clock.now();
        let timeout = self.settings.timeout();
        let mut attempts = 0u32;
        let mut last_error = None;

        loop {
            if self.cancel.is_some_and(CancelToken::is_cancelled) {
                return Ok(PollOutcome::Cancelled {
                    attempts,
                    elapsed: self.clock.elapsed(start),
                });
            }

            attempts += 1;
            match probe() {
                Ok(Some(value)) => {
                    return Ok(PollOutcome::Ready {
                        value,
                        attempts,
                        elapsed: self.clock.elapsed(start),
                    });
                }
                Ok(None) => {}
                Err(err) if err.is_transient() => {
                    trace!(attempt = attempts, error = %err, "Probe missed");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }

            let elapsed = self.clock.elapsed(start);
            if elapsed >= timeout {
                return Ok(PollOutcome::TimedOut {
                    attempts,
                    elapsed,
                    last_error,
                });
            }

            let pause = self.settings.poll_interval().min(timeout - elapsed);
            match self.cancel {
                Some(cancel) => self.sleeper.sleep_cancellable(pause, cancel),
                None => self.sleeper.sleep(pause),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeTime;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    fn settings(timeout_ms: u64, interval_ms: u64) -> WaitSettings {
        WaitSettings::try_new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(interval_ms),
        )
        .unwrap()
    }

    #[test]
    fn test_ready_on_first_probe_does_not_sleep() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(4000, 500));

        let outcome = poller.run(|| Ok(Some(7))).unwrap();

        assert_eq!(outcome.attempts(), 1);
        assert_eq!(time.sleep_calls(), 0);
        assert_eq!(outcome.into_value(), Some(7));
    }

    #[test]
    fn test_ready_after_some_probes() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(4000, 500));
        let mut calls = 0;

        let outcome = poller
            .run(|| {
                calls += 1;
                Ok((calls == 3).then_some("found"))
            })
            .unwrap();

        assert!(outcome.is_ready());
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(outcome.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn test_times_out_after_full_window() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(4000, 500));

        let outcome = poller.run(|| Ok(None::<()>)).unwrap();

        assert!(matches!(outcome, PollOutcome::TimedOut { .. }));
        assert_eq!(outcome.attempts(), 9);
        assert_eq!(outcome.elapsed(), Duration::from_secs(4));
        assert_eq!(time.offset(), Duration::from_secs(4));
    }

    #[test]
    fn test_last_sleep_is_clamped_to_deadline() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(1200, 500));

        let outcome = poller.run(|| Ok(None::<()>)).unwrap();

        assert_eq!(outcome.attempts(), 4);
        assert_eq!(outcome.elapsed(), Duration::from_millis(1200));
    }

    #[test]
    fn test_zero_timeout_probes_once() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(0, 500));

        let outcome = poller.run(|| Ok(None::<()>)).unwrap();

        assert_eq!(outcome.attempts(), 1);
        assert_eq!(time.sleep_calls(), 0);
    }

    #[test]
    fn test_transient_errors_are_retried_and_kept() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(1000, 500));

        let outcome = poller
            .run(|| Err::<Option<()>, _>(DriverError::NoSuchElement("id=a".into())))
            .unwrap();

        match outcome {
            PollOutcome::TimedOut {
                attempts,
                last_error,
                ..
            } => {
                assert_eq!(attempts, 3);
                assert_eq!(last_error, Some(DriverError::NoSuchElement("id=a".into())));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_fatal_error_stops_polling() {
        let time = FakeTime::new();
        let poller = Poller::new(&time, &time, settings(4000, 500));
        let mut calls = 0;

        let result = poller.run(|| {
            calls += 1;
            Err::<Option<()>, _>(DriverError::Session("invalid session id".into()))
        });

        assert!(matches!(result, Err(DriverError::Session(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_cancelled_before_first_probe() {
        let time = FakeTime::new();
        let token = CancelToken::new();
        token.cancel();
        let poller = Poller::new(&time, &time, settings(4000, 500)).with_cancel(&token);

        let outcome = poller.run(|| Ok(Some(()))).unwrap();

        assert!(matches!(outcome, PollOutcome::Cancelled { attempts: 0, .. }));
    }

    struct CountingSleeper {
        time: FakeTime,
        plain: AtomicUsize,
        cancellable: AtomicUsize,
    }

    impl Sleeper for CountingSleeper {
        fn sleep(&self, duration: Duration) {
            self.plain.fetch_add(1, Ordering::SeqCst);
            self.time.sleep(duration);
        }

        fn sleep_cancellable(&self, duration: Duration, _cancel: &CancelToken) {
            self.cancellable.fetch_add(1, Ordering::SeqCst);
            self.time.sleep(duration);
        }
    }

    #[test]
    fn test_pauses_are_cancellable_when_a_token_is_attached() {
        let sleeper = CountingSleeper {
            time: FakeTime::new(),
            plain: AtomicUsize::new(0),
            cancellable: AtomicUsize::new(0),
        };
        let token = CancelToken::new();

        Poller::new(&sleeper.time, &sleeper, settings(1000, 500))
            .with_cancel(&token)
            .run(|| Ok(None::<()>))
            .unwrap();
        assert_eq!(sleeper.cancellable.load(Ordering::SeqCst), 2);
        assert_eq!(sleeper.plain.load(Ordering::SeqCst), 0);

        Poller::new(&sleeper.time, &sleeper, settings(1000, 500))
            .run(|| Ok(None::<()>))
            .unwrap();
        assert_eq!(sleeper.plain.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cancel_stops_at_next_poll_boundary() {
        let time = FakeTime::new();
        let token = CancelToken::new();
        let poller = Poller::new(&time, &time, settings(4000, 500)).with_cancel(&token);
        let mut calls = 0;

        let outcome = poller
            .run(|| {
                calls += 1;
                if calls == 2 {
                    token.cancel();
                }
                Ok(None::<()>)
            })
            .unwrap();

        assert!(matches!(outcome, PollOutcome::Cancelled { attempts: 2, .. }));
    }
}
