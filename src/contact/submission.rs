//! Simulated delivery of the contact form.
//!
//! There is no backend yet, so "sending" is a fixed-delay no-op stage:
//! wait for `latency`, show the confirmation, wait for `confirmation`,
//! then clear the form. Timers go through [`Scheduler`] so tests can run
//! the whole cycle without waiting.

use super::form::ContactForm;
use crate::config::SiteConfig;
use crate::error::SiteError;
use std::time::Duration;

/// Defers a task by a fixed delay.
pub trait Scheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Timers backed by the browser's `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        leptos::set_timeout(task, delay);
    }
}

/// Runs every task immediately, ignoring the delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn after(&self, _delay: Duration, task: Box<dyn FnOnce()>) {
        task();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Submitted,
}

/// Transitions produced by the delivery stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    Delivered,
    Reset,
}

/// Contact page state: the form being edited and where its submission is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    phase: SubmissionPhase,
}

impl ContactState {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SubmissionPhase::Loading
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// The form worth keeping as a local draft: an idle form with something
    /// typed in. Once a submission starts there is no draft, so a message
    /// that was already sent is never restored.
    pub fn draft_to_persist(&self) -> Option<&ContactForm> {
        (self.phase == SubmissionPhase::Idle && !self.form.is_blank()).then_some(&self.form)
    }

    /// Validate and move to `Loading`.
    ///
    /// Only an idle form can be submitted; on error nothing changes.
    pub fn begin_submit(&mut self) -> Result<(), SiteError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(SiteError::SubmissionInFlight);
        }
        self.form.validate()?;
        self.phase = SubmissionPhase::Loading;
        Ok(())
    }

    /// Apply a step from the delivery stage. Steps that don't match the
    /// current phase are ignored.
    pub fn apply(&mut self, step: SubmitStep) {
        match (self.phase, step) {
            (SubmissionPhase::Loading, SubmitStep::Delivered) => {
                self.phase = SubmissionPhase::Submitted;
            }
            (SubmissionPhase::Submitted, SubmitStep::Reset) => {
                *self = Self::default();
            }
            _ => {}
        }
    }
}

/// The fixed-delay stage standing in for a real network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelivery {
    /// Pretend round-trip before the message counts as sent
    pub latency: Duration,
    /// How long the confirmation stays up before the form resets
    pub confirmation: Duration,
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl SimulatedDelivery {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            latency: config.contact_latency(),
            confirmation: config.contact_confirmation(),
        }
    }

    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            confirmation: Duration::ZERO,
        }
    }

    /// Schedule `Delivered` after `latency`, then `Reset` after a further
    /// `confirmation`. Cannot fail and cannot be cancelled.
    pub fn run<S, F>(self, scheduler: &S, apply: F)
    where
        S: Scheduler + Clone + 'static,
        F: Fn(SubmitStep) + 'static,
    {
        let next = scheduler.clone();
        let confirmation = self.confirmation;
        scheduler.after(
            self.latency,
            Box::new(move || {
                apply(SubmitStep::Delivered);
                next.after(confirmation, Box::new(move || apply(SubmitStep::Reset)));
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::InquiryType;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Sam Rivera".to_string(),
            email: "sam@example.org".to_string(),
            subject: "Press kit".to_string(),
            message: "Could you send over logos and screenshots?".to_string(),
            inquiry_type: InquiryType::Press,
        }
    }

    /// Queues tasks so a test can step through them one at a time.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Rc<RefCell<VecDeque<(Duration, Box<dyn FnOnce()>)>>>,
    }

    impl Scheduler for ManualScheduler {
        fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            self.queue.borrow_mut().push_back((delay, task));
        }
    }

    impl ManualScheduler {
        fn run_next(&self) -> Option<Duration> {
            let (delay, task) = self.queue.borrow_mut().pop_front()?;
            task();
            Some(delay)
        }
    }

    #[test]
    fn test_full_cycle_steps_through_phases() {
        let state = Rc::new(RefCell::new(ContactState::new(filled_form())));
        let scheduler = ManualScheduler::default();
        let delivery = SimulatedDelivery {
            latency: Duration::from_millis(1500),
            confirmation: Duration::from_millis(3000),
        };

        state.borrow_mut().begin_submit().unwrap();
        assert_eq!(state.borrow().phase(), SubmissionPhase::Loading);

        let target = Rc::clone(&state);
        delivery.run(&scheduler, move |step| target.borrow_mut().apply(step));
        // Nothing happens until the timer fires
        assert_eq!(state.borrow().phase(), SubmissionPhase::Loading);

        assert_eq!(scheduler.run_next(), Some(Duration::from_millis(1500)));
        assert_eq!(state.borrow().phase(), SubmissionPhase::Submitted);
        assert_eq!(state.borrow().form, filled_form());

        assert_eq!(scheduler.run_next(), Some(Duration::from_millis(3000)));
        assert_eq!(state.borrow().phase(), SubmissionPhase::Idle);
        assert_eq!(state.borrow().form, ContactForm::default());

        assert_eq!(scheduler.run_next(), None);
    }

    #[test]
    fn test_instant_delivery_resets_form() {
        let state = Rc::new(RefCell::new(ContactState::new(filled_form())));
        let seen = Rc::new(RefCell::new(Vec::new()));

        state.borrow_mut().begin_submit().unwrap();
        seen.borrow_mut().push(state.borrow().phase());

        let target = Rc::clone(&state);
        let log = Rc::clone(&seen);
        SimulatedDelivery::instant().run(&ImmediateScheduler, move |step| {
            target.borrow_mut().apply(step);
            log.borrow_mut().push(target.borrow().phase());
        });

        assert_eq!(
            *seen.borrow(),
            vec![
                SubmissionPhase::Loading,
                SubmissionPhase::Submitted,
                SubmissionPhase::Idle
            ]
        );
        assert!(state.borrow().form.is_blank());
        assert!(!state.borrow().is_submitted());
    }

    #[test]
    fn test_invalid_form_does_not_start() {
        let mut state = ContactState::new(ContactForm {
            message: String::new(),
            ..filled_form()
        });
        assert!(matches!(
            state.begin_submit(),
            Err(SiteError::MissingField("Message"))
        ));
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut state = ContactState::new(filled_form());
        state.begin_submit().unwrap();
        assert!(matches!(state.begin_submit(), Err(SiteError::SubmissionInFlight)));
        assert!(state.is_loading());

        state.apply(SubmitStep::Delivered);
        assert!(matches!(state.begin_submit(), Err(SiteError::SubmissionInFlight)));
        assert!(state.is_submitted());
    }

    #[test]
    fn test_out_of_order_steps_ignored() {
        let mut state = ContactState::new(filled_form());
        state.apply(SubmitStep::Delivered);
        state.apply(SubmitStep::Reset);
        assert_eq!(state, ContactState::new(filled_form()));

        state.begin_submit().unwrap();
        state.apply(SubmitStep::Reset);
        assert!(state.is_loading());
    }

    #[test]
    fn test_draft_kept_only_while_idle() {
        let mut state = ContactState::new(filled_form());
        assert_eq!(state.draft_to_persist(), Some(&filled_form()));

        state.begin_submit().unwrap();
        assert_eq!(state.draft_to_persist(), None);

        state.apply(SubmitStep::Delivered);
        assert_eq!(state.draft_to_persist(), None);

        state.apply(SubmitStep::Reset);
        assert_eq!(state.draft_to_persist(), None);
    }

    #[test]
    fn test_blank_form_has_no_draft() {
        assert_eq!(ContactState::default().draft_to_persist(), None);
        // A changed inquiry type alone is worth keeping
        let state = ContactState::new(ContactForm {
            inquiry_type: InquiryType::Press,
            ..Default::default()
        });
        assert!(state.draft_to_persist().is_some());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..filled_form()
        };
        let mut state = ContactState::new(form.clone());
        assert!(state.begin_submit().is_err());
        assert_eq!(state.draft_to_persist(), Some(&form));
    }

    #[test]
    fn test_default_timing_comes_from_config() {
        let delivery = SimulatedDelivery::default();
        assert_eq!(delivery.latency, Duration::from_millis(1500));
        assert_eq!(delivery.confirmation, Duration::from_millis(3000));
        assert_eq!(SimulatedDelivery::instant().latency, Duration::ZERO);
    }
}
