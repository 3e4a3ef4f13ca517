use std::sync::Arc;

use tracing::warn;

/// A view that redraws itself from the coordinator's accessors.
pub trait BookingObserver: Send + Sync {
    fn update(&self);
}

/// The single place that can show a message and, when asked, collect a
/// yes/no answer from the user. Blocks until the user has answered.
pub trait ConfirmationPrompt: Send + Sync {
    /// Returns the user's answer when `requires_confirmation` is set.
    /// Informational messages return a value the caller ignores.
    fn message(&self, text: &str, requires_confirmation: bool) -> bool;
}

/// Fan-out of change notifications plus the designated prompt.
#[derive(Default)]
pub struct Notifier {
    observers: Vec<Arc<dyn BookingObserver>>,
    prompt: Option<Arc<dyn ConfirmationPrompt>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Arc<dyn BookingObserver>) {
        self.observers.push(observer);
    }

    pub fn set_prompt(&mut self, prompt: Arc<dyn ConfirmationPrompt>) {
        self.prompt = Some(prompt);
    }

    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Calls `update` on every observer in registration order.
    pub fn notify(&self) {
        for observer in &self.observers {
            observer.update();
        }
    }

    /// Ask the user a yes/no question. Declines when nobody can answer.
    pub fn confirm(&self, text: &str) -> bool {
        match &self.prompt {
            Some(prompt) => prompt.message(text, true),
            None => {
                warn!("No confirmation prompt registered, declining: {}", text);
                false
            }
        }
    }

    pub fn inform(&self, text: &str) {
        match &self.prompt {
            Some(prompt) => {
                prompt.message(text, false);
            }
            None => warn!("No confirmation prompt registered, dropping message: {}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl BookingObserver for Counter {
        fn update(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Scripted {
        answer: bool,
        seen: Mutex<Vec<(String, bool)>>,
    }

    impl ConfirmationPrompt for Scripted {
        fn message(&self, text: &str, requires_confirmation: bool) -> bool {
            self.seen.lock().unwrap().push((text.to_string(), requires_confirmation));
            self.answer
        }
    }

    #[test]
    fn test_notify_reaches_every_observer() {
        let first = Arc::new(Counter::default());
        let second = Arc::new(Counter::default());
        let mut notifier = Notifier::new();
        notifier.add_observer(first.clone());
        notifier.add_observer(second.clone());

        notifier.notify();
        notifier.notify();

        assert_eq!(notifier.observer_count(), 2);
        assert_eq!(first.0.load(Ordering::SeqCst), 2);
        assert_eq!(second.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_confirm_and_inform_go_to_the_prompt() {
        let prompt = Arc::new(Scripted {
            answer: true,
            seen: Mutex::new(Vec::new()),
        });
        let mut notifier = Notifier::new();
        notifier.set_prompt(prompt.clone());

        assert!(notifier.confirm("Are you sure?"));
        notifier.inform("Double booking!");

        let seen = prompt.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("Are you sure?".to_string(), true),
                ("Double booking!".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_without_prompt_confirmation_is_declined() {
        let notifier = Notifier::new();
        assert!(!notifier.has_prompt());
        assert!(!notifier.confirm("Ok to overfill table?"));
        notifier.inform("Arrival already recorded");
    }
}
