use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set once the user hits Ctrl-C.
///
/// Blocking calls aren't cut short; callers check the flag once they return.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupt = Self::default();
        let flag = Arc::clone(&interrupt.0);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
        Ok(interrupt)
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let interrupt = Interrupt::default();
        let handle = interrupt.clone();
        assert!(!interrupt.is_set());

        handle.trigger();
        assert!(interrupt.is_set());
    }
}
