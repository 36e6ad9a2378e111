use leptos::prelude::*;

/// Lifecycle of a one-shot entrance. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Hidden,
    /// Visible, waiting for the delay to run out.
    Pending,
    Revealed,
}

/// What the caller has to do after feeding an event to the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealAction {
    None,
    /// Start a timer for this many seconds, then call `on_delay_elapsed`.
    Schedule(f64),
    /// Switch the element to its final pose now.
    Reveal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimator {
    state: RevealState,
    delay: f64,
}

impl RevealAnimator {
    pub fn new(delay: f64) -> Self {
        Self {
            state: RevealState::Hidden,
            delay: delay.max(0.0),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// The tracked element entered the viewport (or was mounted, for mount-triggered entrances).
    pub fn on_visible(&mut self) -> RevealAction {
        if self.state != RevealState::Hidden {
            return RevealAction::None;
        }
        if self.delay == 0.0 {
            self.state = RevealState::Revealed;
            RevealAction::Reveal
        } else {
            self.state = RevealState::Pending;
            RevealAction::Schedule(self.delay)
        }
    }

    /// The timer started by `Schedule` fired. Ignored unless a reveal is pending.
    pub fn on_delay_elapsed(&mut self) -> RevealAction {
        if self.state != RevealState::Pending {
            return RevealAction::None;
        }
        self.state = RevealState::Revealed;
        RevealAction::Reveal
    }
}

/// Hands an expired delay to an animator owned by a component.
///
/// `None` once the owning component has unmounted.
pub fn deliver_delay(animator: StoredValue<RevealAnimator>) -> Option<RevealAction> {
    animator.try_update_value(|a| a.on_delay_elapsed())
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_reveal_without_delay() {
        let mut anim = RevealAnimator::default();
        assert_eq!(anim.state, RevealState::Hidden);
        assert_eq!(anim.on_visible(), RevealAction::Reveal);
        assert!(anim.is_revealed());
    }

    #[test]
    fn test_delay_is_not_shortcut() {
        let mut anim = RevealAnimator::new(0.4);
        assert_eq!(anim.on_visible(), RevealAction::Schedule(0.4));
        assert_eq!(anim.state, RevealState::Pending);
        assert!(!anim.is_revealed());

        // seeing the element again must not skip the wait
        assert_eq!(anim.on_visible(), RevealAction::None);
        assert_eq!(anim.state, RevealState::Pending);

        assert_eq!(anim.on_delay_elapsed(), RevealAction::Reveal);
        assert!(anim.is_revealed());
    }

    #[test]
    fn test_timer_before_visibility_is_ignored() {
        let mut anim = RevealAnimator::new(0.2);
        assert_eq!(anim.on_delay_elapsed(), RevealAction::None);
        assert_eq!(anim.state, RevealState::Hidden);
        assert_eq!(anim.on_visible(), RevealAction::Schedule(0.2));
    }

    #[test]
    fn test_never_replays() {
        let mut anim = RevealAnimator::new(0.1);
        anim.on_visible();
        anim.on_delay_elapsed();
        assert!(anim.is_revealed());
        for _ in 0..3 {
            assert_eq!(anim.on_visible(), RevealAction::None);
            assert_eq!(anim.on_delay_elapsed(), RevealAction::None);
            assert!(anim.is_revealed());
        }
    }

    #[test]
    fn test_negative_delay_treated_as_zero() {
        let mut anim = RevealAnimator::new(-1.0);
        assert_eq!(anim.delay, 0.0);
        assert_eq!(anim.on_visible(), RevealAction::Reveal);
    }

    #[test]
    fn test_staggered_siblings_are_independent() {
        let mut cards = (0..4)
            .map(|i| RevealAnimator::new(i as f64 * 0.1))
            .collect::<Vec<_>>();
        let actions = cards.iter_mut().map(|c| c.on_visible()).collect::<Vec<_>>();
        assert_eq!(actions[0], RevealAction::Reveal);
        assert_eq!(actions[1], RevealAction::Schedule(0.1));
        assert_eq!(actions[3], RevealAction::Schedule(0.30000000000000004));
        cards[2].on_delay_elapsed();
        assert!(cards[2].is_revealed());
        assert!(!cards[1].is_revealed());
        assert!(!cards[3].is_revealed());
    }

    #[test]
    fn test_delay_reveals_while_mounted() {
        let owner = Owner::new();
        let animator = owner.with(|| StoredValue::new(RevealAnimator::new(0.4)));
        assert_eq!(
            animator.try_update_value(|a| a.on_visible()),
            Some(RevealAction::Schedule(0.4))
        );
        assert_eq!(deliver_delay(animator), Some(RevealAction::Reveal));
        assert!(animator.with_value(|a| a.is_revealed()));
    }

    #[test]
    fn test_delay_after_unmount_is_dropped() {
        let owner = Owner::new();
        let animator = owner.with(|| StoredValue::new(RevealAnimator::new(0.4)));
        assert_eq!(
            animator.try_update_value(|a| a.on_visible()),
            Some(RevealAction::Schedule(0.4))
        );

        owner.cleanup();

        let mut revealed = false;
        let action = deliver_delay(animator);
        if action == Some(RevealAction::Reveal) {
            revealed = true;
        }
        assert_eq!(action, None);
        assert!(!revealed);
        assert_eq!(animator.try_with_value(|a| a.is_revealed()), None);
    }
}
