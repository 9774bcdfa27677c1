use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

/// Ease-out curve used for the wheel: fast start, long deceleration.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule_frame(
    slot: FrameSlot,
    rotation: UseStateHandle<f64>,
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
) {
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        let started_at = started_at.unwrap_or(timestamp);
        let progress = if duration_ms > 0.0 {
            (timestamp - started_at) / duration_ms
        } else {
            1.0
        };

        rotation.set(from + (to - from) * ease_out(progress));

        if progress < 1.0 {
            schedule_frame(next_slot, rotation, from, to, duration_ms, Some(started_at));
        }
    });
    *slot.borrow_mut() = Some(frame);
}

/// Rotation to draw for the wheel. Eases from `resting` to `target` over
/// `duration_ms` while a target is set, and snaps to `resting` otherwise.
#[hook]
pub fn use_spin_animation(resting: f64, target: Option<f64>, duration_ms: u32) -> f64 {
    let rotation = use_state(|| resting);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let rotation = rotation.clone();
        use_effect_with((resting, target), move |(resting, target)| {
            match *target {
                Some(target) => {
                    schedule_frame(frame.clone(), rotation, *resting, target, f64::from(duration_ms), None);
                }
                None => {
                    frame.borrow_mut().take();
                    rotation.set(*resting);
                }
            }

            // Dropping the handle cancels a pending frame
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    *rotation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.9);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[1] >= pair[0]));
    }
}
