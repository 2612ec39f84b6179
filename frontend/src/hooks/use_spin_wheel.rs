use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::spin_wheel::{Segment, SpinResult, SpinWheel, Tick};
use yew::prelude::*;

use crate::config::now_ms;

type WheelCell = Rc<RefCell<Option<SpinWheel>>>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// What a wheel component needs to render and drive one [`SpinWheel`].
#[derive(Clone, PartialEq)]
pub struct SpinWheelHandle {
    pub segments: Vec<Segment>,
    pub angle: f64,
    pub is_spinning: bool,
    pub result: Option<SpinResult>,
    pub spin: Callback<()>,
}

#[derive(Clone)]
struct Setters {
    angle: UseStateHandle<f64>,
    is_spinning: UseStateHandle<bool>,
    result: UseStateHandle<Option<SpinResult>>,
}

// Registers one frame callback; it ticks the engine and re-registers itself
// until the spin finishes.
fn schedule_frame(wheel: WheelCell, frame: FrameSlot, setters: Setters) {
    let slot = frame.clone();
    let handle = request_animation_frame(move |timestamp| {
        let tick = match wheel.borrow_mut().as_mut() {
            Some(engine) => engine.tick(timestamp),
            None => Tick::Idle,
        };

        match tick {
            Tick::Frame { angle } => {
                setters.angle.set(angle);
                schedule_frame(wheel, frame, setters);
            }
            Tick::Finished(result) => {
                let angle = wheel.borrow().as_ref().map_or(result.final_angle, SpinWheel::angle);
                setters.angle.set(angle);
                setters.is_spinning.set(false);
                setters.result.set(Some(result));
                frame.borrow_mut().take();
            }
            Tick::Idle => {
                setters.is_spinning.set(false);
                frame.borrow_mut().take();
            }
        }
    });
    *slot.borrow_mut() = Some(handle);
}

#[hook]
pub fn use_spin_wheel(segments: Vec<Segment>) -> SpinWheelHandle {
    let wheel: WheelCell = use_mut_ref(move || match SpinWheel::new(segments) {
        Ok(engine) => Some(engine),
        Err(err) => {
            log::error!("wheel disabled: {}", err);
            None
        }
    });
    let frame: FrameSlot = use_mut_ref(|| None);

    let angle = use_state(|| 0.0);
    let is_spinning = use_state(|| false);
    let result = use_state(|| None::<SpinResult>);

    // Release the frame registration and stop the engine on unmount.
    {
        let wheel = wheel.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
                if let Some(engine) = wheel.borrow_mut().as_mut() {
                    engine.cancel();
                }
            }
        });
    }

    let spin = {
        let wheel = wheel.clone();
        let frame = frame.clone();
        let setters = Setters {
            angle: angle.clone(),
            is_spinning: is_spinning.clone(),
            result: result.clone(),
        };
        Callback::from(move |_| {
            let Some(now) = now_ms() else {
                log::warn!("performance clock unavailable, cannot spin");
                return;
            };
            let started = wheel
                .borrow_mut()
                .as_mut()
                .map_or(false, |engine| engine.spin(&mut rand::thread_rng(), now));
            if !started {
                return;
            }

            setters.is_spinning.set(true);
            setters.result.set(None);
            schedule_frame(wheel.clone(), frame.clone(), setters.clone());
        })
    };

    let segments = wheel
        .borrow()
        .as_ref()
        .map(|engine| engine.segments().to_vec())
        .unwrap_or_default();

    SpinWheelHandle {
        segments,
        angle: *angle,
        is_spinning: *is_spinning,
        result: (*result).clone(),
        spin,
    }
}
