//! Per-frame keyboard dispatch.

use linebox_engine::input::Key;

use crate::command::apply_key;
use crate::config::Speeds;
use crate::transform::TransformState;

/// Keys polled each frame, in the order their effects are applied.
pub const DISPATCH_ORDER: [Key; 12] = [
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::W,
    Key::S,
    Key::A,
    Key::D,
    Key::R,
    Key::G,
    Key::B,
    Key::Space,
];

/// Applies one command per held key, level-triggered: a key held across
/// frames applies on every frame.
///
/// `is_down` is queried once per key in [`DISPATCH_ORDER`].
pub fn dispatch<F>(state: TransformState, dt: f32, speeds: &Speeds, is_down: F) -> TransformState
where
    F: Fn(Key) -> bool,
{
    DISPATCH_ORDER
        .into_iter()
        .filter(|key| is_down(*key))
        .fold(state, |s, key| {
            log::info!("keyboard input:\t{key}");
            apply_key(s, key, dt, speeds)
        })
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec4};

    use super::*;
    use crate::command::{apply, ColorChoice, Command, RotateDir, TranslateDir};
    use linebox_engine::coords::Viewport;
    use linebox_engine::input::{InputEvent, InputState, KeyState};

    fn start() -> TransformState {
        TransformState::new(Viewport::from_physical(1280, 720))
    }

    fn held(keys: &[Key]) -> impl Fn(Key) -> bool + '_ {
        move |k| keys.contains(&k)
    }

    #[test]
    fn nothing_held_changes_nothing() {
        let s = dispatch(start(), 1.0, &Speeds::default(), |_| false);
        assert_eq!(s, start());
    }

    #[test]
    fn every_bound_key_is_polled() {
        let polled = std::cell::RefCell::new(Vec::new());
        dispatch(start(), 0.0, &Speeds::default(), |k| {
            polled.borrow_mut().push(k);
            false
        });
        assert_eq!(polled.into_inner(), DISPATCH_ORDER.to_vec());
    }

    #[test]
    fn held_key_reapplies_every_frame() {
        let speeds = Speeds::default();
        let keys = [Key::D];
        let mut s = start();
        for _ in 0..10 {
            s = dispatch(s, 0.1, &speeds, held(&keys));
        }
        // 10 frames * 0.1 s * 200 px/s
        assert!(s.model.w_axis.abs_diff_eq(Vec4::new(840.0, 360.0, 0.0, 1.0), 1e-3));
    }

    #[test]
    fn simultaneous_keys_apply_in_fixed_order() {
        let speeds = Speeds::default();
        // Held in "reverse" order; dispatch still rotates (Left) before translating (W).
        let keys = [Key::W, Key::ArrowLeft];
        let s = dispatch(start(), 1.0, &speeds, held(&keys));

        let expected = [
            Command::Rotate(RotateDir::CounterClockwise),
            Command::Translate(TranslateDir::Up),
        ]
        .into_iter()
        .fold(start(), |s, c| apply(s, c, 1.0, &speeds));
        assert!(s.model.abs_diff_eq(expected.model, 1e-3));

        // Rotated first, so local +Y now points along screen -X.
        assert!(s.model.w_axis.abs_diff_eq(Vec4::new(440.0, 360.0, 0.0, 1.0), 1e-3));
    }

    #[test]
    fn later_color_key_wins() {
        let keys = [Key::Space, Key::R, Key::B];
        let s = dispatch(start(), 0.016, &Speeds::default(), held(&keys));
        // Order is R, G, B, Space, so Space is applied last.
        assert_eq!(s.color, ColorChoice::White.rgba());

        let keys = [Key::R, Key::G];
        let s = dispatch(start(), 0.016, &Speeds::default(), held(&keys));
        assert_eq!(s.color, ColorChoice::Green.rgba());
    }

    #[test]
    fn pressing_r_changes_only_color() {
        let keys = [Key::R];
        let s = dispatch(start(), 1.0, &Speeds::default(), held(&keys));
        assert_eq!(s.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.model, start().model);
        assert_eq!(s.projection, start().projection);
    }

    #[test]
    fn unbound_keys_are_never_polled_into_effects() {
        let keys = [Key::Q, Key::Escape];
        let s = dispatch(start(), 1.0, &Speeds::default(), held(&keys));
        assert_eq!(s, start());
    }

    #[test]
    fn drives_from_engine_input_state() {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Key {
            key: Key::ArrowLeft,
            state: KeyState::Pressed,
        });

        let s = dispatch(start(), 1.0, &Speeds::default(), |k| input.key_down(k));
        let expected = start().model * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert!(s.model.abs_diff_eq(expected, 1e-5));
    }
}
