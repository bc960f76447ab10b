//! Transform commands and the pure function that applies them.

use std::fmt;

use glam::{Mat4, Vec3, Vec4};

use linebox_engine::input::Key;

use crate::config::Speeds;
use crate::transform::TransformState;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RotateDir {
    CounterClockwise,
    Clockwise,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TranslateDir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScaleDir {
    Grow,
    Shrink,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorChoice {
    Red,
    Green,
    Blue,
    White,
}

impl ColorChoice {
    pub fn rgba(self) -> Vec4 {
        match self {
            ColorChoice::Red => Vec4::new(1.0, 0.0, 0.0, 1.0),
            ColorChoice::Green => Vec4::new(0.0, 1.0, 0.0, 1.0),
            ColorChoice::Blue => Vec4::new(0.0, 0.0, 1.0, 1.0),
            ColorChoice::White => Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// One transform to apply to the shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Rotate(RotateDir),
    Translate(TranslateDir),
    Scale(ScaleDir),
    Color(ColorChoice),
}

/// A key was handed to an operation that does not accept it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UnsupportedKey {
    pub key: Key,
    pub operation: &'static str,
}

impl fmt::Display for UnsupportedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid keyboard input {} for {}", self.key, self.operation)
    }
}

impl std::error::Error for UnsupportedKey {}

impl TryFrom<Key> for RotateDir {
    type Error = UnsupportedKey;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::ArrowLeft => Ok(RotateDir::CounterClockwise),
            Key::ArrowRight => Ok(RotateDir::Clockwise),
            key => Err(UnsupportedKey { key, operation: "rotate" }),
        }
    }
}

impl TryFrom<Key> for TranslateDir {
    type Error = UnsupportedKey;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::W => Ok(TranslateDir::Up),
            Key::S => Ok(TranslateDir::Down),
            Key::A => Ok(TranslateDir::Left),
            Key::D => Ok(TranslateDir::Right),
            key => Err(UnsupportedKey { key, operation: "translate" }),
        }
    }
}

impl TryFrom<Key> for ScaleDir {
    type Error = UnsupportedKey;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::ArrowUp => Ok(ScaleDir::Grow),
            Key::ArrowDown => Ok(ScaleDir::Shrink),
            key => Err(UnsupportedKey { key, operation: "scale" }),
        }
    }
}

impl TryFrom<Key> for ColorChoice {
    type Error = UnsupportedKey;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::R => Ok(ColorChoice::Red),
            Key::G => Ok(ColorChoice::Green),
            Key::B => Ok(ColorChoice::Blue),
            Key::Space => Ok(ColorChoice::White),
            key => Err(UnsupportedKey { key, operation: "color" }),
        }
    }
}

impl TryFrom<Key> for Command {
    type Error = UnsupportedKey;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::ArrowLeft | Key::ArrowRight => RotateDir::try_from(key).map(Command::Rotate),
            Key::W | Key::S | Key::A | Key::D => {
                TranslateDir::try_from(key).map(Command::Translate)
            }
            Key::ArrowUp | Key::ArrowDown => ScaleDir::try_from(key).map(Command::Scale),
            Key::R | Key::G | Key::B | Key::Space => ColorChoice::try_from(key).map(Command::Color),
            key => Err(UnsupportedKey { key, operation: "any transform" }),
        }
    }
}

/// Applies `cmd` for a frame lasting `dt` seconds and returns the new state.
pub fn apply(state: TransformState, cmd: Command, dt: f32, speeds: &Speeds) -> TransformState {
    let mut next = state;
    match cmd {
        Command::Rotate(dir) => {
            let mut degrees = speeds.rotation_deg_per_sec * dt;
            if dir == RotateDir::Clockwise {
                degrees = -degrees;
            }
            next.model = state.model * Mat4::from_rotation_z(degrees.to_radians());
        }

        Command::Translate(dir) => {
            let d = speeds.translation_px_per_sec * dt;
            let offset = match dir {
                TranslateDir::Up => Vec3::new(0.0, d, 0.0),
                TranslateDir::Down => Vec3::new(0.0, -d, 0.0),
                TranslateDir::Left => Vec3::new(-d, 0.0, 0.0),
                TranslateDir::Right => Vec3::new(d, 0.0, 0.0),
            };
            next.model = state.model * Mat4::from_translation(offset);
        }

        // 1 + k and 1 - k are not reciprocal; grow then shrink drifts smaller.
        Command::Scale(dir) => {
            let k = speeds.scale_per_sec * dt;
            let factor = match dir {
                ScaleDir::Grow => 1.0 + k,
                ScaleDir::Shrink => 1.0 - k,
            };
            next.model = state.model * Mat4::from_scale(Vec3::splat(factor));
        }

        Command::Color(choice) => {
            next.color = choice.rgba();
        }
    }
    next
}

/// Applies the command bound to `key`; an unbound key is logged and leaves
/// the state untouched.
pub fn apply_key(state: TransformState, key: Key, dt: f32, speeds: &Speeds) -> TransformState {
    match Command::try_from(key) {
        Ok(cmd) => apply(state, cmd, dt, speeds),
        Err(err) => {
            log::error!("{err}");
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use linebox_engine::coords::Viewport;

    const EPS: f32 = 1e-3;

    fn start() -> TransformState {
        TransformState::new(Viewport::from_physical(1280, 720))
    }

    fn run(state: TransformState, cmds: &[Command], dt: f32) -> TransformState {
        let speeds = Speeds::default();
        cmds.iter().fold(state, |s, c| apply(s, *c, dt, &speeds))
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn left_for_one_second_is_quarter_turn_ccw() {
        let s = run(start(), &[Command::Rotate(RotateDir::CounterClockwise)], 1.0);
        let expected = start().model * Mat4::from_rotation_z(FRAC_PI_2);
        assert!(s.model.abs_diff_eq(expected, 1e-5));

        // Local +X now points along screen +Y.
        let p = s.model * Vec4::new(50.0, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(640.0, 410.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn right_rotates_clockwise() {
        let s = run(start(), &[Command::Rotate(RotateDir::Clockwise)], 1.0);
        let p = s.model * Vec4::new(50.0, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(640.0, 310.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn left_then_right_cancels() {
        for dt in [0.0, 0.016, 0.25, 1.0, 3.7] {
            let s = run(
                start(),
                &[
                    Command::Rotate(RotateDir::CounterClockwise),
                    Command::Rotate(RotateDir::Clockwise),
                ],
                dt,
            );
            assert!(s.model.abs_diff_eq(start().model, EPS), "dt = {dt}");
        }
    }

    #[test]
    fn rotation_scales_with_frame_time() {
        // Two half-second frames equal one one-second frame.
        let ccw = Command::Rotate(RotateDir::CounterClockwise);
        let split = run(start(), &[ccw, ccw], 0.5);
        let whole = run(start(), &[ccw], 1.0);
        assert!(split.model.abs_diff_eq(whole.model, EPS));
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_directions() {
        let dt = 0.5; // 100 px
        let cases = [
            (TranslateDir::Up, Vec4::new(640.0, 460.0, 0.0, 1.0)),
            (TranslateDir::Down, Vec4::new(640.0, 260.0, 0.0, 1.0)),
            (TranslateDir::Left, Vec4::new(540.0, 360.0, 0.0, 1.0)),
            (TranslateDir::Right, Vec4::new(740.0, 360.0, 0.0, 1.0)),
        ];
        for (dir, expected) in cases {
            let s = run(start(), &[Command::Translate(dir)], dt);
            assert!(s.model.w_axis.abs_diff_eq(expected, EPS), "{dir:?}");
        }
    }

    #[test]
    fn translate_order_does_not_matter() {
        let up = Command::Translate(TranslateDir::Up);
        let right = Command::Translate(TranslateDir::Right);
        let a = run(start(), &[up, right], 0.1);
        let b = run(start(), &[right, up], 0.1);
        assert!(a.model.abs_diff_eq(b.model, EPS));
        assert!(a.model.w_axis.abs_diff_eq(Vec4::new(660.0, 380.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn translate_follows_current_rotation() {
        // Post-multiplication moves along the shape's own axes.
        let s = run(start(), &[Command::Rotate(RotateDir::CounterClockwise)], 1.0);
        let s = run(s, &[Command::Translate(TranslateDir::Right)], 0.5);
        assert!(s.model.w_axis.abs_diff_eq(Vec4::new(640.0, 460.0, 0.0, 1.0), EPS));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn grow_then_shrink_does_not_invert() {
        let s = run(
            start(),
            &[Command::Scale(ScaleDir::Grow), Command::Scale(ScaleDir::Shrink)],
            0.5,
        );
        // (1 + 0.5) * (1 - 0.5) = 0.75
        assert!((s.model.x_axis.x - 0.75).abs() < 1e-6);
        assert!((s.model.y_axis.y - 0.75).abs() < 1e-6);
        assert!((s.model.z_axis.z - 0.75).abs() < 1e-6);
        assert!(!s.model.abs_diff_eq(start().model, EPS));
    }

    #[test]
    fn shrink_can_pass_through_zero() {
        // No floor: dt = 2 gives factor -1, mirroring the shape.
        let s = run(start(), &[Command::Scale(ScaleDir::Shrink)], 2.0);
        assert!((s.model.x_axis.x + 1.0).abs() < 1e-6);
    }

    #[test]
    fn scale_keeps_position() {
        let s = run(start(), &[Command::Scale(ScaleDir::Grow)], 0.3);
        assert_eq!(s.model.w_axis, start().model.w_axis);
    }

    // ── color ─────────────────────────────────────────────────────────────

    #[test]
    fn red_for_one_second_changes_only_color() {
        let before = start();
        let after = run(before, &[Command::Color(ColorChoice::Red)], 1.0);
        assert_eq!(after.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(after.model, before.model);
        assert_eq!(after.view, before.view);
        assert_eq!(after.projection, before.projection);
    }

    #[test]
    fn color_is_idempotent() {
        for choice in [ColorChoice::Red, ColorChoice::Green, ColorChoice::Blue, ColorChoice::White] {
            let once = run(start(), &[Command::Color(choice)], 0.016);
            let twice = run(once, &[Command::Color(choice)], 0.016);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn space_restores_white() {
        let s = run(
            start(),
            &[Command::Color(ColorChoice::Blue), Command::Color(ColorChoice::White)],
            0.0,
        );
        assert_eq!(s.color, Vec4::ONE);
    }

    // ── key mapping ───────────────────────────────────────────────────────

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::try_from(Key::ArrowUp), Ok(Command::Scale(ScaleDir::Grow)));
        assert_eq!(
            Command::try_from(Key::ArrowRight),
            Ok(Command::Rotate(RotateDir::Clockwise))
        );
        assert_eq!(Command::try_from(Key::A), Ok(Command::Translate(TranslateDir::Left)));
        assert_eq!(Command::try_from(Key::Space), Ok(Command::Color(ColorChoice::White)));
    }

    #[test]
    fn operations_reject_foreign_keys() {
        assert!(RotateDir::try_from(Key::W).is_err());
        assert!(TranslateDir::try_from(Key::ArrowLeft).is_err());
        assert!(ScaleDir::try_from(Key::R).is_err());
        let err = ColorChoice::try_from(Key::ArrowDown).unwrap_err();
        assert_eq!(err.operation, "color");
        assert_eq!(err.to_string(), "invalid keyboard input DOWN for color");
    }

    #[test]
    fn unbound_key_leaves_state_unchanged() {
        let before = start();
        let after = apply_key(before, Key::Q, 1.0, &Speeds::default());
        assert_eq!(after, before);
    }
}
