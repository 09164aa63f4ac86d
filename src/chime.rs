//! New-order chime: a short falling sine tone via Web Audio.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// Tone shape, in Hz / seconds / linear gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChimeShape {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration: f64,
    pub start_gain: f32,
    pub end_gain: f32,
}

pub const NEW_ORDER: ChimeShape = ChimeShape {
    start_hz: 600.0,
    end_hz: 400.0,
    duration: 0.5,
    start_gain: 0.5,
    // Exponential ramps cannot reach zero
    end_gain: 0.0001,
};

/// Plays the new-order tone; failures are logged and ignored.
pub fn play_new_order() {
    if let Err(e) = play(NEW_ORDER) {
        log::warn!("[ALERTS] could not play chime: {e:?}");
    }
}

fn play(shape: ChimeShape) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    oscillator.set_type(OscillatorType::Sine);

    let now = ctx.current_time();
    let end = now + shape.duration;
    oscillator.frequency().set_value_at_time(shape.start_hz, now)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(shape.end_hz, end)?;
    gain.gain().set_value_at_time(shape.start_gain, now)?;
    gain.gain().exponential_ramp_to_value_at_time(shape.end_gain, end)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}
