use glam::Vec2;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use zen_core::gesture::HandLandmarks;
use zen_core::{FrameTime, GestureInput, GestureSlot, Shape, SimConfig, Simulation};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging() {
    // Already installed when a second world is created.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from(err.to_string())
}

#[wasm_bindgen]
pub struct ParticleWorld {
    sim: Simulation,
    gesture: GestureSlot,
}

#[wasm_bindgen]
impl ParticleWorld {
    /// Build from the UI's JSON settings object. Missing fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<ParticleWorld, JsValue> {
        init_logging();
        let config = SimConfig::from_json(config_json).map_err(js_error)?;
        Self::build(config)
    }

    #[wasm_bindgen]
    pub fn with_defaults() -> Result<ParticleWorld, JsValue> {
        init_logging();
        Self::build(SimConfig::default())
    }

    /// Adopt new settings. Invalid settings are rejected and nothing changes.
    /// Turning gesture control off drops the last tracker reading.
    ///
    /// A count, color or size change rebuilds the buffers, so pointers
    /// obtained earlier are invalid afterwards.
    #[wasm_bindgen]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config = SimConfig::from_json(config_json).map_err(js_error)?;
        self.sim
            .apply_config_with_slot(config, &self.gesture)
            .map_err(js_error)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.sim.config().to_json().map_err(js_error)
    }

    /// Switch the target shape. Only the targets are regenerated, so buffer
    /// pointers obtained earlier stay valid.
    #[wasm_bindgen]
    pub fn set_shape(&mut self, name: &str) -> Result<(), JsValue> {
        let shape: Shape = name.parse().map_err(js_error)?;
        self.sim.set_shape(shape).map_err(js_error)?;
        Ok(())
    }

    /// Publish an already-reduced gesture reading.
    #[wasm_bindgen]
    pub fn set_gesture(
        &mut self,
        hands_present: bool,
        pinch_strength: f32,
        hand_separation: f32,
        focus_x: f32,
        focus_y: f32,
    ) {
        let reading = if hands_present {
            GestureInput::new(pinch_strength, hand_separation, Vec2::new(focus_x, focus_y))
        } else {
            GestureInput::idle()
        };
        self.gesture.publish(reading);
    }

    /// Publish raw tracker output: `hand_count` hands of 21 xyz landmarks each,
    /// in normalised image coordinates.
    #[wasm_bindgen]
    pub fn set_hand_landmarks(&mut self, landmarks: &[f32], hand_count: usize) -> Result<(), JsValue> {
        let per_hand = HandLandmarks::COUNT * 3;
        if landmarks.len() != hand_count * per_hand {
            return Err(JsValue::from(format!(
                "expected {} landmark floats for {} hands, got {}",
                hand_count * per_hand,
                hand_count,
                landmarks.len()
            )));
        }
        let hands: Vec<HandLandmarks> = landmarks
            .chunks_exact(per_hand)
            .filter_map(HandLandmarks::from_flat)
            .collect();
        self.gesture.publish(GestureInput::from_hands(&hands));
        Ok(())
    }

    /// Tracker stopped or failed: fall back to the idle animation.
    #[wasm_bindgen]
    pub fn clear_gesture(&mut self) {
        self.gesture.clear();
    }

    /// Advance one frame at `elapsed` seconds since start. Returns the step time in ms.
    #[wasm_bindgen]
    pub fn step(&mut self, elapsed: f32) -> f32 {
        let start = js_sys::Date::now();
        self.sim.frame_from_slot(&self.gesture, FrameTime::at(elapsed));
        let took = js_sys::Date::now() - start;
        took as f32
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.sim.buffers().positions_flat().as_ptr()
    }

    /// Number of floats behind [`ParticleWorld::positions_ptr`].
    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.sim.buffers().positions_flat().len()
    }

    #[wasm_bindgen]
    pub fn colors_ptr(&self) -> *const f32 {
        self.sim.buffers().colors_flat().as_ptr()
    }

    #[wasm_bindgen]
    pub fn colors_len(&self) -> usize {
        self.sim.buffers().colors_flat().len()
    }

    #[wasm_bindgen]
    pub fn sizes_ptr(&self) -> *const f32 {
        self.sim.buffers().sizes().as_ptr()
    }

    #[wasm_bindgen]
    pub fn sizes_len(&self) -> usize {
        self.sim.buffers().sizes().len()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.sim.particle_count()
    }

    /// Rescatter the swarm. Pointers obtained earlier are invalid afterwards.
    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.sim.reinitialize().map_err(js_error)
    }
}

impl ParticleWorld {
    fn build(config: SimConfig) -> Result<ParticleWorld, JsValue> {
        let sim = Simulation::new(config).map_err(js_error)?;
        Ok(ParticleWorld {
            sim,
            gesture: GestureSlot::new(),
        })
    }
}
