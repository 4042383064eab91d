use clothy::{Cloth, ClothConfig, IntegrationMode, NoOpStepObserver, SphereController, SphereDirection};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// Maps the page's key codes to sphere directions.
fn direction_for(code: &str) -> Option<SphereDirection> {
    match code {
        "ArrowUp" | "KeyW" => Some(SphereDirection::Up),
        "ArrowDown" | "KeyS" => Some(SphereDirection::Down),
        "ArrowLeft" | "KeyA" => Some(SphereDirection::Left),
        "ArrowRight" | "KeyD" => Some(SphereDirection::Right),
        "KeyE" => Some(SphereDirection::Forward),
        "KeyQ" => Some(SphereDirection::Backward),
        _ => None,
    }
}

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
    input: SphereController,
}

#[wasm_bindgen]
impl ClothDemo {
    /// `mode`: 0 relaxation, 1 force-based Euler, 2 Euler, 3 Verlet.
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: usize, mode: u8) -> Result<ClothDemo, JsValue> {
        let mode = match mode {
            1 => IntegrationMode::ForceEuler,
            2 => IntegrationMode::Euler,
            3 => IntegrationMode::Verlet,
            _ => IntegrationMode::Relaxation,
        };
        let config = ClothConfig::new().with_resolution(resolution).with_mode(mode);
        let cloth = Cloth::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ClothDemo { cloth, input: SphereController::new() })
    }

    /// Returns whether the key steers the sphere.
    pub fn key_down(&mut self, code: &str) -> bool {
        match direction_for(code) {
            Some(dir) => {
                self.input.press(dir);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        match direction_for(code) {
            Some(dir) => {
                self.input.release(dir);
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.cloth.step(dt, self.input.direction(), &mut NoOpStepObserver);
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        self.cloth.flat_positions()
    }

    /// Returns flat [nx0, ny0, nz0, ...] parallel to `positions`
    pub fn normals(&self) -> Vec<f32> {
        self.cloth.flat_normals()
    }

    /// Triangle list, three indices per triangle
    pub fn indices(&self) -> Vec<u32> {
        self.cloth.indices().to_vec()
    }

    /// Returns [cx, cy, cz, radius]
    pub fn sphere(&self) -> Vec<f32> {
        let s = self.cloth.sphere();
        vec![s.center.x, s.center.y, s.center.z, s.radius]
    }

    pub fn resolution(&self) -> usize {
        self.cloth.resolution()
    }
}
