//! Pong Wars entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Frames between territory log lines (10 s at 60 Hz)
const STATS_INTERVAL: u64 = 600;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, anyhow};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use pong_wars::renderer::{ColorTable, RenderState, VertexCanvas};
    use pong_wars::sim::{PaletteColor, SimState};
    use pong_wars::{Settings, run_frame};

    use super::STATS_INTERVAL;

    /// Everything the animation callback chain owns
    struct Game {
        state: SimState,
        rng: Pcg32,
        canvas: VertexCanvas,
        render_state: RenderState,
    }

    impl Game {
        /// Simulate and present one frame
        fn frame(&mut self) {
            let report = run_frame(&mut self.state, &mut self.canvas, &mut self.rng);

            if report.frame % STATS_INTERVAL == 0 {
                log::info!(
                    "Frame {}: light {} / dark {}",
                    report.frame,
                    self.state.grid.count(PaletteColor::Light),
                    self.state.grid.count(PaletteColor::Dark)
                );
            }

            match self.render_state.render(self.canvas.vertices()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow!("Failed to init logger: {}", e))?;

        log::info!("Pong Wars starting...");

        let settings = Settings::load()?;
        let state = SimState::from_settings(&settings)?;
        let colors = ColorTable::from_palette(&settings.palette)?;

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .context("no canvas")?
            .dyn_into()
            .map_err(|_| anyhow!("#canvas is not a canvas element"))?;

        // CSS size follows the arena; the backing store is at device resolution
        let dpr = window.device_pixel_ratio();
        let width = (state.arena.width as f64 * dpr) as u32;
        let height = (state.arena.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let style = canvas.style();
        for (property, size) in [("width", state.arena.width), ("height", state.arena.height)] {
            style
                .set_property(property, &format!("{}px", size))
                .map_err(|e| anyhow!("Failed to set canvas {}: {:?}", property, e))?;
        }

        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!(
            "Simulation {}x{} cells, seed {}",
            state.grid.columns(),
            state.grid.rows(),
            seed
        );

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to get adapter: {}", e))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let world_size = (state.arena.width, state.arena.height);
        let render_state = RenderState::new(surface, &adapter, width, height, world_size).await?;

        let game = Rc::new(RefCell::new(Game {
            state,
            rng: Pcg32::seed_from_u64(seed),
            canvas: VertexCanvas::new(colors),
            render_state,
        }));

        request_animation_frame(game);

        log::info!("Pong Wars running!");
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, animation stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Pong Wars failed to start: {:#}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use pong_wars::renderer::NullCanvas;
    use pong_wars::sim::{PaletteColor, SimState};
    use pong_wars::{Settings, run_frame};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Pong Wars (native, headless) starting...");
    log::info!("The rendered version runs in the browser - use `trunk serve`");

    let settings = Settings::load()?;
    let mut state = SimState::from_settings(&settings)?;

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!(
        "Simulating {} frames on {}x{} cells, seed {}",
        settings.headless_frames,
        state.grid.columns(),
        state.grid.rows(),
        seed
    );

    let mut claimed = 0;
    let mut wall_contacts = 0;
    for _ in 0..settings.headless_frames {
        let report = run_frame(&mut state, &mut NullCanvas, &mut rng);
        claimed += report.cells_claimed;
        wall_contacts += report.wall_contacts;

        if (report.frame + 1) % STATS_INTERVAL == 0 {
            log::info!(
                "Frame {}: light {} / dark {}",
                report.frame + 1,
                state.grid.count(PaletteColor::Light),
                state.grid.count(PaletteColor::Dark)
            );
        }
    }

    log::info!(
        "Done after {} frames: {} cells claimed, {} wall bounces, light {} / dark {}",
        state.frame,
        claimed,
        wall_contacts,
        state.grid.count(PaletteColor::Light),
        state.grid.count(PaletteColor::Dark)
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
