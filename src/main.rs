//! Spin Wheel entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_widget {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use spin_wheel::WheelError;
    use spin_wheel::consts::*;
    use spin_wheel::locale::Notice;
    use spin_wheel::renderer::RenderState;
    use spin_wheel::settings::WheelConfig;
    use spin_wheel::sim::{Command, SeededOutcomes, SessionState, TickInput, tick};
    use spin_wheel::ui::Dom;

    /// Button ids and the command each one enqueues
    const BUTTONS: [(&str, Command); 7] = [
        ("spinBtn", Command::Spin),
        ("gameBtn", Command::Spin),
        ("langBtn", Command::ToggleLocale),
        ("walletBtn", Command::Notify(Notice::Wallet)),
        ("referralBtn", Command::Notify(Notice::Referral)),
        ("leaderboardBtn", Command::Notify(Notice::Leaderboard)),
        ("adsBtn", Command::WatchAd),
    ];

    /// Widget state shared between callbacks
    struct Widget {
        state: SessionState,
        render_state: Option<RenderState>,
        dom: Dom,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
    }

    impl Widget {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = std::mem::take(&mut self.input);
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            let events = self.state.drain_events();
            if !events.is_empty() {
                self.dom.apply_events(&self.state, &events);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.state.orientation) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Spin Wheel starting...");

        if let Err(e) = start().await {
            log::error!("Spin Wheel failed to start: {}", e);
        }
    }

    async fn start() -> Result<(), WheelError> {
        let window =
            web_sys::window().ok_or_else(|| WheelError::Initialization("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| WheelError::Initialization("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("wheelCanvas")
            .ok_or_else(|| WheelError::Initialization("no #wheelCanvas".into()))?
            .dyn_into()
            .map_err(|_| WheelError::Initialization("#wheelCanvas is not a canvas".into()))?;

        let config = WheelConfig::load(&canvas);
        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SessionState::from_config(&config, Box::new(SeededOutcomes::new(seed)))?;
        log::info!("Session initialized with seed: {}", seed);

        let (width, height) = canvas_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        // Prefer WebGPU, fall back to WebGL2
        let has_webgpu = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("gpu"))
            .unwrap_or(false);
        let backends = if has_webgpu {
            wgpu::Backends::BROWSER_WEBGPU
        } else {
            wgpu::Backends::GL
        };
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| WheelError::Initialization(format!("surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| WheelError::Initialization(format!("adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        let dom = Dom::new(document);
        dom.apply_locale(&state);

        let widget = Rc::new(RefCell::new(Widget {
            state,
            render_state: Some(render_state),
            dom,
            accumulator: 0.0,
            last_time: 0.0,
            input: TickInput::default(),
        }));

        setup_buttons(widget.clone());
        setup_resize(window, canvas, widget.clone());

        request_animation_frame(widget);

        log::info!("Spin Wheel running!");
        Ok(())
    }

    /// Backing-store size of the canvas container in device pixels
    fn canvas_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let (w, h) = match canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (canvas.client_width(), canvas.client_height()),
        };
        (
            ((w as f64 * dpr) as u32).max(1),
            ((h as f64 * dpr) as u32).max(1),
        )
    }

    fn setup_buttons(widget: Rc<RefCell<Widget>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for (id, command) in BUTTONS {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                continue;
            };
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                widget.borrow_mut().input.commands.push(command);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(window: web_sys::Window, canvas: HtmlCanvasElement, widget: Rc<RefCell<Widget>>) {
        let target = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = canvas_size(&window, &canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(render_state) = widget.borrow_mut().render_state.as_mut() {
                render_state.resize(width, height);
            }
        });
        let _ = target.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(widget: Rc<RefCell<Widget>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(widget, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(widget: Rc<RefCell<Widget>>, time: f64) {
        {
            let mut w = widget.borrow_mut();

            // Calculate delta time
            let dt = if w.last_time > 0.0 {
                ((time - w.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            w.last_time = time;

            w.update(dt);
            w.render();
        }

        request_animation_frame(widget);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_widget::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Spin Wheel (native) starting...");
    log::info!("Native mode runs a headless scripted session; use `trunk serve` for the widget");

    if let Err(e) = scripted_session() {
        log::error!("Scripted session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Spin, double-click, toggle locale and watch an ad, printing every event
#[cfg(not(target_arch = "wasm32"))]
fn scripted_session() -> Result<(), spin_wheel::WheelError> {
    use spin_wheel::consts::SIM_DT;
    use spin_wheel::settings::WheelConfig;
    use spin_wheel::sim::{Command, SeededOutcomes, SessionState, TickInput, tick};

    let config = WheelConfig::default();
    let seed = config.seed.unwrap_or(42);
    let mut state = SessionState::from_config(&config, Box::new(SeededOutcomes::new(seed)))?;

    // (time in seconds, command)
    let script = [
        (3.6, Command::Spin),
        (3.7, Command::Spin),
        (10.0, Command::ToggleLocale),
        (10.5, Command::WatchAd),
        (16.0, Command::ToggleLocale),
    ];
    let end = 18.0;
    let total_ticks = (end / SIM_DT as f64).ceil() as usize;

    let mut next = 0;
    for _ in 0..total_ticks {
        let mut input = TickInput::default();
        while next < script.len() && script[next].0 <= state.time {
            input.commands.push(script[next].1);
            next += 1;
        }
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            println!(
                "[{:6.3}s] {:?} | status: {} | balance: {}",
                state.time,
                event,
                state.status_text(),
                state.balance_text()
            );
        }
    }

    println!("Final balance: {} ({})", state.balance, state.balance_text());
    Ok(())
}
