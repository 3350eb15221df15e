//! Cloud Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop: on the
//! web, DOM wiring plus a fixed 22 ms interval timer; natively, a headless
//! scripted demo of the same simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use cloud_hop::consts::TICK_MS;
    use cloud_hop::highscores::HighScore;
    use cloud_hop::input::map_key;
    use cloud_hop::render::Surface;
    use cloud_hop::sim::{Field, GameEvent, GameState, TickInput, tick};

    /// Render surface backed by a canvas 2d context.
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, width: f32, height: f32) {
            self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        }

        fn set_fill(&mut self, color: &str) {
            self.ctx.set_fill_style_str(color);
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }
    }

    /// Game instance holding all state and glue bookkeeping
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        input: TickInput,
        high: HighScore,
        /// Handle of the running interval timer. At most one simulation
        /// timer exists at any time.
        interval: Option<i32>,
        /// Last score written into the DOM, to skip redundant text updates
        shown_score: Option<u32>,
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, selector: &str, hidden: bool) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            let result = if hidden {
                el.class_list().add_1("hidden")
            } else {
                el.class_list().remove_1("hidden")
            };
            if result.is_err() {
                log::warn!("could not toggle visibility of {}", selector);
            }
        }
    }

    /// One interval callback: advance the simulation, refresh the HUD,
    /// and react to game over.
    fn game_tick(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        let g = &mut *g;
        let event = tick(&mut g.state, &g.input, &mut g.surface);

        let doc = document();
        let rounded = g.state.score.rounded();
        if g.shown_score != Some(rounded) {
            set_text(&doc, "score", &format!("Score: {}", rounded));
            g.shown_score = Some(rounded);
        }

        if let Some(GameEvent::GameOver { final_score }) = event {
            set_text(
                &doc,
                "game-over-text",
                &format!("Game Over - Score: {}", final_score),
            );
            set_hidden(&doc, ".game-over", false);
            if g.high.record(final_score) {
                set_text(&doc, "high-score", &format!("High Score: {}", final_score));
            }
        }
    }

    /// Start the simulation timer. A no-op while one is already running;
    /// two live timers would double-apply physics.
    fn start(game: &Rc<RefCell<Game>>) {
        if game.borrow().interval.is_some() {
            log::warn!("Simulation timer already running, ignoring start");
            return;
        }

        let closure = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || game_tick(&game))
        };
        let handle = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_MS,
            )
            .expect("failed to start simulation timer");
        closure.forget();

        game.borrow_mut().interval = Some(handle);
        log::info!("Simulation timer started ({} ms cadence)", TICK_MS);
    }

    /// Stop the simulation timer if one is running.
    fn stop(game: &Rc<RefCell<Game>>) {
        if let Some(handle) = game.borrow_mut().interval.take() {
            web_sys::window().unwrap().clear_interval_with_handle(handle);
            log::info!("Simulation timer stopped");
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(steer) = map_key(&event.key(), &event.code()) {
                game.borrow_mut().input.steer = Some(steer);
            }
        });
        let _ = document()
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let doc = document();

        // Play: starts the timer and hides the instructions panel.
        if let Some(btn) = doc.get_element_by_id("play") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start(&game);
                set_hidden(&document(), ".instructions", true);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reset: stops the timer, rebuilds the run, hides the game-over
        // panel. Play must be pressed again to resume.
        if let Some(btn) = doc.get_element_by_id("reset") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                stop(&game);

                let seed = js_sys::Date::now() as u64;
                {
                    let mut g = game.borrow_mut();
                    g.state.reset(seed);
                    g.input = TickInput::default();
                    g.shown_score = None;
                }

                let doc = document();
                set_text(&doc, "score", "Score: 0");
                set_hidden(&doc, ".game-over", true);
                log::info!("Game reset with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Cloud Hop starting...");

        let doc = document();
        let canvas: HtmlCanvasElement = doc
            .get_element_by_id("game")
            .expect("no #game canvas")
            .dyn_into()
            .expect("#game is not a canvas");

        // Size the backing store from the host layout, once; Field::new
        // treats degenerate dimensions as a fatal configuration error.
        let width = canvas.client_width();
        let height = canvas.client_height();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let field = Field::new(width as f32, height as f32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context lookup failed")
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, field),
            surface: CanvasSurface { ctx },
            input: TickInput::default(),
            high: HighScore::new(),
            interval: None,
            shown_score: None,
        }));

        log::info!("Field {}x{}, seed {}", width, height, seed);

        setup_keyboard(game.clone());
        setup_buttons(game);

        log::info!("Cloud Hop ready - press Play");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cloud_hop::input::Steer;
    use cloud_hop::render::NullSurface;
    use cloud_hop::sim::{Field, GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Cloud Hop (native) starting...");

    // Headless demo: the same simulation against a no-op surface, steering
    // side to side until the run ends.
    let field = Field::new(480.0, 720.0);
    let mut state = GameState::new(2024, field);
    let mut surface = NullSurface;

    let mut steps = 0u32;
    let final_score = loop {
        let steer = if (steps / 40) % 2 == 0 {
            Some(Steer::Left)
        } else {
            Some(Steer::Right)
        };
        let input = TickInput { steer };

        if let Some(GameEvent::GameOver { final_score }) = tick(&mut state, &input, &mut surface) {
            break final_score;
        }

        steps += 1;
        if steps >= 20_000 {
            break state.score.rounded();
        }
    };

    println!("Demo run: {} ticks, score {}", steps, final_score);
}
