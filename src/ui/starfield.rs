//! Animated starfield background
//!
//! A full-viewport canvas redrawn every animation frame from
//! `core::starfield::Starfield`. Resizing the window cancels the pending
//! frame, rebuilds the star batch for the new size and restarts the loop, so
//! two draw loops never run at once. Unmounting removes the resize listener
//! and stops the loop.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
mod frame_loop {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use leptos::logging::warn;
    use leptos::web_sys;
    use rand::rngs::SmallRng;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::core::motion::MotionPreference;
    use crate::core::starfield::Starfield;
    use crate::ui::browser;

    const STAR_COLOR: &str = "#fff";

    /// Owns the canvas, its star batch and the pending frame request
    pub struct FrameLoop {
        canvas: web_sys::HtmlCanvasElement,
        ctx: web_sys::CanvasRenderingContext2d,
        field: Starfield,
        rng: SmallRng,
        frame: Option<i32>,
    }

    impl FrameLoop {
        /// Size the canvas to the viewport and lay out the first batch.
        /// `None` when the canvas has no 2d context.
        pub fn init(canvas: web_sys::HtmlCanvasElement, motion: MotionPreference) -> Option<Self> {
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()?
                .dyn_into::<web_sys::CanvasRenderingContext2d>()
                .ok()?;
            let mut rng = browser::seeded_rng();
            let (width, height) = browser::viewport_size();
            let field = Starfield::new(width, height, motion, &mut rng);

            let frame_loop = Self {
                canvas,
                ctx,
                field,
                rng,
                frame: None,
            };
            frame_loop.fit_canvas();
            Some(frame_loop)
        }

        /// Match the backing store to the viewport and device pixel ratio
        fn fit_canvas(&self) {
            let dpr = browser::device_pixel_ratio();
            let (width, height) = (self.field.width(), self.field.height());

            self.canvas.set_width((width * dpr).round() as u32);
            self.canvas.set_height((height * dpr).round() as u32);
            let style = self.canvas.style();
            let _ = style.set_property("width", &format!("{width}px"));
            let _ = style.set_property("height", &format!("{height}px"));
            // Setting width/height resets the transform, so scale again
            let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        }

        /// Rebuild the whole batch for the current viewport
        pub fn resize(&mut self) {
            let (width, height) = browser::viewport_size();
            self.field.resize(width, height, &mut self.rng);
            self.fit_canvas();
        }

        /// Draw one frame and advance every star
        pub fn tick(&mut self) {
            let Self {
                ctx, field, rng, ..
            } = self;

            ctx.clear_rect(0.0, 0.0, field.width(), field.height());
            ctx.set_fill_style_str(STAR_COLOR);
            for star in field.particles() {
                ctx.set_global_alpha(field.twinkle_alpha(rng));
                ctx.begin_path();
                let _ = ctx.arc(star.x, star.y, star.radius, 0.0, TAU);
                ctx.fill();
            }
            ctx.set_global_alpha(1.0);

            field.advance(rng);
        }

        /// Cancel the pending frame, if any
        pub fn dispose(&mut self) {
            if let Some(id) = self.frame.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

    fn request_frame(frame_loop: &Rc<RefCell<FrameLoop>>, callback: &FrameCallback) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(closure) = callback.borrow().as_ref() {
            match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                Ok(id) => frame_loop.borrow_mut().frame = Some(id),
                Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }

    /// Handle to a running draw loop
    pub struct FrameRunner {
        frame_loop: Rc<RefCell<FrameLoop>>,
        callback: FrameCallback,
    }

    impl FrameRunner {
        /// Cancel the pending frame, rebuild for the new viewport and
        /// schedule again. No-op once stopped.
        pub fn resize(&self) {
            if self.callback.borrow().is_none() {
                return;
            }
            let mut current = self.frame_loop.borrow_mut();
            current.dispose();
            current.resize();
            drop(current);
            request_frame(&self.frame_loop, &self.callback);
        }

        /// Cancel the pending frame and release the frame callback
        pub fn stop(&self) {
            self.frame_loop.borrow_mut().dispose();
            self.callback.borrow_mut().take();
        }
    }

    /// Start the draw loop on `canvas`
    pub fn start(canvas: web_sys::HtmlCanvasElement, motion: MotionPreference) -> Option<FrameRunner> {
        let Some(frame_loop) = FrameLoop::init(canvas, motion) else {
            warn!("starfield: 2d canvas context unavailable");
            return None;
        };
        let frame_loop = Rc::new(RefCell::new(frame_loop));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let on_frame = {
            let frame_loop = frame_loop.clone();
            let callback = callback.clone();
            move || {
                frame_loop.borrow_mut().frame = None;
                frame_loop.borrow_mut().tick();
                request_frame(&frame_loop, &callback);
            }
        };
        *callback.borrow_mut() = Some(Closure::new(on_frame));

        request_frame(&frame_loop, &callback);
        Some(FrameRunner {
            frame_loop,
            callback,
        })
    }
}

/// Full-viewport animated star background
#[component]
pub fn StarfieldCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::resize;

        let runner = StoredValue::new_local(None::<frame_loop::FrameRunner>);

        canvas_ref.on_load(move |canvas| {
            let motion = super::browser::motion_preference();
            runner.set_value(frame_loop::start(canvas, motion));
        });

        let handle_resize = window_event_listener(resize, move |_| {
            runner.with_value(|r| {
                if let Some(r) = r {
                    r.resize();
                }
            });
        });

        on_cleanup(move || {
            handle_resize.remove();
            runner.try_update_value(|r| {
                if let Some(r) = r.take() {
                    r.stop();
                }
            });
        });
    }

    view! {
        <canvas node_ref=canvas_ref class="starfield" aria-hidden="true"></canvas>
    }
}
