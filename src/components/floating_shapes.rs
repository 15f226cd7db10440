use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const SHAPE_COUNT: usize = 14;
const SHAPE_COLORS: [&str; 6] = [
    "rgba(88,166,255,0.18)",
    "rgba(163,113,247,0.18)",
    "rgba(63,185,80,0.16)",
    "rgba(210,153,34,0.16)",
    "rgba(248,81,73,0.14)",
    "rgba(6,182,212,0.16)",
];

/// One drifting polygon in the menu background.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub angle: f64,
    pub spin: f64,
    pub sides: u32,
    pub color: &'static str,
}

impl Shape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Shape {
            x: rng.gen_range(0.0..width.max(1.0)),
            y: rng.gen_range(0.0..height.max(1.0)),
            vx: rng.gen_range(-0.4..0.4),
            vy: rng.gen_range(-0.4..0.4),
            radius: rng.gen_range(18.0..60.0),
            angle: rng.gen_range(0.0..PI * 2.0),
            spin: rng.gen_range(-0.01..0.01),
            sides: rng.gen_range(3..=6),
            color: SHAPE_COLORS[rng.gen_range(0..SHAPE_COLORS.len())],
        }
    }

    /// Advances one frame, wrapping around the edges with a margin of one radius.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.angle = (self.angle + self.spin).rem_euclid(PI * 2.0);
        let r = self.radius;
        if self.x < -r {
            self.x = width + r;
        } else if self.x > width + r {
            self.x = -r;
        }
        if self.y < -r {
            self.y = height + r;
        } else if self.y > height + r {
            self.y = -r;
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.begin_path();
        for i in 0..=self.sides {
            let a = self.angle + (i as f64) * PI * 2.0 / self.sides as f64;
            let px = self.x + self.radius * a.cos();
            let py = self.y + self.radius * a.sin();
            if i == 0 {
                ctx.move_to(px, py);
            } else {
                ctx.line_to(px, py);
            }
        }
        ctx.close_path();
        ctx.set_fill_style_str(self.color);
        ctx.fill();
    }
}

fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (800.0, 600.0);
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (w, h)
}

#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas: Option<HtmlCanvasElement> = canvas_ref.cast::<HtmlCanvasElement>();
            let ctx: Option<CanvasRenderingContext2d> = canvas.as_ref().and_then(|c| {
                c.get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|o| o.dyn_into::<CanvasRenderingContext2d>().ok())
            });
            let raf_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));

            if let (Some(window), Some(canvas), Some(ctx)) = (window.clone(), canvas, ctx) {
                let (w, h) = viewport();
                let mut rng = rand::thread_rng();
                let mut shapes: Vec<Shape> = (0..SHAPE_COUNT)
                    .map(|_| Shape::random(&mut rng, w, h))
                    .collect();
                let raf_id_loop = raf_id.clone();
                let closure_cell_loop = closure_cell.clone();
                let window_loop = window.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let (w, h) = viewport();
                    if canvas.width() != w as u32 || canvas.height() != h as u32 {
                        canvas.set_width(w as u32);
                        canvas.set_height(h as u32);
                    }
                    ctx.clear_rect(0.0, 0.0, w, h);
                    for s in shapes.iter_mut() {
                        s.step(w, h);
                        s.draw(&ctx);
                    }
                    if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_loop.borrow_mut() = Some(id);
                        }
                    }
                })
                    as Box<dyn FnMut()>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }

            move || {
                if let (Some(window), Some(id)) = (window, *raf_id.borrow()) {
                    let _ = window.cancel_animation_frame(id);
                }
                // Break the self-reference so the loop closure can be freed.
                closure_cell.borrow_mut().take();
            }
        });
    }
    html! {
        <canvas ref={canvas_ref} style="position:absolute; inset:0; width:100%; height:100%; z-index:1; pointer-events:none;" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_shapes_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let s = Shape::random(&mut rng, 640.0, 480.0);
            assert!((0.0..640.0).contains(&s.x));
            assert!((0.0..480.0).contains(&s.y));
            assert!((3..=6).contains(&s.sides));
        }
    }

    #[test]
    fn step_wraps_past_the_edges() {
        let mut s = Shape {
            x: 105.0,
            y: 50.0,
            vx: 1.0,
            vy: 0.0,
            radius: 5.0,
            angle: 0.0,
            spin: 0.0,
            sides: 3,
            color: SHAPE_COLORS[0],
        };
        s.step(100.0, 100.0);
        assert_eq!(s.x, -5.0);
        s.vx = -1.0;
        s.step(100.0, 100.0);
        assert_eq!(s.x, 105.0);
        s.step(100.0, 100.0);
        assert_eq!(s.x, 104.0);
    }
}
