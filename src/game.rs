// KujiraPixel
// copyright kujira project 2026

//! The main loop. A game is a Model (logic) paired with a Render (drawing);
//! [`Game`] owns both plus the [`Context`] and steps them at a fixed
//! timestep of [`GAME_FRAME`] frames per second. Per frame the key states
//! are polled first, then the model updates, then the render draws and
//! presents. The model requests shutdown by setting `context.quit`.

use crate::{context::Context, render::adapter::Adapter, GAME_FRAME};
use log::info;
use std::io;
use std::time::{Duration, Instant};

pub trait Model {
    /// One-time setup after the context exists.
    fn init(&mut self, context: &mut Context);

    /// Input handling then autonomous state (animations, camera, timers).
    fn update(&mut self, context: &mut Context, dt: f32) {
        self.handle_input(context, dt);
        self.handle_auto(context, dt);
    }

    fn handle_input(&mut self, context: &mut Context, dt: f32);
    fn handle_auto(&mut self, context: &mut Context, dt: f32);
}

pub trait Render {
    type Model: Model;

    fn init(&mut self, context: &mut Context, model: &mut Self::Model);

    /// Consume pending events, then paint and present the frame.
    fn update(&mut self, context: &mut Context, model: &mut Self::Model, dt: f32) -> io::Result<()> {
        self.handle_event(context, model, dt);
        self.draw(context, model, dt)
    }

    fn handle_event(&mut self, context: &mut Context, model: &mut Self::Model, dt: f32);
    fn draw(&mut self, context: &mut Context, model: &mut Self::Model, dt: f32) -> io::Result<()>;
}

pub struct Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub context: Context,
    pub model: M,
    pub render: R,
}

impl<M, R> Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub fn new(model: M, render: R, adapter: Box<dyn Adapter>) -> Self {
        Self {
            context: Context::new(adapter),
            model,
            render,
        }
    }

    pub fn init(&mut self) {
        self.model.init(&mut self.context);
        self.render.init(&mut self.context, &mut self.model);
    }

    /// One frame: poll keys, update model, update render.
    pub fn on_tick(&mut self, dt: f32) -> io::Result<()> {
        self.context.stage += 1;
        let keys = self.context.adapter.poll_keys();
        self.context.keys.advance(keys);
        self.model.update(&mut self.context, dt);
        self.render.update(&mut self.context, &mut self.model, dt)
    }

    /// Run until the model sets `context.quit`, sleeping off any frame-time
    /// surplus to hold the fixed rate.
    pub fn run(&mut self) -> io::Result<()> {
        let frame = Duration::from_secs(1) / GAME_FRAME;
        let dt = 1.0 / GAME_FRAME as f32;
        info!("game loop start, {}fps", GAME_FRAME);
        while !self.context.quit {
            let start = Instant::now();
            self.on_tick(dt)?;
            let elapsed = start.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        info!("game loop end at stage {}", self.context.stage);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeySet;
    use crate::render::adapter::HeadlessAdapter;
    use crate::render::bitmap::Bitmap;

    #[derive(Default)]
    struct CountingModel {
        inited: bool,
        updates: u32,
    }

    impl Model for CountingModel {
        fn init(&mut self, _context: &mut Context) {
            self.inited = true;
        }

        fn handle_input(&mut self, context: &mut Context, _dt: f32) {
            if context.keys.held(KeySet::QUIT) {
                context.quit = true;
            }
        }

        fn handle_auto(&mut self, _context: &mut Context, _dt: f32) {
            self.updates += 1;
        }
    }

    struct CountingRender {
        frame: Bitmap,
    }

    impl CountingRender {
        fn new() -> Self {
            Self {
                frame: Bitmap::new(4, 4),
            }
        }
    }

    impl Render for CountingRender {
        type Model = CountingModel;

        fn init(&mut self, _context: &mut Context, _model: &mut Self::Model) {}

        fn handle_event(&mut self, _context: &mut Context, _model: &mut Self::Model, _dt: f32) {}

        fn draw(&mut self, context: &mut Context, _model: &mut Self::Model, _dt: f32) -> io::Result<()> {
            context.adapter.present(&self.frame)
        }
    }

    #[test]
    fn run_ends_when_script_runs_out() {
        let adapter = HeadlessAdapter::with_script(vec![
            KeySet::empty(),
            KeySet::RIGHT,
            KeySet::empty(),
        ]);
        let mut game = Game::new(
            CountingModel::default(),
            CountingRender::new(),
            Box::new(adapter),
        );
        game.init();
        assert!(game.model.inited);

        game.run().unwrap();
        // three scripted frames plus the implicit quit frame
        assert_eq!(game.context.stage, 4);
        assert_eq!(game.model.updates, 4);
    }

    #[test]
    fn key_snapshots_rotate_per_tick() {
        let adapter = HeadlessAdapter::with_script(vec![KeySet::RIPPLE, KeySet::RIPPLE]);
        let mut game = Game::new(
            CountingModel::default(),
            CountingRender::new(),
            Box::new(adapter),
        );
        game.init();

        game.on_tick(1.0 / 60.0).unwrap();
        assert!(game.context.keys.pressed(KeySet::RIPPLE));
        game.on_tick(1.0 / 60.0).unwrap();
        assert!(game.context.keys.held(KeySet::RIPPLE));
        assert!(!game.context.keys.pressed(KeySet::RIPPLE));
    }
}
