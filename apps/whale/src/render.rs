// KujiraPixel
// copyright kujira project 2026

//! Whale drawing: composites the scroll view, the ripple pool and the whale
//! sprite into one display-sized frame and hands it to the adapter.

use crate::model::{WhaleModel, EVENT_REBUILD_VIEW};
use kujira_pixel::{
    context::Context,
    event::{event_check, event_register},
    game::Render,
    render::{bitmap::Bitmap, scroll::ScrollView, sprite::Sprite},
    DISPLAY_PH, DISPLAY_PW, DISPLAY_TH, DISPLAY_TW, TILE_SIZE,
};
use log::info;
use std::io;

pub struct WhaleRender {
    frame: Bitmap,
    view: ScrollView,
    sprite: Sprite,
}

impl WhaleRender {
    pub fn new(sprite_bitmap: Bitmap) -> Self {
        Self {
            frame: Bitmap::new(DISPLAY_PW as usize, DISPLAY_PH as usize),
            view: ScrollView::new(),
            sprite: Sprite::new(sprite_bitmap),
        }
    }

    /// Screen position of the center of the tile the whale occupies, plus
    /// its sub-tile offset, all relative to the camera.
    fn player_screen_pos(model: &WhaleModel) -> (i32, i32) {
        let p = &model.player;
        let cam = &model.camera;
        let x = (p.tile.x - cam.tile.x + DISPLAY_TW / 2) * TILE_SIZE
            + TILE_SIZE / 2
            + (p.pixel.x - cam.pixel.x) as i32;
        let y = (p.tile.y - cam.tile.y + DISPLAY_TH / 2) * TILE_SIZE
            + TILE_SIZE / 2
            + (p.pixel.y - cam.pixel.y) as i32;
        (x, y)
    }
}

impl Render for WhaleRender {
    type Model = WhaleModel;

    fn init(&mut self, _context: &mut Context, model: &mut Self::Model) {
        event_register(EVENT_REBUILD_VIEW, "draw");
        self.view.rebuild(&model.world, model.camera.dest_tile);
        info!(
            "render ready, sprite {}x{}",
            self.sprite.bitmap().width(),
            self.sprite.bitmap().height()
        );
    }

    fn handle_event(&mut self, _context: &mut Context, model: &mut Self::Model, _dt: f32) {
        if event_check(EVENT_REBUILD_VIEW, "draw") {
            self.view.rebuild(&model.world, model.camera.dest_tile);
        }
    }

    fn draw(&mut self, context: &mut Context, model: &mut Self::Model, _dt: f32) -> io::Result<()> {
        self.view.composite(&model.camera, &mut self.frame);

        let keys = self.view.color_keys();
        model
            .ripples
            .advance_and_draw(&model.camera, keys, &mut self.frame);

        let (x, y) = Self::player_screen_pos(model);
        self.sprite
            .draw(&mut self.frame, x, y, model.player.angle, model.player.scale);

        context.adapter.present(&self.frame)
    }
}
