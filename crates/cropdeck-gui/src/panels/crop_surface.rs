use cropdeck_core::preset::MaskShape;

use crate::app::CropDeckApp;

/// Zoom change per scrolled point.
const SCROLL_ZOOM_RATE: f64 = 0.005;
/// Gap kept between the preview and the panel edge.
const SURFACE_MARGIN: f32 = 24.0;

pub fn show(ctx: &egui::Context, app: &mut CropDeckApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        app.refresh_preview(ctx);

        let Some((texture_id, size)) = app
            .preview
            .texture
            .as_ref()
            .zip(app.preview.image_size)
            .map(|(t, size)| (t.id(), egui::vec2(size[0] as f32, size[1] as f32)))
        else {
            show_placeholder(ui);
            return;
        };

        let surface = fit_rect(rect, size);
        let response = ui.allocate_rect(surface, egui::Sense::click_and_drag());

        handle_drag(ui, &response, app, surface);
        handle_zoom(ui, &response, app);
        // Gestures above may have re-rendered; show this frame's result.
        app.refresh_preview(ctx);

        draw_preview(ui, texture_id, surface);
        draw_outline(ui, app, surface);
        draw_label(ui, rect, app);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Largest rect with the output's aspect that fits in `rect`, never upscaled.
fn fit_rect(rect: egui::Rect, size: egui::Vec2) -> egui::Rect {
    let available = (rect.size() - egui::vec2(SURFACE_MARGIN, SURFACE_MARGIN) * 2.0)
        .max(egui::vec2(1.0, 1.0));
    let scale = (available.x / size.x).min(available.y / size.y).min(1.0);
    egui::Rect::from_center_size(rect.center(), size * scale)
}

/// Press starts a drag, motion pans, release or leaving the surface ends it.
fn handle_drag(ui: &egui::Ui, response: &egui::Response, app: &mut CropDeckApp, surface: egui::Rect) {
    let Some(session) = app.host.session() else {
        return;
    };
    // Screen points to source pixels, so the image tracks the pointer.
    let cover = session.cover_fit();
    let to_source = cover.width / f64::from(surface.width());
    let dragging = session.viewport().is_dragging();

    if response.drag_started_by(egui::PointerButton::Primary) {
        let result = app.host.drag_start();
        app.report(result);
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            let result = app.host.drag_move(
                f64::from(delta.x) * to_source,
                f64::from(delta.y) * to_source,
            );
            app.report(result);
        }
    }

    let left_surface = dragging && !response.contains_pointer();
    if response.drag_stopped() || left_surface {
        let result = app.host.drag_end();
        app.report(result);
    }

    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(if response.dragged() {
            egui::CursorIcon::Grabbing
        } else {
            egui::CursorIcon::Grab
        });
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut CropDeckApp) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() || !app.host.is_active() {
        return;
    }
    let result = app.host.zoom_by(f64::from(scroll_delta) * SCROLL_ZOOM_RATE);
    app.report(result);
}

fn draw_preview(ui: &egui::Ui, texture_id: egui::TextureId, surface: egui::Rect) {
    ui.painter().image(
        texture_id,
        surface,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Frame the crop; circle presets also get the circle the output is shown in.
fn draw_outline(ui: &egui::Ui, app: &CropDeckApp, surface: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_white_alpha(160));
    ui.painter()
        .rect_stroke(surface, 0.0, stroke, egui::StrokeKind::Outside);

    let circle = app
        .host
        .session()
        .is_some_and(|s| s.preset().mask == MaskShape::Circle);
    if circle {
        let radius = surface.width().min(surface.height()) / 2.0;
        ui.painter().circle_stroke(
            surface.center(),
            radius,
            egui::Stroke::new(2.0, egui::Color32::from_rgb(80, 160, 255)),
        );
    }
}

fn draw_label(ui: &egui::Ui, rect: egui::Rect, app: &CropDeckApp) {
    let Some(session) = app.host.session() else {
        return;
    };
    let label = format!(
        "{} \u{00b7} {:.0}%",
        session.target(),
        session.viewport().zoom() * 100.0
    );
    ui.painter().text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
