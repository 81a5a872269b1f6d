use std::sync::mpsc;

use cropdeck_core::config::CropConfig;
use cropdeck_core::error::Result as CropResult;
use cropdeck_core::session::{CropOutput, SessionHost};

use crate::convert::buffer_to_color_image;
use crate::messages::DialogResult;
use crate::panels;
use crate::states::{PreviewState, UIState};

pub struct CropDeckApp {
    pub result_tx: mpsc::Sender<DialogResult>,
    pub result_rx: mpsc::Receiver<DialogResult>,
    pub host: SessionHost,
    pub ui_state: UIState,
    pub preview: PreviewState,
    /// Confirmed crops, in confirmation order.
    pub outputs: Vec<CropOutput>,
    pub show_about: bool,
}

impl CropDeckApp {
    pub fn new() -> Self {
        let (result_tx, result_rx) = mpsc::channel();

        Self {
            result_tx,
            result_rx,
            host: SessionHost::new(CropConfig::default()),
            ui_state: UIState::default(),
            preview: PreviewState::default(),
            outputs: Vec::new(),
            show_about: false,
        }
    }

    /// Drain everything the dialog threads have sent.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                DialogResult::ImagePicked { path, bytes } => {
                    let target = self.ui_state.choice.to_target();
                    match self.host.load(target, &bytes) {
                        Ok(session) => {
                            let (w, h) = session.source().dimensions();
                            self.ui_state.source_size = Some((w, h));
                            self.ui_state.add_log(format!(
                                "Opened: {} ({w}x{h}) for {target}",
                                path.display()
                            ));
                            self.ui_state.file_path = Some(path);
                            self.preview.dirty = true;
                        }
                        Err(e) => {
                            self.ui_state
                                .add_log(format!("ERROR: {}: {e}", path.display()));
                        }
                    }
                }
                DialogResult::SaveTarget { index, path } => {
                    let Some(output) = self.outputs.get(index) else {
                        continue;
                    };
                    match output.image.save(&path) {
                        Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
                DialogResult::ConfigImported { path, config } => {
                    self.host.set_config(config);
                    self.ui_state.add_log(format!(
                        "Config loaded from {} (applies to the next image)",
                        path.display()
                    ));
                }
                DialogResult::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config saved to {}", path.display()));
                }
                DialogResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Log a failed session event. Rejected events keep the last preview.
    pub fn report(&mut self, result: CropResult<()>) {
        match result {
            Ok(()) => self.preview.dirty = true,
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Re-point the open session at the selected target.
    pub fn apply_target(&mut self) {
        let target = self.ui_state.choice.to_target();
        if let Some(session) = self.host.session_mut() {
            if session.target() == target {
                return;
            }
            let result = session.set_target(target);
            self.report(result);
        }
    }

    pub fn confirm(&mut self) {
        match self.host.confirm(&mut self.outputs) {
            Ok(()) => {
                if let Some(output) = self.outputs.last() {
                    let msg = format!(
                        "Confirmed {} ({}x{} {}, {:.1} KB)",
                        output.target,
                        output.image.width,
                        output.image.height,
                        output.image.format,
                        output.image.bytes.len() as f64 / 1024.0
                    );
                    self.ui_state.add_log(msg);
                }
                self.preview.clear();
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn cancel(&mut self) {
        match self.host.cancel() {
            Ok(()) => {
                self.ui_state.add_log("Crop cancelled".into());
                self.preview.clear();
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Upload the session's latest preview if it changed.
    pub fn refresh_preview(&mut self, ctx: &egui::Context) {
        if !self.preview.dirty {
            return;
        }
        self.preview.dirty = false;

        let Some(buffer) = self.host.session().and_then(|s| s.preview()) else {
            return;
        };
        let image = buffer_to_color_image(buffer);
        let size = image.size;
        if let Some(texture) = &mut self.preview.texture {
            texture.set(image, egui::TextureOptions::LINEAR);
        } else {
            self.preview.texture =
                Some(ctx.load_texture("crop_preview", image, egui::TextureOptions::LINEAR));
        }
        self.preview.image_size = Some(size);
    }
}

impl eframe::App for CropDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.refresh_preview(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::crop_surface::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Cropdeck")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Cropdeck");
                        ui.label("Crop and compose fixed-size images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
