use std::path::Path;

use anyhow::{Context, Result};
use cropdeck_core::config::CropConfig;

use crate::app::CropDeckApp;
use crate::messages::DialogResult;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn open_image(ctx: &egui::Context, app: &CropDeckApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        let msg = match read_image(&path) {
            Ok(bytes) => DialogResult::ImagePicked { path, bytes },
            Err(e) => DialogResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(msg);
        ctx.request_repaint();
    });
}

/// Ask where to write confirmed output `index`.
pub fn save_output(ctx: &egui::Context, app: &CropDeckApp, index: usize) {
    let Some(output) = app.outputs.get(index) else {
        return;
    };
    let ext = output.image.format.extension();
    let file_name = match output.slot {
        Some(slot) => format!("{}_{}.{ext}", output.tag.as_str(), slot + 1),
        None => format!("{}.{ext}", output.tag.as_str()),
    };

    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(ext.to_uppercase(), &[ext])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = result_tx.send(DialogResult::SaveTarget { index, path });
            ctx.request_repaint();
        }
    });
}

pub fn import_config(ctx: &egui::Context, app: &CropDeckApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let msg = match CropConfig::load(&path) {
            Ok(config) => DialogResult::ConfigImported { path, config },
            Err(e) => DialogResult::Error {
                message: format!("{}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(msg);
        ctx.request_repaint();
    });
}

pub fn export_config(ctx: &egui::Context, app: &CropDeckApp) {
    let config = app.host.config().clone();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("cropdeck.toml")
            .save_file()
        else {
            return;
        };
        let msg = match write_config(&config, &path) {
            Ok(()) => DialogResult::ConfigExported { path },
            Err(e) => DialogResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(msg);
        ctx.request_repaint();
    });
}

fn write_config(config: &CropConfig, path: &Path) -> Result<()> {
    let content = config.to_toml_string()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}
