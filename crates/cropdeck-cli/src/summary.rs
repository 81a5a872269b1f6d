use std::path::Path;

use anyhow::Result;
use console::Style;
use cropdeck_core::geometry::{cover_fit, SampleRect};
use cropdeck_core::io::SourceImage;
use cropdeck_core::preset::{catalog, MaskShape, Preset};
use cropdeck_core::session::CropOutput;
use cropdeck_core::viewport::ViewportState;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    shape: Style,
    dim: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            shape: Style::new().green(),
            dim: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

fn shape_label(preset: &Preset) -> String {
    match preset.mask {
        MaskShape::Rectangle => format!("{}x{}", preset.width, preset.height),
        MaskShape::Circle => format!("{}x{} circle", preset.width, preset.height),
    }
}

pub fn print_presets(presets: &[Preset]) {
    let s = Styles::new();
    rule(&s, "Presets");

    for preset in presets {
        println!(
            "  {:<20}{:<22}{}",
            s.value.apply_to(preset.tag.as_str()),
            s.shape.apply_to(shape_label(preset)),
            s.label.apply_to(preset.tag),
        );
    }
    println!();
}

pub fn print_source_info(path: &Path, byte_len: usize, source: &SourceImage) -> Result<()> {
    let s = Styles::new();
    rule(&s, "Source Image");

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", source.width(), source.height()))
    );
    match source.format() {
        Some(format) => println!(
            "  {:<14}{}",
            s.label.apply_to("Format"),
            s.value.apply_to(format!("{format:?}"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Format"),
            s.dim.apply_to("unknown")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{:.1} KB", byte_len as f64 / 1024.0))
    );
    println!();

    println!("  {}", s.header.apply_to("Framing at zoom 1"));
    for preset in catalog() {
        let cover = cover_fit(source.width(), source.height(), preset.width, preset.height)?;
        println!(
            "    {:<20}{}",
            s.label.apply_to(preset.tag.as_str()),
            s.value.apply_to(format!(
                "{:.0}x{:.0} at ({:.0}, {:.0})",
                cover.width, cover.height, cover.offset_x, cover.offset_y
            ))
        );
    }
    println!();
    Ok(())
}

pub struct RenderReport<'a> {
    pub input: &'a Path,
    pub source_dims: (u32, u32),
    pub output: &'a CropOutput,
    pub viewport: &'a ViewportState,
    pub sample: &'a SampleRect,
    pub path: &'a Path,
}

pub fn print_render_summary(report: &RenderReport<'_>) {
    let s = Styles::new();
    rule(&s, "Crop");

    let (src_w, src_h) = report.source_dims;
    println!(
        "  {:<14}{} {}",
        s.label.apply_to("Input"),
        s.path.apply_to(report.input.display()),
        s.label.apply_to(format!("({src_w}x{src_h})"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Target"),
        s.shape.apply_to(report.output.target)
    );
    if let Some(slot) = report.output.slot {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Slot"),
            s.value.apply_to(slot)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Viewport"));
    let (pan_x, pan_y) = report.viewport.pan();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.1}x", report.viewport.zoom()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pan"),
        s.value.apply_to(format!("{pan_x:.1}, {pan_y:.1}"))
    );
    let sample = report.sample;
    let clipped = if sample.within(src_w, src_h) {
        s.label.apply_to("")
    } else {
        s.dim.apply_to(" partly outside source")
    };
    println!(
        "    {:<12}{}{}",
        s.label.apply_to("Sampled"),
        s.value.apply_to(format!(
            "{:.1}x{:.1} at ({:.1}, {:.1})",
            sample.width, sample.height, sample.x, sample.y
        )),
        clipped
    );
    println!();

    let image = &report.output.image;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(report.path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Encoded"),
        s.value.apply_to(format!(
            "{}x{} {}, {:.1} KB",
            image.width,
            image.height,
            image.format,
            image.bytes.len() as f64 / 1024.0
        ))
    );
    println!();
}
