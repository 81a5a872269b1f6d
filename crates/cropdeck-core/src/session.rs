use std::fmt;

use tracing::{debug, info, warn};

use crate::compose::{Compositor, OutputBuffer};
use crate::config::{CropConfig, ReplacePolicy};
use crate::error::{CropError, Result};
use crate::geometry::{cover_fit, CoverFitRect, SampleRect};
use crate::io::{encode, load, EncodedImage, SourceImage};
use crate::preset::{CropTarget, Preset, PresetTag};
use crate::viewport::ViewportState;

/// Where a crop interaction stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Image decoded, viewport reset, nothing touched yet.
    Loaded,
    /// At least one zoom/pan event has been handled.
    Previewing,
    Confirmed,
    Cancelled,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Previewing => write!(f, "Previewing"),
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// The result of a confirmed crop, handed to the caller's persistence layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropOutput {
    pub target: CropTarget,
    pub tag: PresetTag,
    /// Attachment slot, for multi-slot targets.
    pub slot: Option<usize>,
    pub image: EncodedImage,
}

/// Receives confirmed crops.
pub trait CropSink {
    fn accept(&mut self, output: CropOutput);
}

impl CropSink for Vec<CropOutput> {
    fn accept(&mut self, output: CropOutput) {
        self.push(output);
    }
}

/// Adapts a closure into a [`CropSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(CropOutput)> CropSink for FnSink<F> {
    fn accept(&mut self, output: CropOutput) {
        (self.0)(output)
    }
}

/// One crop interaction, from image load to confirm or cancel.
///
/// `confirm` and `cancel` consume the session, so a finished session cannot
/// emit a second result.
#[derive(Debug)]
pub struct CropSession {
    target: CropTarget,
    preset: Preset,
    cover: CoverFitRect,
    source: SourceImage,
    viewport: ViewportState,
    phase: SessionPhase,
    compositor: Compositor,
    config: CropConfig,
    preview: Option<OutputBuffer>,
}

impl CropSession {
    /// Start a session on an already-decoded image. The viewport starts reset
    /// and an initial preview is rendered.
    pub fn open(target: CropTarget, source: SourceImage, config: CropConfig) -> Result<Self> {
        let preset = target.preset();
        let cover = cover_fit(source.width(), source.height(), preset.width, preset.height)?;
        let compositor = Compositor::new(config.render.clone());

        let mut session = Self {
            target,
            preset,
            cover,
            source,
            viewport: ViewportState::default(),
            phase: SessionPhase::Loaded,
            compositor,
            config,
            preview: None,
        };
        // A failed first frame is not fatal; the next event retries.
        if let Err(e) = session.render_preview() {
            debug!(error = %e, "Opened without an initial preview");
        }

        info!(
            crop = %target,
            source_w = session.source.width(),
            source_h = session.source.height(),
            out_w = preset.width,
            out_h = preset.height,
            "Crop session opened"
        );
        Ok(session)
    }

    pub fn target(&self) -> CropTarget {
        self.target
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn cover_fit(&self) -> &CoverFitRect {
        &self.cover
    }

    /// Current sampled source rectangle.
    pub fn sample_rect(&self) -> SampleRect {
        SampleRect::resolve(&self.cover, &self.viewport)
    }

    /// The last successfully rendered preview.
    pub fn preview(&self) -> Option<&OutputBuffer> {
        self.preview.as_ref()
    }

    /// Switch the output shape mid-session. Zoom and pan start over.
    pub fn set_target(&mut self, target: CropTarget) -> Result<()> {
        let preset = target.preset();
        self.cover = cover_fit(
            self.source.width(),
            self.source.height(),
            preset.width,
            preset.height,
        )?;
        self.target = target;
        self.preset = preset;
        self.viewport.reset();
        self.phase = SessionPhase::Loaded;
        self.render_preview()
    }

    pub fn set_zoom(&mut self, value: f64) -> Result<()> {
        if !self.viewport.set_zoom(value) {
            debug!(value, "Ignoring non-finite zoom");
            return Ok(());
        }
        self.touched()
    }

    pub fn zoom_by(&mut self, step: f64) -> Result<()> {
        if !self.viewport.zoom_by(step) {
            return Ok(());
        }
        self.touched()
    }

    /// Pointer pressed on the crop surface. Nothing changes visually until
    /// the first move, so no re-render.
    pub fn drag_start(&mut self) {
        self.viewport.drag_start();
        self.phase = SessionPhase::Previewing;
    }

    /// Pan by a screen-space delta. Moves outside a drag are ignored and do
    /// not re-render.
    pub fn drag_move(&mut self, dx: f64, dy: f64) -> Result<()> {
        if !self.viewport.drag_move(dx, dy) {
            return Ok(());
        }
        self.touched()
    }

    pub fn drag_end(&mut self) {
        self.viewport.drag_end();
        self.phase = SessionPhase::Previewing;
    }

    fn touched(&mut self) -> Result<()> {
        self.phase = SessionPhase::Previewing;
        self.render_preview()
    }

    /// Re-render the live preview. On failure the previous preview stays.
    pub fn render_preview(&mut self) -> Result<()> {
        let frame = self
            .compositor
            .render(&self.source, &self.preset, &self.viewport);
        self.keep_frame(frame)
    }

    fn keep_frame(&mut self, frame: Result<OutputBuffer>) -> Result<()> {
        match frame {
            Ok(buffer) => {
                self.preview = Some(buffer);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Preview frame dropped");
                Err(e)
            }
        }
    }

    /// Render and encode the final crop without ending the session.
    fn finalize(&self) -> Result<CropOutput> {
        let buffer = self
            .compositor
            .render(&self.source, &self.preset, &self.viewport)?;
        let image = encode(&buffer, self.config.export.format)?;

        info!(
            crop = %self.target,
            zoom = self.viewport.zoom(),
            bytes = image.bytes.len(),
            "Crop confirmed"
        );
        Ok(CropOutput {
            target: self.target,
            tag: self.preset.tag,
            slot: self.target.slot_index(),
            image,
        })
    }

    /// Render and encode the final crop. Consumes the session.
    pub fn confirm(self) -> Result<CropOutput> {
        self.finalize()
    }

    /// Abandon the crop. The source image is released.
    pub fn cancel(self) {
        info!(crop = %self.target, "Crop cancelled");
    }
}

/// Owns the single active crop session.
pub struct SessionHost {
    config: CropConfig,
    active: Option<CropSession>,
    last_phase: SessionPhase,
}

impl SessionHost {
    pub fn new(config: CropConfig) -> Self {
        Self {
            config,
            active: None,
            last_phase: SessionPhase::Idle,
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Replace the settings. The open session keeps the settings it was
    /// opened with; the next upload picks up the new ones.
    pub fn set_config(&mut self, config: CropConfig) {
        self.config = config;
    }

    pub fn session(&self) -> Option<&CropSession> {
        self.active.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut CropSession> {
        self.active.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        self.active
            .as_ref()
            .map(CropSession::phase)
            .unwrap_or(self.last_phase)
    }

    /// Decode `bytes` and open a session for `target`.
    ///
    /// The bytes are decoded before anything else happens, so a decode
    /// failure leaves any open session exactly as it was.
    pub fn load(&mut self, target: CropTarget, bytes: &[u8]) -> Result<&mut CropSession> {
        let source = load(bytes, &self.config.loader)?;
        self.open(target, source)
    }

    /// Open a session on an already-decoded image, applying the replace policy.
    pub fn open(&mut self, target: CropTarget, source: SourceImage) -> Result<&mut CropSession> {
        if let Some(current) = &self.active {
            match self.config.session.replace_policy {
                ReplacePolicy::RequireResolve => return Err(CropError::SessionBusy),
                ReplacePolicy::Replace => {
                    warn!(
                        previous = %current.target(),
                        phase = %current.phase(),
                        "Discarding in-progress crop for new upload"
                    );
                }
            }
        }

        let session = CropSession::open(target, source, self.config.clone())?;
        Ok(self.active.insert(session))
    }

    fn active_mut(&mut self) -> Result<&mut CropSession> {
        self.active.as_mut().ok_or(CropError::NoActiveSession)
    }

    pub fn set_zoom(&mut self, value: f64) -> Result<()> {
        self.active_mut()?.set_zoom(value)
    }

    pub fn zoom_by(&mut self, step: f64) -> Result<()> {
        self.active_mut()?.zoom_by(step)
    }

    pub fn drag_start(&mut self) -> Result<()> {
        self.active_mut()?.drag_start();
        Ok(())
    }

    pub fn drag_move(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.active_mut()?.drag_move(dx, dy)
    }

    pub fn drag_end(&mut self) -> Result<()> {
        self.active_mut()?.drag_end();
        Ok(())
    }

    /// Finish the active session and hand exactly one output to `sink`.
    ///
    /// If the final render or encode fails the session stays open so the user
    /// can adjust and retry.
    pub fn confirm(&mut self, sink: &mut dyn CropSink) -> Result<()> {
        let session = self.active.as_ref().ok_or(CropError::NoActiveSession)?;
        let output = session.finalize().inspect_err(|e| {
            warn!(crop = %session.target(), error = %e, "Confirm failed, session kept open");
        })?;

        self.active = None;
        self.last_phase = SessionPhase::Confirmed;
        sink.accept(output);
        Ok(())
    }

    /// Abandon the active session without emitting anything.
    pub fn cancel(&mut self) -> Result<()> {
        let session = self.active.take().ok_or(CropError::NoActiveSession)?;
        session.cancel();
        self.last_phase = SessionPhase::Cancelled;
        Ok(())
    }
}
