use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use image::{DynamicImage, GrayImage};
use qrdesk_business::capture::DragState;
use qrdesk_business::{Source, capture, codec};

use crate::overlay::{self, OverlayEvent};
use crate::state::{AppCommand, AppState, CapturePhase, OverlaySession, Page};
use crate::utils::{clipboard, drop_handler, file_picker, screen, texture};
use crate::{pages, widgets};

/// How long the main window gets to disappear before the screen grab.
const CAPTURE_SETTLE: Duration = Duration::from_millis(300);

pub struct QrDeskApp {
    pub state: AppState,
}

impl QrDeskApp {
    /// Called once before the first frame.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Applies every command the pages queued during the draw pass.
    fn drain_commands(&mut self, ctx: &egui::Context) {
        while let Some(command) = self.state.next_command() {
            match command {
                AppCommand::StartCapture => self.start_capture(ctx),
                AppCommand::PickDecodeImage => self.pick_and_decode(ctx),
                AppCommand::CopyText(text) => {
                    ctx.copy_text(text);
                    self.state.status = "Copied to clipboard".to_owned();
                }
                AppCommand::OpenUrl(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
                AppCommand::SaveQrPng => self.save_rendered_qr(),
            }
        }
    }

    /// Hides the main window and schedules the screen grab.
    fn start_capture(&mut self, ctx: &egui::Context) {
        if self.state.capture.is_some() {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
        self.state.capture = Some(CapturePhase::Settling {
            until: Instant::now() + CAPTURE_SETTLE,
        });
        ctx.request_repaint();
    }

    /// Waits out the settle deadline, then takes the screenshot and opens
    /// the overlay.
    fn advance_capture(&mut self, ctx: &egui::Context) {
        let Some(CapturePhase::Settling { until }) = self.state.capture else {
            return;
        };
        let now = Instant::now();
        if now < until {
            ctx.request_repaint_after(until - now);
            return;
        }

        match screen::capture_primary() {
            Ok(shot) => {
                let backdrop = ctx.load_texture(
                    "capture_backdrop",
                    texture::rgba_to_color_image(&shot.image),
                    egui::TextureOptions::LINEAR,
                );
                self.state.capture = Some(CapturePhase::Selecting(OverlaySession {
                    screenshot: shot.image,
                    texture: backdrop,
                    scale: shot.scale,
                    drag: DragState::default(),
                }));
                ctx.request_repaint();
            }
            Err(err) => {
                log::error!("screen capture failed: {err}");
                self.state.status = format!("Screen capture failed: {err}");
                self.state.capture = None;
                restore_main_window(ctx);
            }
        }
    }

    /// Runs the fullscreen overlay viewport and reacts to its outcome.
    fn show_capture_overlay(&mut self, ctx: &egui::Context) {
        let Some(CapturePhase::Selecting(session)) = &mut self.state.capture else {
            return;
        };
        match overlay::show(session, ctx) {
            OverlayEvent::None => {}
            OverlayEvent::Cancelled => {
                self.state.capture = None;
                restore_main_window(ctx);
                self.state.status = "Capture cancelled".to_owned();
            }
            OverlayEvent::Finished(region) => {
                let Some(CapturePhase::Selecting(session)) = self.state.capture.take() else {
                    return;
                };
                restore_main_window(ctx);
                match capture::crop_region(&session.screenshot, region) {
                    Ok(cropped) => {
                        self.present_decode(
                            ctx,
                            DynamicImage::ImageRgba8(cropped),
                            Source::ScreenCapture,
                        );
                    }
                    Err(err) => {
                        self.state.status = format!("Capture failed: {err}");
                        self.state.page = Page::Decode;
                    }
                }
            }
        }
    }

    /// Opens the image file dialog and decodes whatever was picked.
    fn pick_and_decode(&mut self, ctx: &egui::Context) {
        let Some(image) = self.state.file_picker.pick_image() else {
            return;
        };
        match image.to_dynamic_image() {
            Some(dynamic) => self.present_decode(ctx, dynamic, Source::ImageDecode),
            None => self.state.status = "Could not read that image".to_owned(),
        }
    }

    /// Shows `image` on the decode page, decodes it, and records a hit.
    fn present_decode(&mut self, ctx: &egui::Context, image: DynamicImage, source: Source) {
        let preview = texture::dynamic_to_color_image(&image);
        self.state.decode.preview =
            Some(ctx.load_texture("decode_preview", preview, egui::TextureOptions::LINEAR));

        match codec::decode(&image) {
            Ok(content) => {
                self.state.status = "Decoded 1 QR code".to_owned();
                if let Err(err) = self.state.store.append(source, content.clone()) {
                    log::error!("appending history entry failed: {err}");
                    self.state.status = format!("Decoded, but history was not saved: {err}");
                }
                self.state.decode.result = Some(content);
            }
            Err(err) => {
                self.state.decode.result = None;
                self.state.status = err.to_string();
            }
        }

        self.state.page = Page::Decode;
    }

    /// Asks for a target path and writes the rendered QR code as PNG.
    fn save_rendered_qr(&mut self) {
        let Some(rendered) = &self.state.generate.rendered else {
            self.state.status = "Generate a QR code first".to_owned();
            return;
        };
        let Some(path) = self.state.file_picker.save_png("qr.png") else {
            return;
        };
        match write_png(&rendered.image, &path) {
            Ok(()) => self.state.status = format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("saving QR PNG failed: {err:#}");
                self.state.status = format!("Save failed: {err}");
            }
        }
    }
}

impl eframe::App for QrDeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Ctrl+V anywhere decodes an image straight off the clipboard.
        if let Some(image) = clipboard::handle_paste_shortcut(ctx) {
            match image.to_dynamic_image() {
                Some(dynamic) => self.present_decode(ctx, dynamic, Source::ImageDecode),
                None => self.state.status = "Clipboard image has an unexpected format".to_owned(),
            }
        }
        // So does dropping an image file onto the window.
        if let Some(image) = drop_handler::handle_dropped_files(ctx) {
            match image.to_dynamic_image() {
                Some(dynamic) => self.present_decode(ctx, dynamic, Source::ImageDecode),
                None => self.state.status = "Could not read the dropped file".to_owned(),
            }
        }
        // Ctrl+O opens the same dialog as the decode page button.
        if file_picker::open_shortcut_pressed(ctx) {
            self.state.send(AppCommand::PickDecodeImage);
        }

        self.advance_capture(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.selectable_value(&mut self.state.page, Page::Generate, "Generate");
                ui.selectable_value(&mut self.state.page, Page::Decode, "Decode");
                ui.selectable_value(&mut self.state.page, Page::History, "History");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::app_version(ui);
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.state.status).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Generate => pages::generate_page(&mut self.state, ui),
            Page::Decode => pages::decode_page(&mut self.state, ui),
            Page::History => pages::history_page(&mut self.state, ui),
        });

        self.drain_commands(ctx);
        self.show_capture_overlay(ctx);
    }
}

fn restore_main_window(ctx: &egui::Context) {
    ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Visible(true));
    ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Focus);
}

fn write_png(image: &GrayImage, path: &Path) -> anyhow::Result<()> {
    let bytes = codec::to_png_bytes(image).context("encoding PNG")?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
