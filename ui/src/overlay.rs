//! Fullscreen region-selection overlay for screen capture.
//!
//! Runs as an immediate viewport over the frozen screenshot. The area
//! outside the current drag stays dimmed; the drag itself shows the live
//! screenshot with a stroke and a physical-pixel size label.

use egui::{Align2, Color32, FontId, Rect, Stroke, StrokeKind, pos2, vec2};
use qrdesk_business::CaptureRegion;

use crate::state::OverlaySession;

/// What the overlay produced this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    None,
    /// Escape, or a gesture too small to count; no region.
    Cancelled,
    Finished(CaptureRegion),
}

/// Shows the overlay viewport for one frame.
pub fn show(session: &mut OverlaySession, ctx: &egui::Context) -> OverlayEvent {
    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("capture_overlay"),
        egui::ViewportBuilder::default()
            .with_title("Select a region")
            .with_fullscreen(true)
            .with_decorations(false)
            .with_always_on_top(),
        |ctx, class| {
            if class != egui::ViewportClass::Immediate {
                // The backend cannot run a real second window, so the
                // overlay cannot cover the screen. Abort the capture.
                return OverlayEvent::Cancelled;
            }
            let event = overlay_frame(session, ctx);
            if event != OverlayEvent::None {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            event
        },
    )
}

/// Feeds one frame of input into the drag state, then draws.
fn overlay_frame(session: &mut OverlaySession, ctx: &egui::Context) -> OverlayEvent {
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        session.drag.cancel();
        return OverlayEvent::Cancelled;
    }

    let (pressed, released, pointer) = ctx.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.latest_pos(),
        )
    });

    let mut event = OverlayEvent::None;
    if let Some(pos) = pointer {
        if pressed {
            session.drag.begin(pos.x, pos.y);
        } else if session.drag.is_dragging() {
            if released {
                event = match session.drag.finish(pos.x, pos.y, session.scale) {
                    Some(region) => OverlayEvent::Finished(region),
                    None => OverlayEvent::Cancelled,
                };
            } else {
                session.drag.update(pos.x, pos.y);
            }
        }
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(0.0))
        .show(ctx, |ui| draw_overlay(ui, session));

    ctx.request_repaint();
    event
}

fn draw_overlay(ui: &mut egui::Ui, session: &OverlaySession) {
    let backdrop = egui::Image::new((session.texture.id(), session.texture.size_vec2()))
        .fit_to_exact_size(ui.available_size());
    ui.add(backdrop);

    let screen = ui.max_rect();
    let painter = ui.painter();
    let dim = Color32::from_rgba_unmultiplied(0, 0, 0, 128);

    if let Some(rect) = session.drag.selection() {
        let selection =
            Rect::from_min_max(pos2(rect.min_x, rect.min_y), pos2(rect.max_x, rect.max_y));

        // Dim only around the selection so the chosen area stays live.
        let top = Rect::from_min_max(screen.min, pos2(screen.max.x, selection.min.y));
        let bottom = Rect::from_min_max(pos2(screen.min.x, selection.max.y), screen.max);
        let left = Rect::from_min_max(
            pos2(screen.min.x, selection.min.y),
            pos2(selection.min.x, selection.max.y),
        );
        let right = Rect::from_min_max(
            pos2(selection.max.x, selection.min.y),
            pos2(screen.max.x, selection.max.y),
        );
        painter.rect_filled(top, 0.0, dim);
        painter.rect_filled(bottom, 0.0, dim);
        painter.rect_filled(left, 0.0, dim);
        painter.rect_filled(right, 0.0, dim);

        let accent = Color32::from_rgb(64, 156, 255);
        painter.rect_stroke(selection, 0.0, Stroke::new(2.0, accent), StrokeKind::Outside);

        // Size label in screenshot pixels, above the selection when there
        // is room for it.
        let width = (rect.width() * session.scale) as u32;
        let height = (rect.height() * session.scale) as u32;
        let (anchor, label_pos) = if selection.min.y > 24.0 {
            (Align2::LEFT_BOTTOM, selection.left_top() + vec2(0.0, -6.0))
        } else {
            (Align2::LEFT_TOP, selection.left_top() + vec2(6.0, 6.0))
        };
        painter.text(
            label_pos,
            anchor,
            format!("{width} x {height}"),
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    } else {
        painter.rect_filled(screen, 0.0, dim);
        painter.text(
            screen.center(),
            Align2::CENTER_CENTER,
            "Drag to select a region. Esc cancels.",
            FontId::proportional(16.0),
            Color32::from_gray(230),
        );
    }
}
