use egui::{Response, Ui};
use qrdesk_utils::version_info;

/// Version label for the top bar, `v{version} ({commit})`; the build date
/// shows on hover.
pub fn app_version(ui: &mut Ui) -> Response {
    ui.weak(version_info::format_app_version())
        .on_hover_text(format!("Built {}", version_info::build_date_short()))
}
