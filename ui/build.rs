#[path = "build/icon.rs"]
mod icon;

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");

    icon::print_rerun_directives();
    let icon_pixels = icon::generate_icon(&out_dir);
    embed_windows_icon(icon_pixels, &out_dir);
}

#[cfg(target_os = "windows")]
fn embed_windows_icon(pixels: image::ImageBuffer<image::Rgba<u8>, Vec<u8>>, out_dir: &str) {
    let ico_path = icon::generate_windows_ico(pixels, out_dir);
    icon::compile_windows_resource(&ico_path, out_dir);
}

#[cfg(not(target_os = "windows"))]
fn embed_windows_icon(_pixels: image::ImageBuffer<image::Rgba<u8>, Vec<u8>>, _out_dir: &str) {}
