//! Build-time icon generation.
//!
//! The window icon is not checked in as an asset. It is rendered here: a QR
//! code of the product name, dark blue on white. The same pixels feed the
//! Windows ICO resource.

use image::{ImageBuffer, Rgba};
use std::path::Path;

const ICON_TEXT: &str = "QR Desk";
const MODULE_PIXELS: u32 = 8;
const QUIET_ZONE_MODULES: u32 = 2;

const FOREGROUND: Rgba<u8> = Rgba([0x1f, 0x3a, 0x5f, 0xff]);
const BACKGROUND: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Renders the icon pixels.
fn render() -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let code = qrcode::QrCode::new(ICON_TEXT.as_bytes()).expect("Failed to encode icon QR");
    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS;
    let mut img = ImageBuffer::from_pixel(side, side, BACKGROUND);

    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color != qrcode::Color::Dark {
            continue;
        }
        let index = index as u32;
        let module_x = (index % modules + QUIET_ZONE_MODULES) * MODULE_PIXELS;
        let module_y = (index / modules + QUIET_ZONE_MODULES) * MODULE_PIXELS;
        for dy in 0..MODULE_PIXELS {
            for dx in 0..MODULE_PIXELS {
                img.put_pixel(module_x + dx, module_y + dy, FOREGROUND);
            }
        }
    }

    img
}

/// Generates the icon PNG in the output directory and returns the pixels
/// for further processing.
pub fn generate_icon(out_dir: &str) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let out_png_path = Path::new(out_dir).join("icon.png");
    let img = render();

    img.save(&out_png_path).expect("Failed to save icon PNG");

    img
}

/// Generates the Windows ICO file from the rendered icon.
#[cfg(target_os = "windows")]
pub fn generate_windows_ico(
    img: ImageBuffer<Rgba<u8>, Vec<u8>>,
    out_dir: &str,
) -> std::path::PathBuf {
    use std::fs::File;
    use std::io::BufWriter;

    let ico_path = Path::new(out_dir).join("icon.ico");

    let ico_file = File::create(&ico_path).expect("Failed to create ICO file");
    let mut ico_writer = BufWriter::new(ico_file);

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    let (width, height) = img.dimensions();
    let icon_image = ico::IconImage::from_rgba_data(width, height, img.into_raw());
    icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image).expect("Failed to encode icon"));
    icon_dir
        .write(&mut ico_writer)
        .expect("Failed to write ICO file");

    ico_path
}

/// Compiles the Windows resource file for the icon.
#[cfg(target_os = "windows")]
pub fn compile_windows_resource(ico_path: &std::path::Path, out_dir: &str) {
    let rc_content = format!("1 ICON \"{}\"", ico_path.display());
    let rc_path = Path::new(out_dir).join("windows-resources.rc");
    std::fs::write(&rc_path, rc_content).expect("Failed to write RC file");

    embed_resource::compile(&rc_path, embed_resource::NONE);
}

/// Prints cargo directives for build script rerun conditions.
pub fn print_rerun_directives() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/icon.rs");
}
