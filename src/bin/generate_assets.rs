//! Regenerates the committed placeholder art in `assets/`.
//!
//! The app embeds these files at compile time via `egui::include_image!`,
//! so they are checked in; rerun this only when the look changes:
//!
//! ```text
//! cargo run --bin generate_assets
//! ```
//!
//! Everything is deterministic: same code, same pixels.

use image::{Rgba, RgbaImage};

/// Asset name and base hue (degrees) for each restaurant photo.
const PHOTOS: [(&str, f32); 5] = [
    ("rest1", 8.0),   // Tex-Mex red
    ("rest2", 36.0),  // pizzeria orange
    ("rest3", 96.0),  // diner green
    ("rest4", 204.0), // wok blue
    ("rest5", 288.0), // Riverwalk purple
];

const PHOTO_WIDTH: u32 = 320;
const PHOTO_HEIGHT: u32 = 240;

/// Minimal HSL → RGB, enough for flat placeholder art.
fn hsl(h: f32, s: f32, l: f32) -> Rgba<u8> {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgba([
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
        255,
    ])
}

/// A photo placeholder: vertical gradient, a lighter "plate" disc, and a
/// darker frame so thumbnails read as tiles against any panel color.
fn photo(hue: f32) -> RgbaImage {
    let (w, h) = (PHOTO_WIDTH, PHOTO_HEIGHT);
    let mut img = RgbaImage::new(w, h);

    for y in 0..h {
        let t = y as f32 / (h - 1) as f32;
        let row = hsl(hue, 0.55, 0.62 - 0.28 * t);
        for x in 0..w {
            img.put_pixel(x, y, row);
        }
    }

    let cx = w as f32 / 2.0;
    let cy = h as f32 * 0.58;
    let radius = 62.0;
    let plate = hsl(hue, 0.22, 0.88);
    let rim = hsl(hue, 0.40, 0.30);
    for y in 0..h {
        for x in 0..w {
            let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            if d < radius {
                img.put_pixel(x, y, plate);
            } else if d < radius + 3.0 {
                img.put_pixel(x, y, rim);
            }
        }
    }

    let frame = hsl(hue, 0.45, 0.22);
    for x in 0..w {
        for t in 0..4 {
            img.put_pixel(x, t, frame);
            img.put_pixel(x, h - 1 - t, frame);
        }
    }
    for y in 0..h {
        for t in 0..4 {
            img.put_pixel(t, y, frame);
            img.put_pixel(w - 1 - t, y, frame);
        }
    }

    img
}

/// The wordmark-less logo: one colored tile per restaurant on a dark strip.
fn logo(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let background = Rgba([40, 44, 52, 255]);
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, background);
        }
    }

    let n = PHOTOS.len() as u32;
    let pad = height / 5;
    let tile = height - 2 * pad;
    let cell = (width - 2 * pad) / n;
    let tile_w = tile.min(cell.saturating_sub(1).max(1));
    for (i, &(_, hue)) in PHOTOS.iter().enumerate() {
        let color = hsl(hue, 0.60, 0.55);
        let x0 = pad + i as u32 * cell + (cell - tile_w) / 2;
        for y in pad..pad + tile {
            for x in x0..x0 + tile_w {
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

fn main() {
    std::fs::create_dir_all("assets").expect("Failed to create assets directory");

    for &(name, hue) in &PHOTOS {
        let path = format!("assets/{name}.png");
        photo(hue).save(&path).expect("Failed to write photo");
        println!("Wrote {path}");
    }

    logo(240, 64)
        .save("assets/logo.png")
        .expect("Failed to write logo");
    println!("Wrote assets/logo.png");

    // Windows resource icon, embedded by build.rs.
    logo(32, 32)
        .save("assets/logo.ico")
        .expect("Failed to write icon");
    println!("Wrote assets/logo.ico");
}
