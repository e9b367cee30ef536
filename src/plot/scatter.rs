use std::io::Cursor;

use image::{ImageOutputFormat, Rgb, RgbImage};

use crate::gaussian::model::Gaussian2d;

/// Marker colors per cluster/class index (red, blue, green).
pub const CLASS_COLORS: [Rgb<u8>; 3] = [
    Rgb([214, 69, 65]),
    Rgb([65, 105, 225]),
    Rgb([46, 139, 87]),
];

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const MARKER_RADIUS: i64 = 2;

/// Rasterizes a labeled 2-D point cloud into a square scatter plot.
///
/// The viewport is the bounding box of the points with 10% padding; labels
/// index into `CLASS_COLORS`.
pub fn scatter_plot(points: &[[f64; 2]], labels: &[f64], size: u32) -> RgbImage {
    assert_eq!(points.len(), labels.len(), "points and labels must have equal length");
    assert!(size > 0);

    let (min, max) = padded_bounds(points);
    let mut img = RgbImage::from_pixel(size, size, BACKGROUND);

    for (p, &label) in points.iter().zip(labels.iter()) {
        let color = CLASS_COLORS[(label as usize).min(CLASS_COLORS.len() - 1)];
        let (cx, cy) = to_pixel(*p, min, max, size);
        draw_marker(&mut img, cx, cy, color);
    }

    img
}

/// Rasterizes the density surface of a Gaussian over the square
/// `[-half_extent, half_extent]²` as a heat map (white = zero, dark blue =
/// the surface maximum).
pub fn density_plot(gaussian: &Gaussian2d, half_extent: f64, size: u32) -> RgbImage {
    assert!(size > 0);
    assert!(half_extent > 0.0);

    let mut values = vec![0.0; (size * size) as usize];
    let mut peak = f64::MIN;
    for py in 0..size {
        for px in 0..size {
            let x = -half_extent + 2.0 * half_extent * (px as f64 + 0.5) / size as f64;
            // Pixel rows grow downward, data y grows upward.
            let y = half_extent - 2.0 * half_extent * (py as f64 + 0.5) / size as f64;
            let z = gaussian.density([x, y]);
            values[(py * size + px) as usize] = z;
            if z > peak {
                peak = z;
            }
        }
    }

    let mut img = RgbImage::new(size, size);
    for py in 0..size {
        for px in 0..size {
            let t = values[(py * size + px) as usize] / peak;
            img.put_pixel(px, py, heat_color(t));
        }
    }

    img
}

/// Encodes an image as PNG bytes, ready for an HTTP response body.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .map_err(|e| e.to_string())?;
    Ok(buf)
}

/// Bounding box of the points, padded by 10% per side. Degenerate (single
/// point or empty) inputs fall back to a unit box around the data.
fn padded_bounds(points: &[[f64; 2]]) -> ([f64; 2], [f64; 2]) {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for p in points {
        for d in 0..2 {
            min[d] = min[d].min(p[d]);
            max[d] = max[d].max(p[d]);
        }
    }
    if points.is_empty() {
        return ([-1.0, -1.0], [1.0, 1.0]);
    }
    for d in 0..2 {
        let span = max[d] - min[d];
        let pad = if span > 0.0 { span * 0.1 } else { 0.5 };
        min[d] -= pad;
        max[d] += pad;
    }
    (min, max)
}

fn to_pixel(p: [f64; 2], min: [f64; 2], max: [f64; 2], size: u32) -> (i64, i64) {
    let fx = (p[0] - min[0]) / (max[0] - min[0]);
    let fy = (p[1] - min[1]) / (max[1] - min[1]);
    let px = (fx * (size - 1) as f64).round() as i64;
    // Flip vertically so larger y renders higher up.
    let py = ((1.0 - fy) * (size - 1) as f64).round() as i64;
    (px, py)
}

fn draw_marker(img: &mut RgbImage, cx: i64, cy: i64, color: Rgb<u8>) {
    let size = img.width() as i64;
    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            if dx * dx + dy * dy > MARKER_RADIUS * MARKER_RADIUS {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && x < size && y >= 0 && y < size {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// White at t=0 fading to a saturated blue at t=1.
fn heat_color(t: f64) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let fade = |base: u8| (255.0 - (255.0 - base as f64) * t).round() as u8;
    Rgb([fade(30), fade(60), fade(180)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn scatter_marks_pixels_in_class_colors() {
        let points = [[0.0, 0.0], [1.0, 1.0]];
        let labels = [0.0, 1.0];
        let img = scatter_plot(&points, &labels, 64);
        assert_eq!(img.dimensions(), (64, 64));

        let mut reds = 0;
        let mut blues = 0;
        for p in img.pixels() {
            if *p == CLASS_COLORS[0] {
                reds += 1;
            } else if *p == CLASS_COLORS[1] {
                blues += 1;
            }
        }
        assert!(reds > 0 && blues > 0);
    }

    #[test]
    fn density_is_darkest_at_the_center() {
        let g = Gaussian2d::new([0.0, 0.0], Matrix::diag(&[0.5, 0.5]));
        let img = density_plot(&g, 3.0, 65);
        let center = img.get_pixel(32, 32);
        let corner = img.get_pixel(0, 0);
        // Heat map darkens toward the peak, so the center has less red.
        assert!(center.0[0] < corner.0[0]);
    }

    #[test]
    fn encode_png_produces_a_png_header() {
        let img = RgbImage::new(8, 8);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
