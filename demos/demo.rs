use std::time::Instant;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(long, default_value = "1000000")]
    iterations: u32,
}

fn main() {
    let opt = Opt::from_args();

    let (r, g, b) = (25u8, 60u8, 128u8);
    println!("Original RGB values (R:{}, G:{}, B:{})", r, g, b);

    let (h, s, v) = hsv_convert::rgb_to_hsv(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );
    println!(
        "HSV values (H:{:.4}, S:{:.4}, V:{:.4})",
        h * 360.0,
        s * 100.0,
        v * 100.0
    );

    let (r2, g2, b2) = hsv_convert::hsv_to_rgb(h, s, v);
    println!(
        "Retrieved RGB values (R:{:.4}, G:{:.4}, B:{:.4})",
        r2 * 255.0,
        g2 * 255.0,
        b2 * 255.0
    );

    let n = opt.iterations;

    let start = Instant::now();
    for _ in 0..n {
        std::hint::black_box(hsv_convert::rgb_to_hsv(
            std::hint::black_box(f64::from(r) / 255.0),
            std::hint::black_box(f64::from(g) / 255.0),
            std::hint::black_box(f64::from(b) / 255.0),
        ));
    }
    let elapsed = start.elapsed();
    println!(
        "rgb_to_hsv: {:?} per call, {:?} overall for {} calls",
        elapsed / n,
        elapsed,
        n
    );

    let start = Instant::now();
    for _ in 0..n {
        std::hint::black_box(hsv_convert::hsv_to_rgb(
            std::hint::black_box(h),
            std::hint::black_box(s),
            std::hint::black_box(v),
        ));
    }
    let elapsed = start.elapsed();
    println!(
        "hsv_to_rgb: {:?} per call, {:?} overall for {} calls",
        elapsed / n,
        elapsed,
        n
    );
}
