use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scanfx::{FrameRGBA, Rect, ScanEffect, ScanEffectConfig, Size, Vector2};

#[derive(Parser, Debug)]
#[command(name = "scanfx", version)]
struct Cli {
    /// Log driver and shader activity to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply an effect config to one image and write a PNG.
    Frame(FrameArgs),
    /// Render the `landing` preset over a progress sweep as a PNG sequence.
    Sweep(SweepArgs),
    /// Print the sampled row displacements for a config as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Sensor area size as `W,H` (defaults to the input image size).
    #[arg(long, value_parser = parse_size)]
    sensor: Option<Size>,

    /// Content frame as `X,Y,W,H` (defaults to the whole image at the sensor origin).
    #[arg(long, value_parser = parse_rect)]
    content: Option<Rect>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Effect config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames; progress runs from 0 to 1 inclusive.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Effect config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Sensor area size as `W,H`.
    #[arg(long, value_parser = parse_size)]
    sensor: Size,

    /// Content frame as `X,Y,W,H`.
    #[arg(long, value_parser = parse_rect)]
    content: Rect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got '{s}'"));
    }
    let mut out = [0.0f64; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{part}': {e}"))?;
        if !slot.is_finite() {
            return Err(format!("'{part}' must be finite"));
        }
    }
    Ok(out)
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = parse_floats::<2>(s)?;
    Ok(Size::new(w, h))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, w, h] = parse_floats::<4>(s)?;
    Ok(Rect::new(x, y, x + w, y + h))
}

fn read_config(path: &Path) -> anyhow::Result<ScanEffectConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = ScanEffectConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn read_image(path: &Path) -> anyhow::Result<FrameRGBA> {
    let img = image::open(path)
        .with_context(|| format!("decode image '{}'", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(FrameRGBA::from_straight_rgba8(
        width,
        height,
        img.into_raw(),
    )?)
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Sensor-sized layer with the content image drawn at the content frame origin.
struct Scene {
    sensor: Size,
    content: Rect,
    layer: FrameRGBA,
}

fn build_scene(image: &FrameRGBA, layout: &LayoutArgs) -> anyhow::Result<Scene> {
    let image_size = Size::new(f64::from(image.width), f64::from(image.height));
    let sensor = layout.sensor.unwrap_or(image_size);
    if sensor.width < 1.0 || sensor.height < 1.0 {
        anyhow::bail!("sensor area must be at least 1x1, got {sensor:?}");
    }
    let content = layout
        .content
        .unwrap_or_else(|| Rect::from_origin_size((0.0, 0.0), image_size));

    let layer = FrameRGBA::place_on_canvas(
        image,
        sensor.width.round() as u32,
        sensor.height.round() as u32,
        content.x0.round() as i64,
        content.y0.round() as i64,
    )?;
    Ok(Scene {
        sensor,
        content,
        layer,
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let image = read_image(&args.in_path)?;
    let scene = build_scene(&image, &args.layout)?;

    let mut fx = ScanEffect::new(cfg);
    fx.set_sensor_area_size(Some(scene.sensor));
    fx.set_content_frame(Some(scene.content));
    let out = fx.render_cpu(&scene.layer)?;

    write_png(&args.out, &out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be > 0");
    }
    let image = read_image(&args.in_path)?;
    let scene = build_scene(&image, &args.layout)?;

    let mut fx = ScanEffect::default();
    fx.set_sensor_area_size(Some(scene.sensor));
    fx.set_content_frame(Some(scene.content));

    for i in 0..args.frames {
        let progress = if args.frames > 1 {
            i as f32 / (args.frames - 1) as f32
        } else {
            1.0
        };
        fx.set_calculator(scanfx::presets::landing(progress));
        let out = fx.render_cpu(&scene.layer)?;
        write_png(&args.out_dir.join(format!("frame_{i:04}.png")), &out)?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    let sample = scanfx::compute_frame(
        Vector2::from(args.sensor),
        args.content.into(),
        &cfg.calculator,
    );
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &sample).context("write frame sample JSON")?;
    println!();
    Ok(())
}
