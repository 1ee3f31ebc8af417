//! Simple decoder to inspect EDID dumps.
//!
//! Accepts a raw binary dump (e.g. `/sys/class/drm/card0-DP-1/edid`) or a hex
//! text dump (e.g. copied from `xrandr --verbose`). Set `RUST_LOG=debug` to see
//! skipped descriptor slots.

use std::fs;

use edid_decode::{decode_edid, decode_edid_hex, DescriptorBlock, EdidRecord, VideoInput};
use tracing_subscriber::EnvFilter;

fn looks_like_hex(data: &[u8]) -> bool {
    !data.is_empty()
        && data
            .iter()
            .all(|b| b.is_ascii_hexdigit() || b.is_ascii_whitespace())
}

fn print_summary(record: &EdidRecord) {
    let identity = &record.identity;
    println!("=== Identity ===");
    match &identity.manufacturer_name {
        Some(name) => println!("Manufacturer: {} ({})", identity.manufacturer_id, name),
        None => println!("Manufacturer: {}", identity.manufacturer_id),
    }
    println!("Product code: {:#06x}", identity.product_code);
    if identity.serial_number != 0 {
        println!("Serial number: {}", identity.serial_number);
    }
    println!(
        "Manufactured: week {} of {}",
        identity.week_of_manufacture, identity.year_of_manufacture
    );
    println!("EDID version: {}.{}", identity.version, identity.revision);

    println!("\n=== Display ===");
    match &record.display.video_input {
        VideoInput::Digital(input) => println!(
            "Digital input: {} bits per color, {}",
            input.bit_depth, input.interface
        ),
        VideoInput::Analog(input) => match &input.signal_level.label {
            Some(level) => println!(
                "Analog input: {:.3} V / {:.3} V / {:.3} V p-p",
                level.white_v, level.sync_v, level.peak_to_peak_v
            ),
            None => println!("Analog input: level {:#04b}", input.signal_level.raw),
        },
    }
    println!(
        "Image size: {} x {} cm",
        record.display.h_size_cm, record.display.v_size_cm
    );
    if let Some(gamma) = record.display.gamma() {
        println!("Gamma: {:.2}", gamma);
    }
    println!("Display type: {}", record.display.features.display_type);

    println!("\n=== Descriptors ({}) ===", record.descriptors.len());
    for descriptor in &record.descriptors {
        match descriptor {
            DescriptorBlock::DetailedTiming(t) => println!(
                "Detailed timing: {} ({:.2} MHz)",
                t.resolution(),
                t.pixel_clock_hz as f64 / 1_000_000.0
            ),
            DescriptorBlock::Monitor(m) => println!("{}: {}", m.kind.label(), m.text),
            DescriptorBlock::RangeLimits(r) => println!(
                "Range limits: {}-{} Hz V, {}-{} kHz H, {} MHz max",
                r.min_v_rate_hz, r.max_v_rate_hz, r.min_h_rate_khz, r.max_h_rate_khz,
                r.max_pixel_clock_mhz
            ),
            DescriptorBlock::Other(o) => println!("{}", o.kind.label()),
        }
    }

    println!("\n=== Timings ({}) ===", record.timings.len());
    for timing in &record.timings {
        println!("  {}", timing);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/sys/class/drm/card0-eDP-1/edid".to_string());

    println!("Reading: {}", path);
    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes\n", data.len());

    let record = if looks_like_hex(&data) {
        let text = String::from_utf8_lossy(&data);
        decode_edid_hex(&text).expect("Failed to decode")
    } else {
        decode_edid(&data).expect("Failed to decode")
    };

    print_summary(&record);

    println!("\n=== JSON ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&record).expect("Failed to serialize")
    );
}
